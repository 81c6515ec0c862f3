use image::{Rgb, RgbImage};

fn main() {
    let mut img = RgbImage::new(160, 120);

    // Fill with a gradient
    for y in 0..120 {
        for x in 0..160 {
            let r = (x * 255 / 160) as u8;
            let g = (y * 255 / 120) as u8;
            let b = 128;
            img.put_pixel(x, y, Rgb([r, g, b]));
        }
    }

    img.save("lowres.png").unwrap();
    println!("Created lowres.png (160x120 RGB gradient)");
}
