use iced::widget::container::bordered_box;
use iced::widget::image::Handle;
use iced::{
    Color, Element, Theme, border,
    widget::{column, container, container::Style, row, text},
};
use image::RgbImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Open,
    Enhance,
    Save,
}

impl PartialOrd for Step {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Step {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use Step::*;
        let self_val = match self {
            Open => 0,
            Enhance => 1,
            Save => 2,
        };
        let other_val = match other {
            Open => 0,
            Enhance => 1,
            Save => 2,
        };
        self_val.cmp(&other_val)
    }
}

impl Step {
    fn style(self, other: Self) -> impl Fn(&Theme) -> Style {
        move |theme: &Theme| {
            let style = bordered_box(theme).border(border::width(5));
            // if done, gray out background
            if self >= other {
                let mut color_rgba = theme.palette().background.into_rgba8();
                color_rgba[0] /= 2;
                color_rgba[1] /= 2;
                color_rgba[2] /= 2;
                style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
            } else {
                style.background(theme.palette().background)
            }
        }
    }
}

/// Wrap an RGB bitmap into a handle the image widget can display
pub fn image_handle(image: &RgbImage) -> Handle {
    let (width, height) = image.dimensions();
    let mut rgba = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for pixel in image.pixels() {
        let [r, g, b] = pixel.0;
        rgba.extend_from_slice(&[r, g, b, 255]);
    }
    Handle::from_rgba(width, height, rgba)
}

/// A titled, bordered preview; shows a placeholder until a handle exists
pub fn preview_pane<'a, Message>(title: String, handle: Option<Handle>) -> Element<'a, Message>
where
    Message: 'a,
{
    let body: Element<'a, Message> = match handle {
        Some(handle) => iced::widget::image(handle).width(iced::Length::Fill).into(),
        None => container(text("awaiting enhancement")).padding(40).into(),
    };

    container(column![text(title), body].spacing(10))
        .style(bordered_box)
        .padding(10)
        .width(iced::Length::FillPortion(1))
        .into()
}

pub fn layout<'a, Message>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
    step: Step,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(row![
        container(column![
            container(column![
                container(text("Open")).style(step.style(Step::Open)).padding(10),
                container(text("Enhance")).style(step.style(Step::Enhance)).padding(10),
                container(text("Save")).style(step.style(Step::Save)).padding(10),
            ]),
            container(sidebar.into()).height(iced::Length::Fill),
        ]).width(iced::Length::FillPortion(1)),
        container(main_content.into()).width(iced::Length::FillPortion(4)),
    ])
    .center_x(iced::Length::Fill)
    .center_y(iced::Length::Fill)
    .into()
}
