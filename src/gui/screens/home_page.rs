use std::path::PathBuf;

use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, text},
};
use rfd::AsyncFileDialog;

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};
use crate::models::SupportedFormat;

#[derive(Debug, Clone, Default)]
pub struct HomePageScreen {
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum HomePageMessage {
    OpenImage,
    None,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    PickedImage(PathBuf),
}

impl HomePageScreen {
    pub fn with_error(error: String) -> Self {
        Self { error: Some(error) }
    }
}

impl Screen for HomePageScreen {
    type Message = HomePageMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut content = column![
            text("Superscale").size(32),
            text("Enhance low-resolution images with a pretrained deep learning model"),
            button("Open Image...").on_press(ScreenMessage::ScreenMessage(
                HomePageMessage::OpenImage
            )),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        if let Some(error) = &self.error {
            content = content.push(text(error.clone()).style(text::danger));
        }

        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            HomePageMessage::OpenImage => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Pick a low-resolution image")
                    .add_filter("Images", &SupportedFormat::EXTENSIONS)
                    .pick_file(),
                |handle| match handle {
                    Some(file) => ScreenMessage::ParentMessage(ParentMessage::PickedImage(
                        file.path().to_path_buf(),
                    )),
                    None => ScreenMessage::ScreenMessage(HomePageMessage::None),
                },
            ),
            HomePageMessage::None => Task::none(),
        }
    }
}
