pub mod enhance_page;
pub mod home_page;
pub mod loading_page;

use std::sync::Arc;

use iced::{Element, Task};

use crate::gui::{AppState, Message};
use crate::models::SourceImage;

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    HomePage(home_page::HomePageScreen),
    LoadingPage(loading_page::LoadingPageScreen),
    EnhancePage(enhance_page::EnhancePageScreen),
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::HomePage(screen) => screen.view().map(Message::HomePage),
            ScreenData::LoadingPage(screen) => screen.view().map(Message::LoadingPage),
            ScreenData::EnhancePage(screen) => screen.view().map(Message::EnhancePage),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(screen)) => {
                *x = screen;
                Task::none()
            }
            (x, Message::ImageOpened(result)) => {
                match result {
                    Ok(source) => {
                        *x = ScreenData::EnhancePage(enhance_page::EnhancePageScreen::new(source));
                    }
                    Err(err) => {
                        *x = ScreenData::HomePage(home_page::HomePageScreen::with_error(err));
                    }
                }
                Task::none()
            }
            (ScreenData::HomePage(page), Message::HomePage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::HomePage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    home_page::ParentMessage::PickedImage(path) => {
                        // Decoding happens off the update loop; failures land
                        // back on the home screen as an error message
                        Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                            ScreenData::LoadingPage(loading_page::LoadingPageScreen::opening()),
                        )))
                        .chain(Task::perform(
                            async move { SourceImage::open(&path).map(Arc::new) },
                            |result: Result<Arc<SourceImage>, anyhow::Error>| {
                                ScreenMessage::ScreenMessage(Message::ImageOpened(
                                    result.map_err(|e| format!("{e:#}")),
                                ))
                            },
                        ))
                    }
                },
            },
            (ScreenData::EnhancePage(page), Message::EnhancePage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::EnhancePage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    enhance_page::ParentMessage::OpenAnother => {
                        Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                            ScreenData::HomePage(home_page::HomePageScreen::default()),
                        )))
                    }
                },
            },
            _ => Task::none(),
        }
    }
}
