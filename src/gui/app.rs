use std::sync::Arc;

use iced::{Element, Task, Theme};

use super::screens::{Screen, ScreenData, ScreenMessage, home_page::HomePageScreen};
use super::{AppState, Message};
use crate::enhance::{Enhancer, ModelSource};

/// Launch the interactive window
pub fn run(source: ModelSource, verbose: bool) -> iced::Result {
    let enhancer = Arc::new(Enhancer::new(source).with_verbose(verbose));

    iced::application(move || App::new(enhancer.clone()), App::update, App::view)
        .title("Superscale - AI Image Super-Resolution")
        .theme(App::theme)
        .window_size((960.0, 640.0))
        .run()
}

struct App {
    state: AppState,
    screen: ScreenData,
}

impl App {
    fn new(enhancer: Arc<Enhancer>) -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::new(enhancer),
                screen: ScreenData::HomePage(HomePageScreen::default()),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.screen.update(message, &mut self.state).map(unwrap_root)
    }

    fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(unwrap_root)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

// ScreenData is the root screen, so its parent channel is uninhabited
fn unwrap_root(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}
