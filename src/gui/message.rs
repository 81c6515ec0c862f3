use std::sync::Arc;

use crate::gui::screens::{
    ScreenData, ScreenMessage, enhance_page::EnhancePageScreen, home_page::HomePageScreen,
    loading_page::LoadingPageScreen,
};
use crate::models::SourceImage;

#[derive(Debug)]
pub enum Message {
    HomePage(ScreenMessage<HomePageScreen>),
    LoadingPage(ScreenMessage<LoadingPageScreen>),
    EnhancePage(ScreenMessage<EnhancePageScreen>),
    ChangeScreen(ScreenData),
    ImageOpened(Result<Arc<SourceImage>, String>),
}
