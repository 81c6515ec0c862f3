use std::path::PathBuf;
use std::sync::Arc;

use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, row, text},
};
use rfd::AsyncFileDialog;

use crate::enhance::fetch::MODEL_ID;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets::{self, Step},
};
use crate::models::{EnhancedImage, SourceImage};

#[derive(Debug, Clone)]
pub struct EnhancePageScreen {
    source: Arc<SourceImage>,
    source_handle: iced::widget::image::Handle,
    enhanced: Option<Arc<EnhancedImage>>,
    enhanced_handle: Option<iced::widget::image::Handle>,
    enhancing: bool,
    status: Option<String>,
}

#[derive(Debug, Clone)]
pub enum EnhancePageMessage {
    Enhance,
    Enhanced(Result<Arc<EnhancedImage>, String>),
    PickSaveTarget,
    SaveTo(PathBuf),
    Saved(Result<PathBuf, String>),
    None,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    OpenAnother,
}

impl EnhancePageScreen {
    pub fn new(source: Arc<SourceImage>) -> Self {
        let source_handle = widgets::image_handle(&source.image);
        Self {
            source,
            source_handle,
            enhanced: None,
            enhanced_handle: None,
            enhancing: false,
            status: None,
        }
    }

    fn step(&self) -> Step {
        if self.enhanced.is_some() {
            Step::Save
        } else {
            Step::Enhance
        }
    }
}

impl Screen for EnhancePageScreen {
    type Message = EnhancePageMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let original_pane = widgets::preview_pane(
            format!("Original ({}x{})", self.source.width(), self.source.height()),
            Some(self.source_handle.clone()),
        );

        let enhanced_pane = match (&self.enhanced, &self.enhanced_handle) {
            (Some(enhanced), Some(handle)) => widgets::preview_pane(
                format!("Enhanced ({}x{})", enhanced.width(), enhanced.height()),
                Some(handle.clone()),
            ),
            _ => widgets::preview_pane(
                if self.enhancing {
                    "Enhancing...".to_string()
                } else {
                    "Enhanced".to_string()
                },
                None,
            ),
        };

        let enhance_button = button("Enhance Image").on_press_maybe(
            (!self.enhancing).then_some(ScreenMessage::ScreenMessage(EnhancePageMessage::Enhance)),
        );
        let save_button = button("Save PNG...").on_press_maybe(self.enhanced.as_ref().map(|_| {
            ScreenMessage::ScreenMessage(EnhancePageMessage::PickSaveTarget)
        }));
        let open_button =
            button("Open Another").on_press(ScreenMessage::ParentMessage(ParentMessage::OpenAnother));

        let mut content = column![
            row![original_pane, enhanced_pane].spacing(20),
            row![enhance_button, save_button, open_button].spacing(20),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        if let Some(status) = &self.status {
            content = content.push(text(status.clone()));
        }

        let sidebar = column![
            text("Model"),
            text(MODEL_ID),
            text("4x super-resolution"),
        ]
        .spacing(5)
        .padding(10);

        widgets::layout(sidebar, content, self.step())
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            EnhancePageMessage::Enhance => {
                if self.enhancing {
                    return Task::none();
                }
                self.enhancing = true;
                self.status = Some("Enhancing image resolution...".to_string());

                // Inference is CPU-bound (and the first run may download the
                // model), so it goes on a blocking task off the UI thread
                let enhancer = state.enhancer.clone();
                let image = self.source.image.clone();
                Task::perform(
                    async move {
                        tokio::task::spawn_blocking(move || enhancer.enhance(&image))
                            .await
                            .map_err(anyhow::Error::from)
                            .and_then(|result| result)
                            .map(Arc::new)
                            .map_err(|e| format!("{e:#}"))
                    },
                    |result| ScreenMessage::ScreenMessage(EnhancePageMessage::Enhanced(result)),
                )
            }
            EnhancePageMessage::Enhanced(result) => {
                self.enhancing = false;
                match result {
                    Ok(enhanced) => {
                        self.enhanced_handle = Some(widgets::image_handle(&enhanced.image));
                        self.enhanced = Some(enhanced);
                        self.status = None;
                    }
                    Err(err) => {
                        self.status = Some(format!("Enhancement failed: {err}"));
                    }
                }
                Task::none()
            }
            EnhancePageMessage::PickSaveTarget => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Save enhanced image")
                    .set_file_name("super_resolved.png")
                    .add_filter("PNG image", &["png"])
                    .save_file(),
                |handle| match handle {
                    Some(file) => ScreenMessage::ScreenMessage(EnhancePageMessage::SaveTo(
                        file.path().to_path_buf(),
                    )),
                    None => ScreenMessage::ScreenMessage(EnhancePageMessage::None),
                },
            ),
            EnhancePageMessage::SaveTo(path) => {
                let Some(enhanced) = self.enhanced.clone() else {
                    return Task::none();
                };
                Task::perform(
                    async move {
                        let bytes = enhanced.to_png_bytes().map_err(|e| format!("{e:#}"))?;
                        std::fs::write(&path, bytes)
                            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
                        Ok(path)
                    },
                    |result: Result<PathBuf, String>| {
                        ScreenMessage::ScreenMessage(EnhancePageMessage::Saved(result))
                    },
                )
            }
            EnhancePageMessage::Saved(result) => {
                match result {
                    Ok(path) => {
                        self.status = Some(format!("Saved to {}", path.display()));
                    }
                    Err(err) => {
                        self.status = Some(format!("Save failed: {err}"));
                    }
                }
                Task::none()
            }
            EnhancePageMessage::None => Task::none(),
        }
    }
}
