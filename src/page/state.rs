//! Transient page state.

use serde::Serialize;

use crate::models::{UserProfile, VideoList, VideoRecord};
use crate::theme::ThemePreference;

/// Everything the page holds between mount and unmount. `None` means the
/// resource has not arrived (yet).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageState {
    pub theme: ThemePreference,
    pub user: Option<UserProfile>,
    pub video: Option<VideoRecord>,
    pub featured: Option<VideoList>,
    pub dialog_open: bool,
}

impl PageState {
    pub fn with_theme(theme: ThemePreference) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn is_video_loaded(&self) -> bool {
        self.video.is_some()
    }
}
