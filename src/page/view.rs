//! Render composition.
//!
//! Builds the description of what the page shows: header, main column,
//! featured sidebar, profile dialog and the session-expired alert. Widgets
//! themselves live outside this crate.

use serde::Serialize;
use std::fmt;

use crate::models::{UserProfile, VideoRecord};
use crate::page::state::PageState;
use crate::session::SessionNotice;
use crate::theme::AccentColor;

pub const LOADING_MESSAGE: &str = "Loading video...";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub dark_mode: bool,
    pub accent: AccentColor,
    pub user_name: Option<String>,
    pub signed_in: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MainView {
    Loading { message: &'static str },
    /// Player, details and the comment section for the loaded video.
    Video {
        video: VideoRecord,
        comments_for: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedItem {
    pub id: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialogView {
    pub open: bool,
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub header: HeaderView,
    pub main: MainView,
    pub featured: Vec<FeaturedItem>,
    pub profile_dialog: DialogView,
    pub alert: Option<SessionNotice>,
}

impl PageView {
    pub fn compose(state: &PageState, notice: Option<SessionNotice>) -> Self {
        let header = HeaderView {
            dark_mode: state.theme.dark_mode,
            accent: state.theme.accent,
            user_name: state
                .user
                .as_ref()
                .and_then(UserProfile::display_name)
                .map(str::to_string),
            signed_in: state.user.is_some(),
        };

        let main = match &state.video {
            Some(video) => MainView::Video {
                comments_for: video.id(),
                video: video.clone(),
            },
            None => MainView::Loading { message: LOADING_MESSAGE },
        };

        let featured = state
            .featured
            .iter()
            .flatten()
            .map(|video| FeaturedItem {
                id: video.id(),
                title: video.title().map(str::to_string),
            })
            .collect();

        Self {
            header,
            main,
            featured,
            profile_dialog: DialogView {
                open: state.dialog_open,
                user: state.user.clone(),
            },
            alert: notice,
        }
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[{} | accent {}] {}",
            if self.header.dark_mode { "dark" } else { "light" },
            self.header.accent,
            self.header.user_name.as_deref().unwrap_or("(signed out)")
        )?;

        match &self.main {
            MainView::Loading { message } => writeln!(f, "{}", message)?,
            MainView::Video { video, comments_for } => {
                writeln!(f, "Now playing: {}", video.title().unwrap_or("(untitled)"))?;
                if let Some(id) = comments_for {
                    writeln!(f, "Comments for video {}", id)?;
                }
            }
        }

        writeln!(f, "Featured videos ({}):", self.featured.len())?;
        for item in &self.featured {
            writeln!(
                f,
                "  - {} [{}]",
                item.title.as_deref().unwrap_or("(untitled)"),
                item.id.as_deref().unwrap_or("?")
            )?;
        }

        if let Some(alert) = &self.alert {
            writeln!(f, "!! {}: {}", alert.title, alert.description)?;
        }
        Ok(())
    }
}
