//! Headless video watch page.
//!
//! Owns everything the watch page does besides drawing pixels: theme
//! preference, authentication subscription, session expiry and the
//! primary/secondary fetch of the profile, the video and the featured list.

pub mod auth;
pub mod config;
pub mod fetch;
pub mod models;
pub mod observability;
pub mod page;
pub mod session;
pub mod storage;
pub mod theme;

pub use config::schema::PageConfig;
pub use fetch::{ResilientFetcher, VideoApi};
pub use page::{MountedPage, PageDeps, VideoPage};
pub use session::SessionMonitor;
