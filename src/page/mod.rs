//! The watch page.
//!
//! # Data Flow
//! ```text
//! mount(route id):
//!     storage → ThemePreference → StyleSink
//!     storage → Credential
//!     AuthProvider → AuthSubscription ─┐
//!                                      ├→ profile fetch ─┐
//!     route id ───────────────────────→ video fetch ─────┼→ PageState
//!     ────────────────────────────────→ featured fetch ──┘
//!
//! any 401 → SessionMonitor → notice + redirect
//! PageState + notice → view.rs → PageView
//! ```
//!
//! # Design Decisions
//! - The three fetches are independent tasks; each writes only its own field
//! - A failed fetch leaves its field unset; only 401 is user visible
//! - Unmount drops the auth subscription; in-flight fetches are abandoned

pub mod bootstrap;
pub mod state;
pub mod view;

pub use bootstrap::{MountedPage, PageDeps, VideoPage};
pub use state::PageState;
pub use view::{MainView, PageView};
