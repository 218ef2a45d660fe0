//! Session-expiry workflow.
//!
//! # States
//! - Active: requests carry the stored credential
//! - ExpiredPendingRedirect: a 401 was seen, the notice is visible and a
//!   redirect to the home route is scheduled
//!
//! # State Transitions
//! ```text
//! Active → ExpiredPendingRedirect: any fetch receives 401
//! ExpiredPendingRedirect: terminal (a fresh mount starts Active again)
//! ```
//!
//! # Design Decisions
//! - The transition is a compare-and-swap; only the winner schedules the
//!   redirect, so racing 401s navigate once
//! - Navigation is delegated to a `Navigator`

pub mod monitor;
pub mod navigator;
pub mod state;

pub use monitor::SessionMonitor;
pub use navigator::{Navigator, RecordingNavigator};
pub use state::{SessionNotice, SessionState};
