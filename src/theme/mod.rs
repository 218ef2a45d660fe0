//! Theme preference: dark mode and accent ("neon") color.
//!
//! # Data Flow
//! ```text
//! mount:
//!     storage → preference.rs (ThemePreference::load)
//!             → style.rs (apply: `dark` class + --neon-* variables)
//!
//! toggle / accent change:
//!     ThemePreference mutated → save to storage → apply
//! ```
//!
//! # Design Decisions
//! - Accent colors form a closed enum; unknown stored names fall back to blue
//! - `hex_to_rgb` never fails loudly, malformed input yields `None`
//! - The document root is reached only through the `StyleSink` trait

pub mod accent;
pub mod preference;
pub mod style;

pub use accent::{hex_to_rgb, AccentColor};
pub use preference::ThemePreference;
pub use style::{apply_theme, StyleSheet, StyleSink};
