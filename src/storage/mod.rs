//! Persistent key/value storage.
//!
//! # Data Flow
//! ```text
//! page mount:
//!     → get("token")      credential for every fetch
//!     → get("darkMode")   theme
//!     → get("neonColor")  accent
//!
//! user toggles:
//!     → set("darkMode" | "neonColor")
//! ```
//!
//! # Design Decisions
//! - Single capability trait so tests swap in `MemoryStore`
//! - Synchronous API; values are small strings
//! - `FileStore` writes through on every `set` and replaces the file atomically

pub mod file;
pub mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key holding the bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Key holding the stringified dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";
/// Key holding the accent color name.
pub const NEON_COLOR_KEY: &str = "neonColor";

/// Errors raised by persistent stores.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not a JSON string map: {0}")]
    Format(#[from] serde_json::Error),
}

/// String key/value capability, modelled on browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
