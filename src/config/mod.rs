//! Page configuration.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → PageConfig (validated, immutable)
//!     → handed to fetcher, session monitor and storage at mount
//! ```
//!
//! # Design Decisions
//! - Every section has defaults so an absent file still yields a working page
//! - Validation reports all problems, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::EndpointConfig;
pub use schema::ObservabilityConfig;
pub use schema::PageConfig;
pub use schema::SessionConfig;
pub use schema::StorageConfig;
pub use schema::TimeoutConfig;
