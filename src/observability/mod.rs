//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! fetch / session / page produce:
//!     → tracing events (structured fields, request id per fetch)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr)
//!     → whatever metrics recorder the embedder installs
//! ```
//!
//! # Design Decisions
//! - RUST_LOG wins over the configured level
//! - Metrics are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
