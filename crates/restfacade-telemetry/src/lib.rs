//! Structured logging for restfacade.
//!
//! The library crates only emit `tracing` events. Applications that want to
//! see them install a subscriber once at startup:
//!
//! ```rust,ignore
//! use restfacade_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::development())?;
//! ```
//!
//! Facade construction is logged at `debug`, decoding fallbacks at `trace`.
//!
//! # Field names
//!
//! Events across the workspace use these structured fields:
//!
//! | Field | Emitted by | Meaning |
//! |-------|------------|---------|
//! | `http.method` | facade construction | Request method, verbatim |
//! | `http.path` | facade construction | Undecoded request path |
//! | `param.source` | parameter binding | `query`, `header` or `path` |
//! | `param.name` | parameter binding | Declared parameter name |
//! | `service.name` | [`init_logging`] | [`LogConfig::service_name`] |

#![warn(missing_docs)]

pub mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
