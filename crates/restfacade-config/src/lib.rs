//! Typed configuration for restfacade.
//!
//! Configuration is layered (defaults → file → environment) and strict:
//! unknown fields are rejected.
//!
//! # Example
//!
//! ```no_run
//! use restfacade_config::ConfigLoader;
//!
//! # fn main() -> Result<(), restfacade_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_defaults()
//!     .with_optional_file("restfacade.toml")?
//!     .with_env_prefix("RESTFACADE")
//!     .load()?;
//!
//! restfacade_telemetry::init_logging(&config.logging.to_log_config())
//!     .expect("logging");
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [facade]
//! plus_as_space = false
//! header_case = "insensitive"
//!
//! [logging]
//! enabled = true
//! level = "info"
//! format = "json"
//! service_name = "gateway"
//! ```
//!
//! # Environment Variable Overrides
//!
//! - `RESTFACADE__FACADE__PLUS_AS_SPACE=true`
//! - `RESTFACADE__FACADE__HEADER_CASE=sensitive`
//! - `RESTFACADE__LOGGING__LEVEL=debug`
//! - `RESTFACADE__LOGGING__FORMAT=pretty`

#![warn(missing_docs)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::RestfacadeConfig;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{LogFormat, LoggingSection};
