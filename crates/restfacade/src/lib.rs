//! # Restfacade
//!
//! **A read-only, transport-agnostic view of inbound HTTP requests**
//!
//! Restfacade turns whatever a network transport hands over (a method, a
//! request URI and an ordered header list) into a [`RequestFacade`] that
//! framework code queries by name:
//!
//! - **Query parameters** are split, ordered by first appearance and decoded
//!   with a best-effort policy that accepts both percent-encoded and raw
//!   UTF-8 text.
//! - **Headers** keep every value in arrival order and match names
//!   case-insensitively.
//! - **Parameter binding** resolves `QueryParam`, `HeaderParam` and
//!   `PathParam` style declarations, with defaults and typed conversion.
//!
//! ## Quick Start
//!
//! ```rust
//! use restfacade::prelude::*;
//!
//! let request = http::Request::builder()
//!     .uri("/hello/world?name=%E6%9D%8E%E5%BC%BA&age=18")
//!     .header("Accept-Charset", "utf-8")
//!     .body(())
//!     .unwrap();
//!
//! let facade = RequestFacade::new(&request);
//! assert_eq!(facade.path(), "/hello/world");
//! assert_eq!(facade.parameter("name"), Some("李强"));
//! assert_eq!(facade.header("accept-charset"), Some("utf-8"));
//!
//! let ctx = BindingContext::new(&facade);
//! let age: Option<u32> = ParamBinding::query("age").resolve_one(&ctx).unwrap();
//! assert_eq!(age, Some(18));
//! ```
//!
//! ## Crates
//!
//! | Crate | Re-exported as |
//! |-------|----------------|
//! | `restfacade-core` | [`core`] |
//! | `restfacade-binding` | [`binding`] |
//! | `restfacade-config` | [`config`] |
//! | `restfacade-telemetry` | [`telemetry`] |

#![doc(html_root_url = "https://docs.rs/restfacade/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use restfacade_core as core;

// Re-export binding types
pub use restfacade_binding as binding;

// Re-export configuration
pub use restfacade_config as config;

// Re-export telemetry
pub use restfacade_telemetry as telemetry;

pub use restfacade_core::{FacadeOptions, RawRequest, RequestFacade};

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use restfacade::prelude::*;
///
/// let request = OwnedRequest::get("/a/b?c=c").build();
/// assert_eq!(RequestFacade::new(&request).parameter("c"), Some("c"));
/// ```
pub mod prelude {
    pub use restfacade_core::{
        decode, FacadeOptions, HeaderCase, HeaderView, OwnedRequest, ParsedQuery, RawRequest,
        RequestFacade,
    };

    pub use restfacade_binding::{
        BindingContext, BindingError, ParamBinding, ParamSource, ParameterProcessor, PathParams,
        PathTemplate,
    };

    pub use restfacade_config::{ConfigError, ConfigLoader, RestfacadeConfig};

    pub use restfacade_telemetry::{init_logging, LogConfig};
}
