//! # Restfacade Binding
//!
//! Resolves declared method-argument bindings against a
//! [`RequestFacade`](restfacade_core::RequestFacade).
//!
//! A binding names a parameter and where it comes from:
//!
//! - [`ParamSource::Query`] reads decoded query parameter values
//! - [`ParamSource::Header`] reads raw header values
//! - [`ParamSource::Path`] reads a segment captured by a [`PathTemplate`]
//!
//! Each source has a [`ParameterProcessor`]. Absent values fall back to the
//! binding's default, then to [`BindingError::Missing`] if the binding is
//! required.
//!
//! ## Example
//!
//! ```rust
//! use restfacade_binding::{BindingContext, ParamBinding, PathTemplate};
//! use restfacade_core::{OwnedRequest, RequestFacade};
//!
//! let request = OwnedRequest::get("/users/42?verbose=true")
//!     .header("X-Tenant", "acme")
//!     .build();
//! let facade = RequestFacade::new(&request);
//!
//! let template = PathTemplate::parse("/users/{id}");
//! let ctx = BindingContext::for_template(&facade, &template).unwrap();
//!
//! let id: Option<u64> = ParamBinding::path("id").resolve_one(&ctx).unwrap();
//! let verbose: Option<bool> = ParamBinding::query("verbose").resolve_one(&ctx).unwrap();
//! let tenant: Option<String> = ParamBinding::header("x-tenant").resolve_one(&ctx).unwrap();
//!
//! assert_eq!(id, Some(42));
//! assert_eq!(verbose, Some(true));
//! assert_eq!(tenant.as_deref(), Some("acme"));
//! ```

#![doc(html_root_url = "https://docs.rs/restfacade-binding/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod binding;
mod error;
mod processor;
mod source;
mod template;

pub use binding::{BindingContext, ParamBinding};
pub use error::BindingError;
pub use processor::{
    processor_for, HeaderParamProcessor, ParameterProcessor, PathParamProcessor,
    QueryParamProcessor,
};
pub use source::ParamSource;
pub use template::{PathParams, PathTemplate};
