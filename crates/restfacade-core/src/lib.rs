//! # Restfacade Core
//!
//! A read-only, transport-agnostic view of an inbound HTTP request.
//!
//! A transport supplies a [`RawRequest`] (method, URI, ordered headers) and
//! gets back a [`RequestFacade`] that framework code queries by name:
//!
//! | Component | Type | Description |
//! |-----------|------|-------------|
//! | Decoding policy | [`decode`] | Best-effort percent-decoding that never fails |
//! | Query parser | [`ParsedQuery`], [`parse_uri`] | Ordered, multi-valued, decoded parameters |
//! | Header accessor | [`HeaderView`] | Ordered, multi-valued, raw header values |
//! | Facade | [`RequestFacade`] | All of the above, built once per request |
//!
//! ## Example
//!
//! ```rust
//! use restfacade_core::{OwnedRequest, RequestFacade};
//!
//! let request = OwnedRequest::get("/hello/world?name=%E6%9D%8E%E5%BC%BA&age=18").build();
//! let facade = RequestFacade::new(&request);
//!
//! assert_eq!(facade.path(), "/hello/world");
//! assert_eq!(facade.parameter("name"), Some("李强"));
//! assert_eq!(facade.parameter("age"), Some("18"));
//! ```
//!
//! ## Decoding
//!
//! Parameter names and values go through [`decode`]; the path and header
//! values never do. Text without `%` is returned as-is, so clients that put
//! raw UTF-8 in the URI get the same result as clients that percent-encode:
//!
//! ```rust
//! use restfacade_core::{OwnedRequest, RequestFacade};
//!
//! let request = OwnedRequest::get("/hello/world?name=李强&age=18").build();
//! let facade = RequestFacade::new(&request);
//!
//! assert_eq!(facade.parameter("name"), Some("李强"));
//! ```
//!
//! By default `+` is literal; [`FacadeOptions::plus_as_space`] switches to
//! form-style decoding. Header names match case-insensitively unless
//! [`HeaderCase::Sensitive`] is selected.

#![doc(html_root_url = "https://docs.rs/restfacade-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod decode;
mod facade;
mod headers;
mod options;
mod query;
mod raw;
pub mod transport;

pub use decode::{decode, decode_with};
pub use facade::RequestFacade;
pub use headers::HeaderView;
pub use options::{FacadeOptions, HeaderCase};
pub use query::{parse_uri, split_uri, ParsedQuery};
pub use raw::{HeaderEntries, OwnedRequest, OwnedRequestBuilder, RawRequest};
