//! The raw request abstraction a transport hands to the facade.
//!
//! [`RawRequest`] is the only thing the facade knows about the network layer:
//! a method, a request URI, and an ordered header list. Implementations for
//! the `http` crate's request types live in [`crate::transport`];
//! [`OwnedRequest`] covers everything else.

use std::borrow::Cow;

/// Iterator over `(name, value)` header pairs in arrival order.
pub type HeaderEntries<'a> = Box<dyn Iterator<Item = (Cow<'a, str>, Cow<'a, str>)> + 'a>;

/// Minimal view of a request as received by a transport.
pub trait RawRequest {
    /// The request method, verbatim (e.g. `GET`).
    fn raw_method(&self) -> &str;

    /// The request URI as received, including any query component.
    fn raw_uri(&self) -> Cow<'_, str>;

    /// Headers in arrival order. A header sent twice yields two entries.
    fn raw_headers(&self) -> HeaderEntries<'_>;
}

impl<R: RawRequest + ?Sized> RawRequest for &R {
    fn raw_method(&self) -> &str {
        (**self).raw_method()
    }

    fn raw_uri(&self) -> Cow<'_, str> {
        (**self).raw_uri()
    }

    fn raw_headers(&self) -> HeaderEntries<'_> {
        (**self).raw_headers()
    }
}

/// A plain, owned request.
///
/// Header names keep their original spelling.
///
/// # Example
///
/// ```rust
/// use restfacade_core::{OwnedRequest, RawRequest};
///
/// let request = OwnedRequest::builder()
///     .method("POST")
///     .uri("/hello/world?name=李强")
///     .header("Accept-Charset", "utf-8")
///     .build();
///
/// assert_eq!(request.raw_method(), "POST");
/// assert_eq!(request.raw_uri(), "/hello/world?name=李强");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedRequest {
    method: String,
    uri: String,
    headers: Vec<(String, String)>,
}

impl OwnedRequest {
    /// Creates a request from its parts.
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        uri: impl Into<String>,
        headers: Vec<(String, String)>,
    ) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            headers,
        }
    }

    /// Starts a builder with method `GET` and URI `/`.
    #[must_use]
    pub fn builder() -> OwnedRequestBuilder {
        OwnedRequestBuilder::new()
    }

    /// Starts a `GET` request builder for `uri`.
    #[must_use]
    pub fn get(uri: impl Into<String>) -> OwnedRequestBuilder {
        OwnedRequestBuilder::new().uri(uri)
    }

    /// The header list.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

impl RawRequest for OwnedRequest {
    fn raw_method(&self) -> &str {
        &self.method
    }

    fn raw_uri(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.uri)
    }

    fn raw_headers(&self) -> HeaderEntries<'_> {
        Box::new(
            self.headers
                .iter()
                .map(|(name, value)| (Cow::Borrowed(name.as_str()), Cow::Borrowed(value.as_str()))),
        )
    }
}

/// Builder for [`OwnedRequest`].
#[derive(Debug, Clone)]
#[must_use]
pub struct OwnedRequestBuilder {
    method: String,
    uri: String,
    headers: Vec<(String, String)>,
}

impl Default for OwnedRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OwnedRequestBuilder {
    /// Creates a builder with method `GET` and URI `/`.
    pub fn new() -> Self {
        Self {
            method: "GET".to_string(),
            uri: "/".to_string(),
            headers: Vec::new(),
        }
    }

    /// Sets the method.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets the request URI.
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Appends a header. Calling this twice with the same name adds a
    /// second entry rather than replacing the first.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Builds the request.
    pub fn build(self) -> OwnedRequest {
        OwnedRequest {
            method: self.method,
            uri: self.uri,
            headers: self.headers,
        }
    }
}
