//! The per-request facade.

use crate::query::{parse_uri, ParsedQuery};
use crate::raw::RawRequest;
use crate::{FacadeOptions, HeaderView};
use indexmap::IndexMap;

/// Immutable, transport-agnostic view of one inbound request.
///
/// Everything is computed when the facade is built: the query string is
/// parsed and decoded, and the headers are gathered into a [`HeaderView`].
/// Accessors are plain reads afterwards, so a facade can be shared freely
/// once built.
///
/// # Example
///
/// ```rust
/// use restfacade_core::{OwnedRequest, RequestFacade};
///
/// let request = OwnedRequest::get("/a/b?c=c&d=d")
///     .header("h1", "a")
///     .header("h1", "b")
///     .header("h2", "c")
///     .build();
///
/// let facade = RequestFacade::new(&request);
///
/// assert_eq!(facade.method(), "GET");
/// assert_eq!(facade.path(), "/a/b");
/// assert_eq!(facade.parameter("d"), Some("d"));
/// assert_eq!(facade.parameter_values("e"), None);
/// assert_eq!(facade.header_names().collect::<Vec<_>>(), vec!["h1", "h2"]);
/// assert_eq!(facade.headers("h1"), ["a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFacade {
    method: String,
    uri: String,
    path_len: usize,
    has_query: bool,
    query: ParsedQuery,
    headers: HeaderView,
}

impl RequestFacade {
    /// Builds a facade with default [`FacadeOptions`].
    pub fn new<R: RawRequest + ?Sized>(raw: &R) -> Self {
        Self::with_options(raw, &FacadeOptions::default())
    }

    /// Builds a facade with explicit options.
    pub fn with_options<R: RawRequest + ?Sized>(raw: &R, options: &FacadeOptions) -> Self {
        let method = raw.raw_method().to_string();
        let uri = raw.raw_uri().into_owned();

        let (path, query) = parse_uri(&uri, options);
        let path_len = path.len();
        let has_query = path_len < uri.len();

        let headers = HeaderView::from_entries(raw.raw_headers(), options.header_case);

        tracing::debug!(
            http.method = %method,
            http.path = %path,
            parameters = query.len(),
            headers = headers.len(),
            "request facade built"
        );

        Self {
            method,
            uri,
            path_len,
            has_query,
            query,
            headers,
        }
    }

    /// The request method, verbatim.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The request URI, verbatim and undecoded, including the query.
    #[must_use]
    pub fn request_uri(&self) -> &str {
        &self.uri
    }

    /// The URI up to its first `?`, undecoded.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.uri[..self.path_len]
    }

    /// The raw query string after the first `?`, undecoded.
    ///
    /// `None` when the URI has no `?`; `Some("")` for a trailing `?`.
    #[must_use]
    pub fn query_string(&self) -> Option<&str> {
        if self.has_query {
            Some(&self.uri[self.path_len + 1..])
        } else {
            None
        }
    }

    /// The first decoded value of parameter `name`.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.query.get(name)
    }

    /// Every decoded value of parameter `name`, in order.
    ///
    /// `None` (not an empty slice) when the parameter never appeared.
    #[must_use]
    pub fn parameter_values(&self, name: &str) -> Option<&[String]> {
        self.query.get_all(name)
    }

    /// Distinct decoded parameter names in first-appearance order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.query.names()
    }

    /// A snapshot of all parameters.
    ///
    /// The returned map is owned by the caller; modifying it leaves the
    /// facade untouched.
    #[must_use]
    pub fn parameter_map(&self) -> IndexMap<String, Vec<String>> {
        self.query.to_map()
    }

    /// The first value of header `name`.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Every value of header `name`, in arrival order. Empty when unseen.
    #[must_use]
    pub fn headers(&self, name: &str) -> &[String] {
        self.headers.get_all(name)
    }

    /// Distinct header names in first-arrival order.
    pub fn header_names(&self) -> impl Iterator<Item = &str> {
        self.headers.names()
    }

    /// Returns true if header `name` was sent.
    #[must_use]
    pub fn contains_header(&self, name: &str) -> bool {
        self.headers.contains(name)
    }

    /// The first `Content-Type` value.
    ///
    /// Matched case-insensitively under every [`HeaderCase`](crate::HeaderCase)
    /// policy; with `Sensitive`, the first spelling seen wins.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        let content_type = http::header::CONTENT_TYPE.as_str();
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(content_type))
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }

    /// The parsed query parameters.
    #[must_use]
    pub fn parsed_query(&self) -> &ParsedQuery {
        &self.query
    }

    /// The header multimap.
    #[must_use]
    pub fn header_view(&self) -> &HeaderView {
        &self.headers
    }
}
