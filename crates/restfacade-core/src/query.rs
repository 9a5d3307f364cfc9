//! Query string parsing.
//!
//! [`parse_uri`] splits a raw request URI into its path and a [`ParsedQuery`]:
//! an ordered, multi-valued map of decoded parameter names to decoded values.

use crate::decode::decode_with;
use crate::FacadeOptions;
use indexmap::IndexMap;
use serde::Serialize;

/// Decoded query parameters.
///
/// Names are kept in order of first appearance; each name's values are kept
/// in order of appearance. A name is never stored twice.
///
/// # Example
///
/// ```rust
/// use restfacade_core::{FacadeOptions, ParsedQuery};
///
/// let query = ParsedQuery::parse("k=a&j=1&k=b", &FacadeOptions::default());
///
/// assert_eq!(query.names().collect::<Vec<_>>(), vec!["k", "j"]);
/// assert_eq!(query.get("k"), Some("a"));
/// assert_eq!(query.get_all("k"), Some(&["a".to_string(), "b".to_string()][..]));
/// assert_eq!(query.get_all("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParsedQuery {
    params: IndexMap<String, Vec<String>>,
}

impl ParsedQuery {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string (the text after `?`, without the `?`).
    ///
    /// Tokens are separated by `&`; empty tokens are skipped. Each token is
    /// split on its first `=`, and a token without `=` has an empty value.
    #[must_use]
    pub fn parse(query: &str, options: &FacadeOptions) -> Self {
        let mut parsed = Self::new();

        for token in query.split('&').filter(|t| !t.is_empty()) {
            let (raw_key, raw_value) = token.split_once('=').unwrap_or((token, ""));
            let key = decode_with(raw_key, options.plus_as_space).into_owned();
            let value = decode_with(raw_value, options.plus_as_space).into_owned();
            parsed.append(key, value);
        }

        parsed
    }

    /// Appends a value, creating the name at the end if it is new.
    pub(crate) fn append(&mut self, name: String, value: String) {
        self.params.entry(name).or_default().push(value);
    }

    /// Returns the first value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value for `name`, or `None` if it never appeared.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        self.params.get(name).map(Vec::as_slice)
    }

    /// Returns true if `name` appeared at least once.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Iterates over distinct names in first-appearance order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Iterates over `(name, values)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.params
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns an owned copy of the whole map.
    ///
    /// Changes to the copy do not affect this query.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<String, Vec<String>> {
        self.params.clone()
    }
}

/// Splits a raw URI at its first `?`.
///
/// Returns the path and, if a `?` is present, the raw query string.
///
/// ```rust
/// use restfacade_core::split_uri;
///
/// assert_eq!(split_uri("/a/b?c=d"), ("/a/b", Some("c=d")));
/// assert_eq!(split_uri("/a/b"), ("/a/b", None));
/// assert_eq!(split_uri("/a/b?"), ("/a/b", Some("")));
/// ```
#[must_use]
pub fn split_uri(uri: &str) -> (&str, Option<&str>) {
    match uri.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (uri, None),
    }
}

/// Splits a raw URI into its undecoded path and its decoded parameters.
///
/// A URI without a query component yields an empty [`ParsedQuery`].
#[must_use]
pub fn parse_uri<'a>(uri: &'a str, options: &FacadeOptions) -> (&'a str, ParsedQuery) {
    let (path, query) = split_uri(uri);
    let parsed = query
        .map(|q| ParsedQuery::parse(q, options))
        .unwrap_or_default();
    (path, parsed)
}
