//! Ordered, multi-valued header access.

use crate::HeaderCase;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderEntry {
    /// Spelling of the first occurrence.
    name: String,
    values: Vec<String>,
}

/// Read-only multimap over request headers.
///
/// Values are stored exactly as received; nothing is decoded. Names are
/// enumerated once each, in order of first insertion, and keep the spelling
/// of that first insertion.
///
/// # Example
///
/// ```rust
/// use restfacade_core::{HeaderCase, HeaderView};
///
/// let view = HeaderView::from_entries(
///     [("h1", "a"), ("h1", "b"), ("h2", "c")],
///     HeaderCase::Insensitive,
/// );
///
/// assert_eq!(view.names().collect::<Vec<_>>(), vec!["h1", "h2"]);
/// assert_eq!(view.get_all("h1"), ["a", "b"]);
/// assert_eq!(view.get("H2"), Some("c"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderView {
    case: HeaderCase,
    entries: IndexMap<String, HeaderEntry>,
}

impl HeaderView {
    /// Creates an empty view with the given matching policy.
    #[must_use]
    pub fn new(case: HeaderCase) -> Self {
        Self {
            case,
            entries: IndexMap::new(),
        }
    }

    /// Builds a view from `(name, value)` pairs in arrival order.
    ///
    /// Repeated names contribute additional values, never additional names.
    pub fn from_entries<I, N, V>(entries: I, case: HeaderCase) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<String>,
    {
        let mut view = Self::new(case);
        for (name, value) in entries {
            view.append(name.as_ref(), value.into());
        }
        view
    }

    fn append(&mut self, name: &str, value: String) {
        self.entries
            .entry(self.case.key(name))
            .or_insert_with(|| HeaderEntry {
                name: name.to_string(),
                values: Vec::new(),
            })
            .values
            .push(value);
    }

    /// Returns the first value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// Returns every value for `name` in arrival order.
    ///
    /// The slice is empty when the header was never seen.
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries
            .get(&self.case.key(name))
            .map(|entry| entry.values.as_slice())
            .unwrap_or(&[])
    }

    /// Returns true if `name` was seen at least once.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&self.case.key(name))
    }

    /// Iterates over distinct header names in first-insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|entry| entry.name.as_str())
    }

    /// Iterates over `(name, values)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .values()
            .map(|entry| (entry.name.as_str(), entry.values.as_slice()))
    }

    /// Number of distinct header names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The matching policy this view was built with.
    #[must_use]
    pub fn case(&self) -> HeaderCase {
        self.case
    }
}

impl Serialize for HeaderView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, values) in self.iter() {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}
