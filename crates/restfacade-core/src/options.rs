//! Parsing options for the request facade.

use serde::{Deserialize, Serialize};

/// How header names are compared on lookup.
///
/// Whichever policy is chosen applies to every header accessor alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderCase {
    /// ASCII case-insensitive matching. Enumeration keeps the spelling of
    /// the first occurrence.
    #[default]
    Insensitive,
    /// Exact, byte-for-byte matching.
    Sensitive,
}

impl HeaderCase {
    /// Normalizes a header name into its lookup key.
    pub(crate) fn key(self, name: &str) -> String {
        match self {
            Self::Insensitive => name.to_ascii_lowercase(),
            Self::Sensitive => name.to_string(),
        }
    }
}

/// Options controlling how a [`RequestFacade`](crate::RequestFacade) is built.
///
/// # Example
///
/// ```rust
/// use restfacade_core::{FacadeOptions, HeaderCase};
///
/// let options = FacadeOptions::default();
/// assert!(!options.plus_as_space);
/// assert_eq!(options.header_case, HeaderCase::Insensitive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacadeOptions {
    /// Decode `+` in query names and values as a space.
    pub plus_as_space: bool,

    /// Header name matching policy.
    pub header_case: HeaderCase,
}

impl FacadeOptions {
    /// Options for form-style query strings, where `+` encodes a space.
    #[must_use]
    pub fn form_style() -> Self {
        Self {
            plus_as_space: true,
            ..Self::default()
        }
    }
}
