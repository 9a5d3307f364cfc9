//! Where a bound parameter comes from.

use std::fmt;

const JAVAX_PREFIX: &str = "javax.ws.rs.";
const JAKARTA_PREFIX: &str = "jakarta.ws.rs.";

/// Part of the request a parameter is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamSource {
    /// Query string parameter (decoded).
    Query,
    /// Header value (raw).
    Header,
    /// Path template segment (decoded).
    Path,
}

impl ParamSource {
    /// All sources.
    pub const ALL: [Self; 3] = [Self::Query, Self::Header, Self::Path];

    /// The simple name of the JAX-RS annotation that declares this source.
    #[must_use]
    pub fn annotation_name(self) -> &'static str {
        match self {
            Self::Query => "QueryParam",
            Self::Header => "HeaderParam",
            Self::Path => "PathParam",
        }
    }

    /// Maps a JAX-RS annotation name to its source.
    ///
    /// Accepts the simple name or the name qualified with the `javax.ws.rs`
    /// or `jakarta.ws.rs` package.
    ///
    /// ```rust
    /// use restfacade_binding::ParamSource;
    ///
    /// assert_eq!(ParamSource::from_annotation("PathParam"), Some(ParamSource::Path));
    /// assert_eq!(
    ///     ParamSource::from_annotation("javax.ws.rs.QueryParam"),
    ///     Some(ParamSource::Query),
    /// );
    /// assert_eq!(ParamSource::from_annotation("FormParam"), None);
    /// ```
    #[must_use]
    pub fn from_annotation(name: &str) -> Option<Self> {
        let simple = name
            .strip_prefix(JAVAX_PREFIX)
            .or_else(|| name.strip_prefix(JAKARTA_PREFIX))
            .unwrap_or(name);

        Self::ALL
            .into_iter()
            .find(|source| source.annotation_name() == simple)
    }
}

impl fmt::Display for ParamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => write!(f, "query"),
            Self::Header => write!(f, "header"),
            Self::Path => write!(f, "path"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ParamSource::Query.to_string(), "query");
        assert_eq!(ParamSource::Header.to_string(), "header");
        assert_eq!(ParamSource::Path.to_string(), "path");
    }

    #[test]
    fn test_annotation_names_roundtrip() {
        for source in ParamSource::ALL {
            assert_eq!(
                ParamSource::from_annotation(source.annotation_name()),
                Some(source)
            );
        }
    }

    #[test]
    fn test_qualified_annotation_names() {
        assert_eq!(
            ParamSource::from_annotation("jakarta.ws.rs.HeaderParam"),
            Some(ParamSource::Header)
        );
        assert_eq!(
            ParamSource::from_annotation("javax.ws.rs.PathParam"),
            Some(ParamSource::Path)
        );
    }

    #[test]
    fn test_unknown_annotation() {
        assert_eq!(ParamSource::from_annotation("CookieParam"), None);
        assert_eq!(ParamSource::from_annotation("org.example.PathParam"), None);
        assert_eq!(ParamSource::from_annotation(""), None);
    }
}
