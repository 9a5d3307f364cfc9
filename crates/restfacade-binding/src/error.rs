//! Binding error types.

use crate::ParamSource;
use http::StatusCode;
use thiserror::Error;

/// Error raised when a declared parameter cannot be bound.
///
/// # Example
///
/// ```rust
/// use restfacade_binding::{BindingError, ParamSource};
/// use http::StatusCode;
///
/// let err = BindingError::missing(ParamSource::Query, "page");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// assert_eq!(err.error_code(), "MISSING_PARAMETER");
/// assert!(err.to_string().contains("page"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// A required parameter is absent and has no default.
    #[error("missing required {param_source} parameter: {name}")]
    Missing {
        /// Where the parameter was looked up.
        param_source: ParamSource,
        /// Parameter name.
        name: String,
    },

    /// A value is present but does not convert to the requested type.
    #[error("invalid {param_source} parameter '{name}': {details}")]
    InvalidValue {
        /// Where the parameter was looked up.
        param_source: ParamSource,
        /// Parameter name.
        name: String,
        /// Conversion failure details.
        details: String,
    },
}

impl BindingError {
    /// Creates an error for a missing parameter.
    #[must_use]
    pub fn missing(source: ParamSource, name: impl Into<String>) -> Self {
        Self::Missing {
            param_source: source,
            name: name.into(),
        }
    }

    /// Creates an error for a value that failed conversion.
    #[must_use]
    pub fn invalid_value(
        source: ParamSource,
        name: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            param_source: source,
            name: name.into(),
            details: details.into(),
        }
    }

    /// Where the parameter was looked up.
    #[must_use]
    pub fn param_source(&self) -> ParamSource {
        match self {
            Self::Missing { param_source, .. } | Self::InvalidValue { param_source, .. } => {
                *param_source
            }
        }
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Missing { name, .. } | Self::InvalidValue { name, .. } => name,
        }
    }

    /// HTTP status for an error response.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Stable error code for error envelopes.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "MISSING_PARAMETER",
            Self::InvalidValue { .. } => "INVALID_PARAMETER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_error() {
        let err = BindingError::missing(ParamSource::Header, "x-api-key");

        assert_eq!(err.param_source(), ParamSource::Header);
        assert_eq!(err.name(), "x-api-key");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "MISSING_PARAMETER");
        assert_eq!(
            err.to_string(),
            "missing required header parameter: x-api-key"
        );
    }

    #[test]
    fn test_invalid_value_error() {
        let err = BindingError::invalid_value(
            ParamSource::Query,
            "age",
            "invalid digit found in string",
        );

        assert_eq!(err.param_source(), ParamSource::Query);
        assert_eq!(err.name(), "age");
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
        assert!(err.to_string().contains("'age'"));
        assert!(err.to_string().contains("invalid digit"));
    }
}
