//! One processor per parameter source.
//!
//! A processor knows how to look a name up in its part of the request. The
//! shared default/required handling lives in
//! [`ParameterProcessor::process`].

use crate::{BindingContext, BindingError, ParamBinding, ParamSource};

/// Resolves bindings for one [`ParamSource`].
pub trait ParameterProcessor: Send + Sync {
    /// The source this processor reads.
    fn source(&self) -> ParamSource;

    /// The JAX-RS annotation name that selects this processor.
    fn annotation_name(&self) -> &'static str {
        self.source().annotation_name()
    }

    /// Looks up every value for `name`. `None` when the request has none.
    fn lookup(&self, name: &str, ctx: &BindingContext<'_>) -> Option<Vec<String>>;

    /// Resolves a binding, applying its default and required flag.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::Missing`] when the value is absent, there is
    /// no default, and the binding is required.
    fn process(
        &self,
        binding: &ParamBinding,
        ctx: &BindingContext<'_>,
    ) -> Result<Option<Vec<String>>, BindingError> {
        if let Some(values) = self.lookup(binding.name(), ctx) {
            return Ok(Some(values));
        }

        if let Some(default) = binding.default_value() {
            return Ok(Some(vec![default.to_string()]));
        }

        if binding.is_required() {
            tracing::debug!(
                param.source = %self.source(),
                param.name = binding.name(),
                "required parameter missing"
            );
            return Err(BindingError::missing(self.source(), binding.name()));
        }

        Ok(None)
    }
}

/// Reads decoded query parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParamProcessor;

impl ParameterProcessor for QueryParamProcessor {
    fn source(&self) -> ParamSource {
        ParamSource::Query
    }

    fn lookup(&self, name: &str, ctx: &BindingContext<'_>) -> Option<Vec<String>> {
        ctx.facade().parameter_values(name).map(<[String]>::to_vec)
    }
}

/// Reads raw header values.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderParamProcessor;

impl ParameterProcessor for HeaderParamProcessor {
    fn source(&self) -> ParamSource {
        ParamSource::Header
    }

    fn lookup(&self, name: &str, ctx: &BindingContext<'_>) -> Option<Vec<String>> {
        let values = ctx.facade().headers(name);
        if values.is_empty() {
            None
        } else {
            Some(values.to_vec())
        }
    }
}

/// Reads segments captured by a path template.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParamProcessor;

impl ParameterProcessor for PathParamProcessor {
    fn source(&self) -> ParamSource {
        ParamSource::Path
    }

    fn lookup(&self, name: &str, ctx: &BindingContext<'_>) -> Option<Vec<String>> {
        ctx.path_params().get(name).map(|value| vec![value.to_string()])
    }
}

static QUERY_PROCESSOR: QueryParamProcessor = QueryParamProcessor;
static HEADER_PROCESSOR: HeaderParamProcessor = HeaderParamProcessor;
static PATH_PROCESSOR: PathParamProcessor = PathParamProcessor;

/// Returns the processor for `source`.
#[must_use]
pub fn processor_for(source: ParamSource) -> &'static dyn ParameterProcessor {
    match source {
        ParamSource::Query => &QUERY_PROCESSOR,
        ParamSource::Header => &HEADER_PROCESSOR,
        ParamSource::Path => &PATH_PROCESSOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathParams;
    use restfacade_core::{OwnedRequest, RequestFacade};

    fn facade() -> RequestFacade {
        RequestFacade::new(
            &OwnedRequest::get("/users/7?tag=a&tag=b")
                .header("X-Api-Key", "secret")
                .build(),
        )
    }

    #[test]
    fn test_processor_for_matches_source() {
        for source in ParamSource::ALL {
            let processor = processor_for(source);
            assert_eq!(processor.source(), source);
            assert_eq!(processor.annotation_name(), source.annotation_name());
        }
    }

    #[test]
    fn test_path_processor_annotation_name() {
        assert_eq!(PathParamProcessor.annotation_name(), "PathParam");
    }

    #[test]
    fn test_query_lookup() {
        let facade = facade();
        let ctx = BindingContext::new(&facade);

        assert_eq!(
            QueryParamProcessor.lookup("tag", &ctx),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(QueryParamProcessor.lookup("missing", &ctx), None);
    }

    #[test]
    fn test_header_lookup() {
        let facade = facade();
        let ctx = BindingContext::new(&facade);

        assert_eq!(
            HeaderParamProcessor.lookup("x-api-key", &ctx),
            Some(vec!["secret".to_string()])
        );
        assert_eq!(HeaderParamProcessor.lookup("x-missing", &ctx), None);
    }

    #[test]
    fn test_path_lookup() {
        let facade = facade();
        let mut params = PathParams::new();
        params.push("id", "7");
        let ctx = BindingContext::with_path_params(&facade, params);

        assert_eq!(
            PathParamProcessor.lookup("id", &ctx),
            Some(vec!["7".to_string()])
        );
        assert_eq!(PathParamProcessor.lookup("other", &ctx), None);
    }
}
