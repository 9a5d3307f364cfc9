//! Binding declarations and their resolution against a request.

use crate::{processor_for, BindingError, ParamSource, PathParams, PathTemplate};
use restfacade_core::RequestFacade;
use std::fmt::Display;
use std::str::FromStr;

/// What binding resolution reads from: a facade plus any path parameters
/// captured by the matched route template.
#[derive(Debug, Clone)]
pub struct BindingContext<'a> {
    facade: &'a RequestFacade,
    path_params: PathParams,
}

impl<'a> BindingContext<'a> {
    /// Creates a context without path parameters.
    #[must_use]
    pub fn new(facade: &'a RequestFacade) -> Self {
        Self::with_path_params(facade, PathParams::new())
    }

    /// Creates a context with already-extracted path parameters.
    #[must_use]
    pub fn with_path_params(facade: &'a RequestFacade, path_params: PathParams) -> Self {
        Self {
            facade,
            path_params,
        }
    }

    /// Creates a context by matching the facade's path against `template`.
    ///
    /// Returns `None` if the path does not fit the template.
    #[must_use]
    pub fn for_template(facade: &'a RequestFacade, template: &PathTemplate) -> Option<Self> {
        template
            .match_path(facade.path())
            .map(|params| Self::with_path_params(facade, params))
    }

    /// The request facade.
    #[must_use]
    pub fn facade(&self) -> &'a RequestFacade {
        self.facade
    }

    /// The path parameters.
    #[must_use]
    pub fn path_params(&self) -> &PathParams {
        &self.path_params
    }
}

/// A declared method-argument binding: "read parameter `name` from `source`".
///
/// # Example
///
/// ```rust
/// use restfacade_binding::{BindingContext, ParamBinding};
/// use restfacade_core::{OwnedRequest, RequestFacade};
///
/// let request = OwnedRequest::get("/hello/world?name=%E6%9D%8E%E5%BC%BA&age=18").build();
/// let facade = RequestFacade::new(&request);
/// let ctx = BindingContext::new(&facade);
///
/// let name: Option<String> = ParamBinding::query("name").resolve_one(&ctx).unwrap();
/// let age: Option<u32> = ParamBinding::query("age").resolve_one(&ctx).unwrap();
/// let page: Option<u32> = ParamBinding::query("page")
///     .with_default("1")
///     .resolve_one(&ctx)
///     .unwrap();
///
/// assert_eq!(name.as_deref(), Some("李强"));
/// assert_eq!(age, Some(18));
/// assert_eq!(page, Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamBinding {
    source: ParamSource,
    name: String,
    default_value: Option<String>,
    required: bool,
}

impl ParamBinding {
    /// Creates an optional binding without a default.
    #[must_use]
    pub fn new(source: ParamSource, name: impl Into<String>) -> Self {
        Self {
            source,
            name: name.into(),
            default_value: None,
            required: false,
        }
    }

    /// Binds a query parameter.
    #[must_use]
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(ParamSource::Query, name)
    }

    /// Binds a header.
    #[must_use]
    pub fn header(name: impl Into<String>) -> Self {
        Self::new(ParamSource::Header, name)
    }

    /// Binds a path template parameter.
    #[must_use]
    pub fn path(name: impl Into<String>) -> Self {
        Self::new(ParamSource::Path, name)
    }

    /// Builds a binding from a JAX-RS annotation name and a parameter name.
    ///
    /// Returns `None` for annotations other than `QueryParam`,
    /// `HeaderParam` and `PathParam`.
    #[must_use]
    pub fn from_annotation(annotation: &str, name: impl Into<String>) -> Option<Self> {
        ParamSource::from_annotation(annotation).map(|source| Self::new(source, name))
    }

    /// Sets the value used when the parameter is absent.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Marks the binding as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The parameter source.
    #[must_use]
    pub fn source(&self) -> ParamSource {
        self.source
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default value, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Whether absence is an error.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Resolves every value for this binding.
    ///
    /// An absent parameter falls back to the default; without one it is
    /// `Ok(None)`, or [`BindingError::Missing`] if the binding is required.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::Missing`] as described above.
    pub fn resolve(&self, ctx: &BindingContext<'_>) -> Result<Option<Vec<String>>, BindingError> {
        processor_for(self.source).process(self, ctx)
    }

    /// Resolves the first value and converts it with [`FromStr`].
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::Missing`] for an absent required value and
    /// [`BindingError::InvalidValue`] when conversion fails.
    pub fn resolve_one<T>(&self, ctx: &BindingContext<'_>) -> Result<Option<T>, BindingError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.resolve(ctx)?
            .and_then(|values| values.into_iter().next())
            .map(|value| self.convert(&value))
            .transpose()
    }

    /// Resolves and converts every value.
    ///
    /// An absent optional parameter yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::Missing`] for an absent required value and
    /// [`BindingError::InvalidValue`] for the first value that fails to
    /// convert.
    pub fn resolve_all<T>(&self, ctx: &BindingContext<'_>) -> Result<Vec<T>, BindingError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.resolve(ctx)?
            .unwrap_or_default()
            .iter()
            .map(|value| self.convert(value))
            .collect()
    }

    fn convert<T>(&self, value: &str) -> Result<T, BindingError>
    where
        T: FromStr,
        T::Err: Display,
    {
        value.parse().map_err(|e: T::Err| {
            tracing::debug!(
                param.source = %self.source,
                param.name = %self.name,
                "parameter conversion failed"
            );
            BindingError::invalid_value(self.source, &self.name, e.to_string())
        })
    }
}
