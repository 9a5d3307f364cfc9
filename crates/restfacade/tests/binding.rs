//! Parameter binding integration tests.
//!
//! These drive binding declarations the way a dispatcher would: build a
//! facade from a transport request, match the route template, then resolve
//! each declared argument.

use restfacade::binding::processor_for;
use restfacade::prelude::*;

struct Route {
    template: PathTemplate,
    params: Vec<ParamBinding>,
}

impl Route {
    fn new(template: &str, params: Vec<ParamBinding>) -> Self {
        Self {
            template: PathTemplate::parse(template),
            params,
        }
    }

    /// Resolves every declared argument, or `None` if the path does not match.
    fn dispatch(
        &self,
        facade: &RequestFacade,
    ) -> Option<Result<Vec<Option<Vec<String>>>, BindingError>> {
        let ctx = BindingContext::for_template(facade, &self.template)?;
        Some(self.params.iter().map(|p| p.resolve(&ctx)).collect())
    }
}

fn values(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| (*s).to_string()).collect())
}

#[test]
fn test_dispatch_from_http_request() {
    let request = http::Request::builder()
        .method("GET")
        .uri("/hello/%E6%9D%8E%E5%BC%BA?age=18&tag=a&tag=b")
        .header("Accept-Charset", "utf-8")
        .body(())
        .unwrap();
    let facade = RequestFacade::new(&request);

    let route = Route::new(
        "/hello/{name}",
        vec![
            ParamBinding::path("name"),
            ParamBinding::query("age"),
            ParamBinding::query("tag"),
            ParamBinding::header("Accept-Charset"),
            ParamBinding::query("page").with_default("1"),
            ParamBinding::query("sort"),
        ],
    );

    let resolved = route.dispatch(&facade).unwrap().unwrap();
    assert_eq!(
        resolved,
        vec![
            values(&["李强"]),
            values(&["18"]),
            values(&["a", "b"]),
            values(&["utf-8"]),
            values(&["1"]),
            None,
        ]
    );
}

#[test]
fn test_dispatch_path_mismatch() {
    let facade = RequestFacade::new(&OwnedRequest::get("/goodbye/world").build());
    let route = Route::new("/hello/{name}", vec![ParamBinding::path("name")]);

    assert!(route.dispatch(&facade).is_none());
}

#[test]
fn test_dispatch_missing_required() {
    let facade = RequestFacade::new(&OwnedRequest::get("/orders/9").build());
    let route = Route::new(
        "/orders/{id}",
        vec![
            ParamBinding::path("id"),
            ParamBinding::header("Authorization").required(),
        ],
    );

    let err = route.dispatch(&facade).unwrap().unwrap_err();
    assert_eq!(err.param_source(), ParamSource::Header);
    assert_eq!(err.name(), "Authorization");
    assert_eq!(err.status_code(), http::StatusCode::BAD_REQUEST);
    assert_eq!(err.error_code(), "MISSING_PARAMETER");
}

#[test]
fn test_annotation_driven_bindings() {
    let facade = RequestFacade::new(
        &OwnedRequest::get("/users/7?verbose=true")
            .header("X-Tenant", "acme")
            .build(),
    );
    let template = PathTemplate::parse("/users/{id}");
    let ctx = BindingContext::for_template(&facade, &template).unwrap();

    let declared = [
        ("javax.ws.rs.PathParam", "id"),
        ("QueryParam", "verbose"),
        ("jakarta.ws.rs.HeaderParam", "x-tenant"),
    ];

    let resolved: Vec<_> = declared
        .iter()
        .map(|(annotation, name)| {
            let binding = ParamBinding::from_annotation(annotation, *name).unwrap();
            assert_eq!(
                processor_for(binding.source()).annotation_name(),
                binding.source().annotation_name()
            );
            binding.resolve(&ctx).unwrap()
        })
        .collect();

    assert_eq!(
        resolved,
        vec![values(&["7"]), values(&["true"]), values(&["acme"])]
    );
    assert!(ParamBinding::from_annotation("FormParam", "x").is_none());
}

#[test]
fn test_typed_conversion() {
    let facade = RequestFacade::new(&OwnedRequest::get("/items?limit=25&ids=3&ids=5&bad=x").build());
    let ctx = BindingContext::new(&facade);

    let limit: Option<usize> = ParamBinding::query("limit").resolve_one(&ctx).unwrap();
    let ids: Vec<u64> = ParamBinding::query("ids").resolve_all(&ctx).unwrap();
    assert_eq!(limit, Some(25));
    assert_eq!(ids, vec![3, 5]);

    let err = ParamBinding::query("bad").resolve_one::<i32>(&ctx).unwrap_err();
    assert!(matches!(err, BindingError::InvalidValue { .. }));
    assert!(err.to_string().contains("bad"));
}

#[test]
fn test_config_drives_facade_options() {
    let config = ConfigLoader::new()
        .with_defaults()
        .with_string(
            r#"
            [facade]
            plus_as_space = true
            header_case = "sensitive"
            "#,
            "toml",
        )
        .unwrap()
        .load()
        .unwrap();

    let request = OwnedRequest::get("/search?q=rust+lang")
        .header("X-Key", "k")
        .build();
    let facade = RequestFacade::with_options(&request, &config.facade);
    let ctx = BindingContext::new(&facade);

    let q: Option<String> = ParamBinding::query("q").resolve_one(&ctx).unwrap();
    assert_eq!(q.as_deref(), Some("rust lang"));
    assert_eq!(ParamBinding::header("x-key").resolve(&ctx).unwrap(), None);
    assert_eq!(
        ParamBinding::header("X-Key").resolve(&ctx).unwrap(),
        values(&["k"])
    );
}
