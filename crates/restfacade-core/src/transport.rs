//! [`RawRequest`] for the `http` crate's request types.
//!
//! `http` stores header names in lower case and does not accept raw
//! non-ASCII characters in a `Uri`, so a client that sends unencoded UTF-8
//! in the request target has to reach the facade through another transport
//! (see [`OwnedRequest`](crate::OwnedRequest)).
//!
//! Header values that are not valid UTF-8 are converted lossily.

use crate::raw::{HeaderEntries, RawRequest};
use http::request::Parts;
use http::{HeaderMap, Request, Uri};
use std::borrow::Cow;

fn uri_text(uri: &Uri) -> Cow<'_, str> {
    // Origin-form targets are already a single string inside `Uri`.
    if uri.scheme().is_none() && uri.authority().is_none() {
        if let Some(path_and_query) = uri.path_and_query() {
            return Cow::Borrowed(path_and_query.as_str());
        }
    }
    Cow::Owned(uri.to_string())
}

fn header_entries(headers: &HeaderMap) -> HeaderEntries<'_> {
    Box::new(headers.iter().map(|(name, value)| {
        (
            Cow::Borrowed(name.as_str()),
            String::from_utf8_lossy(value.as_bytes()),
        )
    }))
}

impl<B> RawRequest for Request<B> {
    fn raw_method(&self) -> &str {
        self.method().as_str()
    }

    fn raw_uri(&self) -> Cow<'_, str> {
        uri_text(self.uri())
    }

    fn raw_headers(&self) -> HeaderEntries<'_> {
        header_entries(self.headers())
    }
}

impl RawRequest for Parts {
    fn raw_method(&self) -> &str {
        self.method.as_str()
    }

    fn raw_uri(&self) -> Cow<'_, str> {
        uri_text(&self.uri)
    }

    fn raw_headers(&self) -> HeaderEntries<'_> {
        header_entries(&self.headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::HeaderValue;

    fn headers_of(raw: &impl RawRequest) -> Vec<(String, String)> {
        raw.raw_headers()
            .map(|(n, v)| (n.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_request_passthrough() {
        let request = Request::builder()
            .method("GET")
            .uri("/a/b?c=c&d=d")
            .header("h1", "a")
            .header("h1", "b")
            .header("h2", "c")
            .body(())
            .unwrap();

        assert_eq!(request.raw_method(), "GET");
        assert_eq!(request.raw_uri(), "/a/b?c=c&d=d");
        assert_eq!(
            headers_of(&request),
            vec![
                ("h1".to_string(), "a".to_string()),
                ("h1".to_string(), "b".to_string()),
                ("h2".to_string(), "c".to_string()),
            ]
        );
    }

    #[test]
    fn test_parts_passthrough() {
        let (parts, _body) = Request::builder()
            .method("PATCH")
            .uri("/items/7")
            .header("X-Request-Id", "abc")
            .body(())
            .unwrap()
            .into_parts();

        assert_eq!(parts.raw_method(), "PATCH");
        assert_eq!(parts.raw_uri(), "/items/7");
        assert_eq!(
            headers_of(&parts),
            vec![("x-request-id".to_string(), "abc".to_string())]
        );
    }

    #[test]
    fn test_absolute_form_uri() {
        let request = Request::builder()
            .uri("http://example.com/a?x=1")
            .body(())
            .unwrap();

        assert_eq!(request.raw_uri(), "http://example.com/a?x=1");
    }

    #[test]
    fn test_custom_method() {
        let request = Request::builder().method("PURGE").uri("/").body(()).unwrap();
        assert_eq!(request.raw_method(), "PURGE");
    }

    #[test]
    fn test_non_utf8_header_value_is_lossy() {
        let mut request = Request::builder().uri("/").body(()).unwrap();
        request.headers_mut().insert(
            "x-bytes",
            HeaderValue::from_bytes(b"caf\xe9").unwrap(),
        );

        assert_eq!(
            headers_of(&request),
            vec![("x-bytes".to_string(), "caf\u{fffd}".to_string())]
        );
    }
}
