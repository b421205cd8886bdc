//! Read-only view over the inbound request being protected.
//!
//! # Responsibilities
//! - Expose method, URI, headers and extensions of a framework request
//! - Resolve the peer address and TLS indicator from request extensions
//! - Read single header and cookie values
//!
//! # Design Decisions
//! - Header reads are case-insensitive and return "" when absent
//! - Non-UTF-8 bytes are replaced, not rejected
//! - The peer address is kept as a string so malformed values surface as
//!   an IP-extraction error in the builder

use std::borrow::Cow;
use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::header::COOKIE;
use axum::http::{request::Parts, uri::Scheme, Extensions, HeaderMap, Method, Request, Uri};
use axum_extra::extract::cookie::Cookie;

/// Raw peer address (`host:port`) attached by the host application.
///
/// Takes precedence over [`ConnectInfo`] when both are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAddr(pub String);

/// Marker extension: the connection was TLS-terminated by this server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TlsConnection;

/// Anything the fingerprint can be derived from.
pub trait InboundRequest {
    fn method(&self) -> &Method;
    fn uri(&self) -> &Uri;
    fn headers(&self) -> &HeaderMap;
    fn extensions(&self) -> &Extensions;

    /// First value of a header, or "" when absent.
    fn header(&self, name: &str) -> Cow<'_, str> {
        self.headers()
            .get(name)
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
            .unwrap_or(Cow::Borrowed(""))
    }

    /// `Host` header, falling back to the URI authority.
    fn host(&self) -> Cow<'_, str> {
        let host = self.header("host");
        if !host.is_empty() {
            return host;
        }
        self.uri()
            .authority()
            .map(|a| Cow::Borrowed(a.as_str()))
            .unwrap_or(Cow::Borrowed(""))
    }

    /// Peer address as `host:port`, if the server recorded one.
    fn remote_addr(&self) -> Option<String> {
        let extensions = self.extensions();
        if let Some(RemoteAddr(addr)) = extensions.get::<RemoteAddr>() {
            return Some(addr.clone());
        }
        extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.to_string())
    }

    fn is_tls(&self) -> bool {
        self.extensions().get::<TlsConnection>().is_some()
            || self.uri().scheme() == Some(&Scheme::HTTPS)
    }

    /// First cookie named `name`, surrounding double quotes removed.
    fn cookie(&self, name: &str) -> Option<String> {
        self.headers()
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| Cookie::split_parse(value))
            .filter_map(|cookie| cookie.ok())
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value_trimmed().to_string())
    }
}

impl<B> InboundRequest for Request<B> {
    fn method(&self) -> &Method {
        self.method()
    }

    fn uri(&self) -> &Uri {
        self.uri()
    }

    fn headers(&self) -> &HeaderMap {
        self.headers()
    }

    fn extensions(&self) -> &Extensions {
        self.extensions()
    }
}

impl InboundRequest for Parts {
    fn method(&self) -> &Method {
        &self.method
    }

    fn uri(&self) -> &Uri {
        &self.uri
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_header_is_case_insensitive() {
        let req = Request::builder()
            .header("User-Agent", "curl/8.0")
            .body(Body::empty())
            .unwrap();
        assert_eq!(InboundRequest::header(&req, "user-agent"), "curl/8.0");
        assert_eq!(InboundRequest::header(&req, "USER-AGENT"), "curl/8.0");
        assert_eq!(InboundRequest::header(&req, "referer"), "");
    }

    #[test]
    fn test_non_ascii_header_value() {
        let value = axum::http::HeaderValue::from_bytes("über cool mozilla".as_bytes()).unwrap();
        let req = Request::builder()
            .header("user-agent", value)
            .body(Body::empty())
            .unwrap();
        assert_eq!(InboundRequest::header(&req, "user-agent"), "über cool mozilla");
    }

    #[test]
    fn test_remote_addr_sources() {
        let mut req = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(req.remote_addr(), None);

        let peer: SocketAddr = "10.1.2.3:5555".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(peer));
        assert_eq!(req.remote_addr().as_deref(), Some("10.1.2.3:5555"));

        req.extensions_mut().insert(RemoteAddr("127.0.0.1:1234".into()));
        assert_eq!(req.remote_addr().as_deref(), Some("127.0.0.1:1234"));
    }

    #[test]
    fn test_tls_detection() {
        let plain = Request::builder().uri("/login").body(Body::empty()).unwrap();
        assert!(!plain.is_tls());

        let mut marked = Request::builder().uri("/login").body(Body::empty()).unwrap();
        marked.extensions_mut().insert(TlsConnection);
        assert!(marked.is_tls());

        let absolute = Request::builder()
            .uri("https://example.com/login")
            .body(Body::empty())
            .unwrap();
        assert!(absolute.is_tls());
    }

    #[test]
    fn test_cookie_lookup() {
        let req = Request::builder()
            .header("cookie", "theme=dark; datadome=some_value")
            .body(Body::empty())
            .unwrap();
        assert_eq!(req.cookie("datadome").as_deref(), Some("some_value"));
        assert_eq!(req.cookie("missing"), None);
    }

    #[test]
    fn test_cookie_quotes_stripped() {
        let req = Request::builder()
            .header("cookie", "datadome=\"abc\"")
            .body(Body::empty())
            .unwrap();
        assert_eq!(req.cookie("datadome").as_deref(), Some("abc"));
    }

    #[test]
    fn test_cookie_first_duplicate_wins() {
        let req = Request::builder()
            .header("cookie", "datadome=first; datadome=second")
            .header("cookie", "datadome=third")
            .body(Body::empty())
            .unwrap();
        assert_eq!(req.cookie("datadome").as_deref(), Some("first"));
    }

    #[test]
    fn test_host_falls_back_to_authority() {
        let req = Request::builder()
            .uri("http://api.example.com:8080/x")
            .body(Body::empty())
            .unwrap();
        assert_eq!(req.host(), "api.example.com:8080");
    }

    #[test]
    fn test_parts_view() {
        let (parts, _) = Request::builder()
            .method("POST")
            .header("host", "example.com")
            .body(Body::empty())
            .unwrap()
            .into_parts();
        assert_eq!(*InboundRequest::method(&parts), Method::POST);
        assert_eq!(parts.host(), "example.com");
    }
}
