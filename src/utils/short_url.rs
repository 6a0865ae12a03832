//! Public short URL reconstruction.

use axum::http::{HeaderMap, header};

/// Header set by reverse proxies to report the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Fallback host when a request carries no usable `Host` header.
const DEFAULT_HOST: &str = "localhost";

/// Determines the base (`scheme://host[:port]`) short URLs are built on.
///
/// A configured base always wins. Otherwise the base is derived from the
/// request: scheme from `X-Forwarded-Proto` (default `http`), authority from
/// `Host`.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:3000".parse().unwrap());
///
/// assert_eq!(resolve_base_url(None, &headers), "http://sho.rt:3000");
/// assert_eq!(resolve_base_url(Some("https://s.io"), &headers), "https://s.io");
/// ```
pub fn resolve_base_url(configured: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(base) = configured {
        return base.trim_end_matches('/').to_string();
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| v.eq_ignore_ascii_case("http") || v.eq_ignore_ascii_case("https"))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "http".to_string());

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_HOST);

    format!("{}://{}", scheme, host)
}

/// Joins a base URL and a short code.
pub fn build_short_url(base_url: &str, code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_host(host: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_str(host).unwrap());
        headers
    }

    #[test]
    fn test_configured_base_wins() {
        let headers = headers_with_host("ignored.com");
        assert_eq!(
            resolve_base_url(Some("https://s.example.com/"), &headers),
            "https://s.example.com"
        );
    }

    #[test]
    fn test_base_from_host_header() {
        let headers = headers_with_host("localhost:3000");
        assert_eq!(resolve_base_url(None, &headers), "http://localhost:3000");
    }

    #[test]
    fn test_base_honours_forwarded_proto() {
        let mut headers = headers_with_host("sho.rt");
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("https, http"));
        assert_eq!(resolve_base_url(None, &headers), "https://sho.rt");
    }

    #[test]
    fn test_base_ignores_unknown_forwarded_proto() {
        let mut headers = headers_with_host("sho.rt");
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("gopher"));
        assert_eq!(resolve_base_url(None, &headers), "http://sho.rt");
    }

    #[test]
    fn test_base_without_host_header() {
        assert_eq!(resolve_base_url(None, &HeaderMap::new()), "http://localhost");
    }

    #[test]
    fn test_build_short_url() {
        assert_eq!(
            build_short_url("http://localhost:3000", "abc12345"),
            "http://localhost:3000/abc12345"
        );
        assert_eq!(
            build_short_url("https://s.io/", "abc12345"),
            "https://s.io/abc12345"
        );
    }
}
