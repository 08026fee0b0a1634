//! Security and caching headers for every response.
//!
//! The page ships no scripts, so the policy is locked down to same-origin
//! styles and inline SVG.

use axum::{
    extract::Request,
    http::{
        HeaderName, HeaderValue,
        header::{
            CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

/// Prefix of fingerprinted assets, safe to cache forever.
const FINGERPRINTED_PREFIX: &str = "/static/css/derived/";

const CSP: &str = "default-src 'none'; \
                   style-src 'self'; \
                   img-src 'self' data:; \
                   font-src 'self'; \
                   base-uri 'none'; \
                   form-action 'none'; \
                   frame-ancestors 'none'";

const PERMISSIONS_POLICY: &str =
    "camera=(), geolocation=(), interest-cohort=(), microphone=(), payment=(), usb=()";

/// Headers identical on every response.
fn fixed_headers() -> [(HeaderName, &'static str); 6] {
    [
        (X_FRAME_OPTIONS, "DENY"),
        (X_CONTENT_TYPE_OPTIONS, "nosniff"),
        // Outbound profile links carry the origin only
        (REFERRER_POLICY, "strict-origin-when-cross-origin"),
        (CONTENT_SECURITY_POLICY, CSP),
        (
            HeaderName::from_static("permissions-policy"),
            PERMISSIONS_POLICY,
        ),
        (
            HeaderName::from_static("cross-origin-opener-policy"),
            "same-origin",
        ),
    ]
}

/// `Cache-Control` for a request path.
fn cache_policy(path: &str) -> &'static str {
    if path.starts_with(FINGERPRINTED_PREFIX) {
        "public, max-age=31536000, immutable"
    } else {
        "no-cache"
    }
}

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY`
/// - `X-Content-Type-Options: nosniff`
/// - `Referrer-Policy: strict-origin-when-cross-origin`
/// - `Content-Security-Policy` - no scripts, same-origin styles
/// - `Permissions-Policy` - deny sensitive features
/// - `Cross-Origin-Opener-Policy: same-origin`
/// - `Cache-Control` - immutable for fingerprinted assets, revalidate otherwise
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let cache = cache_policy(request.uri().path());

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    for (name, value) in fixed_headers() {
        headers.insert(name, HeaderValue::from_static(value));
    }
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(cache));

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_policy() {
        assert_eq!(
            cache_policy("/static/css/derived/main.0123abcd.css"),
            "public, max-age=31536000, immutable"
        );
        assert_eq!(cache_policy("/static/css/main.css"), "no-cache");
        assert_eq!(cache_policy("/"), "no-cache");
    }

    #[test]
    fn test_csp_forbids_scripts() {
        assert!(CSP.starts_with("default-src 'none'"));
        assert!(!CSP.contains("script-src"));
    }
}
