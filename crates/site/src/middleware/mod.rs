//! HTTP middleware stack for the site.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request tracing)
//! 3. Security headers (CSP, frame denial, caching)

pub mod security_headers;

pub use security_headers::security_headers_middleware;
