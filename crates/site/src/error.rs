//! Unified error handling with Sentry integration.
//!
//! Renderers return [`RenderError`]; route handlers return [`AppError`],
//! which captures server errors to Sentry before responding to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// A template failed to render.
///
/// Content is never validated, so this only fires for template engine
/// failures (for example a formatter error); malformed content renders
/// degraded output instead.
#[derive(Debug, Error)]
#[error("Failed to render {template}: {source}")]
pub struct RenderError {
    /// Name of the component or page being rendered.
    pub template: &'static str,
    #[source]
    pub source: askama::Error,
}

impl RenderError {
    /// Wrap an askama error with the name of the failing template.
    #[must_use]
    pub const fn new(template: &'static str, source: askama::Error) -> Self {
        Self { template, source }
    }
}

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Page rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// No route matched the request path.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Render(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Render(_) => "Internal server error".to_string(),
            Self::NotFound(_) => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("/resume".to_string());
        assert_eq!(err.to_string(), "Not found: /resume");
    }

    #[test]
    fn test_render_error_display_names_template() {
        let err = RenderError::new("project_card", askama::Error::Fmt);
        assert!(err.to_string().starts_with("Failed to render project_card"));
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::NotFound("x".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Render(RenderError::new("page", askama::Error::Fmt))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
