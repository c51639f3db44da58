use super::config::ApiKeyConfig;
use crate::errors::{AppError, ErrorCode};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Shared-secret checker used as middleware state.
#[derive(Clone, Debug)]
pub struct ApiKeyAuth {
    header: HeaderName,
    expected: Arc<str>,
}

impl ApiKeyAuth {
    pub fn new(config: &ApiKeyConfig) -> Self {
        Self {
            header: config.header.clone(),
            expected: Arc::from(config.key.as_str()),
        }
    }

    pub fn header(&self) -> &HeaderName {
        &self.header
    }

    /// True when the configured header carries exactly the expected key.
    pub fn matches(&self, headers: &HeaderMap) -> bool {
        headers
            .get(&self.header)
            .map(|value| {
                bool::from(value.as_bytes().ct_eq(self.expected.as_bytes()))
            })
            .unwrap_or(false)
    }
}

impl From<&ApiKeyConfig> for ApiKeyAuth {
    fn from(config: &ApiKeyConfig) -> Self {
        Self::new(config)
    }
}

/// API key middleware
///
/// Rejects the request with 401 before the handler (and its body extractor)
/// runs when the key header is missing or wrong.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::{ApiKeyAuth, ApiKeyConfig, require_api_key};
///
/// let auth = ApiKeyAuth::new(&ApiKeyConfig::new("secret"));
///
/// let routes = Router::new().route(
///     "/items",
///     post(create_item).route_layer(axum::middleware::from_fn_with_state(
///         auth,
///         require_api_key,
///     )),
/// );
/// ```
pub async fn require_api_key(
    State(auth): State<ApiKeyAuth>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !auth.matches(request.headers()) {
        tracing::debug!(
            header = %auth.header(),
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected request without a valid API key"
        );
        return Err(AppError::Unauthorized(
            ErrorCode::Unauthorized.default_message().to_string(),
        ));
    }

    Ok(next.run(request).await)
}
