use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid payload: {}", .0.join("; "))]
    Validation(Vec<String>),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::Validation(errors) => AppError::ValidationFailed {
                message: "Invalid payload".to_string(),
                errors,
            },
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: AppError = ProductError::NotFound("42".to_string()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Product not found");
    }

    #[test]
    fn test_validation_keeps_every_message() {
        let err: AppError =
            ProductError::Validation(vec!["a".to_string(), "b".to_string()]).into();
        match err {
            AppError::ValidationFailed { message, errors } => {
                assert_eq!(message, "Invalid payload");
                assert_eq!(errors, vec!["a", "b"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
