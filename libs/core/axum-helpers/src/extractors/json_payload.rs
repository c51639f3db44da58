//! JSON extractor whose rejection is an [`AppError`].

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request, rejection::JsonRejection};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// JSON body extractor that reports malformed bodies in the standard error format.
///
/// Rule checks are left to the domain layer, so the usual payload type is
/// `serde_json::Value`.
///
/// A request without a JSON `Content-Type` is read as an empty object, so the
/// domain validator reports every missing field. Every other rejection is a 400.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonPayload;
///
/// async fn create(JsonPayload(body): JsonPayload<serde_json::Value>) -> String {
///     body.to_string()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonPayload<T>(pub T);

impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonPayload(value)),
            Err(JsonRejection::MissingJsonContentType(rejection)) => {
                tracing::debug!("No JSON content type, reading body as an empty object");
                serde_json::from_value(Value::Object(Map::new()))
                    .map(JsonPayload)
                    .map_err(|_| JsonRejection::MissingJsonContentType(rejection).into())
            }
            Err(rejection) => Err(rejection.into()),
        }
    }
}
