//! Mapping of [`CarError`] onto HTTP responses.

use crate::car_actor::{CarError, ValidationError};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

pub const NOT_FOUND_MESSAGE: &str = "The car id wasn't found inside the database";

/// Error returned by every handler. Renders as `{"message": ..., "field"?: ...}`.
#[derive(Debug)]
pub struct ApiError(pub CarError);

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            CarError::NotFound(_) => StatusCode::NOT_FOUND,
            CarError::Validation(_) | CarError::InvalidSortField(_) | CarError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            CarError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CarError> for ApiError {
    fn from(err: CarError) -> Self {
        Self(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(CarError::InvalidQuery(format!(
            "car id must be a positive integer: {}",
            rejection.body_text()
        )))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(CarError::InvalidQuery(rejection.body_text()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(CarError::Validation(ValidationError::new(
            "body",
            rejection.body_text(),
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self.0 {
            CarError::NotFound(_) => ErrorBody {
                message: NOT_FOUND_MESSAGE.to_string(),
                field: None,
            },
            CarError::Validation(v) => ErrorBody {
                message: v.message.clone(),
                field: Some(v.field),
            },
            CarError::Store(detail) => {
                error!(%detail, "Car store failure");
                ErrorBody {
                    message: detail.clone(),
                    field: None,
                }
            }
            other => ErrorBody {
                message: other.to_string(),
                field: None,
            },
        };
        (status, Json(body)).into_response()
    }
}
