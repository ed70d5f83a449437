use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bond_recommender_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(CoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Core(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use bond_recommender_core::errors::{DatabaseError, ValidationError};

    #[test]
    fn test_status_mapping() {
        let not_found = ApiError::from(CoreError::NotFound("bond \"X\"".into()));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let missing_row = ApiError::from(CoreError::Database(DatabaseError::NotFound("row".into())));
        assert_eq!(missing_row.status(), StatusCode::NOT_FOUND);

        let invalid = ApiError::from(CoreError::Validation(ValidationError::InvalidDuration(
            "7y".into(),
        )));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        assert_eq!(
            ApiError::from(CoreError::Cancelled).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::BadRequest("q is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
