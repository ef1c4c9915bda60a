use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

pub type ApiResult<T> = Result<JsonApiResponse<T>, AppError>;

/// Success envelope: `{"success": true, "data": ...}`. `data` is omitted for
/// bare acknowledgements.
#[derive(Debug, Serialize)]
pub struct JsonApiResponse<T: Serialize> {
    #[serde(skip)]
    pub status: StatusCode,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> JsonApiResponse<T> {
    pub fn ok(data: T) -> ApiResult<T> {
        Self::with_status(StatusCode::OK, data)
    }

    pub fn created(data: T) -> ApiResult<T> {
        Self::with_status(StatusCode::CREATED, data)
    }

    pub fn with_status(status: StatusCode, data: T) -> ApiResult<T> {
        Ok(Self {
            status,
            success: true,
            data: Some(data),
        })
    }
}

impl JsonApiResponse<()> {
    pub fn success() -> ApiResult<()> {
        Ok(Self {
            status: StatusCode::OK,
            success: true,
            data: None,
        })
    }
}

impl<T: Serialize> IntoResponse for JsonApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Failure envelope: `{"success": false, "error": {"kind": ..., "message": ...}}`.
#[derive(Debug, Serialize)]
pub struct JsonErrorResponse {
    pub success: bool,
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
}

impl JsonErrorResponse {
    pub fn from_error(err: &AppError) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                kind: err.kind(),
                message: err.message().to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(JsonErrorResponse::from_error(&self))).into_response()
    }
}
