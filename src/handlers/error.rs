// src/handlers/error.rs
use std::fmt;
use serde::Serialize;
use warp::http::StatusCode;
use warp::reject::Reject;
use warp::reply::{Json, WithStatus};

use crate::services::validation::ValidationErrors;

/// JSON error body returned by the rejection handler.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    #[serde(rename = "error")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<ValidationErrors>,
    #[serde(skip)]
    pub status: StatusCode,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
            fields: None,
            status,
        }
    }

    pub fn not_found() -> Self {
        ApiError::new(StatusCode::NOT_FOUND, "Not Found")
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn validation(errors: &ValidationErrors) -> Self {
        ApiError {
            message: "Invalid input".to_string(),
            fields: Some(errors.clone()),
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// The inputs validated but the figures overflowed f64.
    pub fn out_of_range() -> Self {
        ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "El resultado es demasiado grande para calcularse",
        )
    }

    pub fn internal() -> Self {
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }

    pub fn into_reply(self) -> WithStatus<Json> {
        let status = self.status;
        warp::reply::with_status(warp::reply::json(&self), status)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}

impl std::error::Error for ApiError {}
impl Reject for ApiError {}
