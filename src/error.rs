//! API error taxonomy and its HTTP mapping.
//!
//! Repos return `anyhow::Result`; handlers translate domain outcomes into
//! one of these variants at the boundary. Storage failures collapse into
//! `Internal` and surface as a generic 500 with details logged server-side.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("pick deadline has passed")]
    DeadlinePassed,

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DeadlinePassed => StatusCode::CONFLICT,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(e) = self {
            log::error!("internal error: {e:?}");
        }
        let message = match self {
            ApiError::Internal(_) => "internal error".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({
            "error": error_kind(self),
            "message": message,
        }))
    }
}

fn error_kind(e: &ApiError) -> &'static str {
    match e {
        ApiError::NotFound(_) => "not_found",
        ApiError::Validation(_) => "validation",
        ApiError::DeadlinePassed => "deadline_passed",
        ApiError::Forbidden(_) => "forbidden",
        ApiError::Internal(_) => "internal",
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
