//! REST API module.
//!
//! Contains all API routes and handlers consumed by the site front end.

mod budget;
mod chat;
mod members;
mod projects;

pub use budget::*;
pub use chat::*;
pub use members::*;
pub use projects::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::content::derive_identifier;

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// A record paired with the identifier used to address it in URLs.
#[derive(Debug, Clone, Serialize)]
pub struct Identified<T: Serialize> {
    pub identifier: String,
    #[serde(flatten)]
    pub record: T,
}

impl<T: Serialize> Identified<T> {
    pub fn new(name: &str, record: T) -> Self {
        Self {
            identifier: derive_identifier(name),
            record,
        }
    }
}
