//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod accommodations;
mod attendees;
mod auth;
mod bulletins;
mod datastore;
mod programme;
mod schedule;
mod till;
mod users;

pub use accommodations::*;
pub use attendees::*;
pub use auth::*;
pub use bulletins::*;
pub use datastore::*;
pub use programme::*;
pub use schedule::*;
pub use till::*;
pub use users::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
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
