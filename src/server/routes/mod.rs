mod categories;
mod questions;
mod quizzes;

use axum::{
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pagination::{Page, PageError};
use crate::quiz::QuizError;

use super::deserializers::deserialize_lenient_i64;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request error")]
    BadRequest,
    #[error("Resource not found")]
    NotFound,
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error("Unprocessable entity")]
    Unprocessable,
    #[error("An error has occurred, please try again")]
    Internal(#[from] sqlx::Error),
}

pub type ApiResponse<T> = Result<Json<T>, ApiError>;

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::Quiz(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(error) = &self {
            tracing::error!("Store failure: {error}");
        }
        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<PageError> for ApiError {
    fn from(error: PageError) -> Self {
        tracing::debug!("Rejected page: {error}");
        ApiError::Unprocessable
    }
}

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    page: Option<i64>,
}

type PageParams = Result<Query<PageQuery>, QueryRejection>;

fn requested_page(params: PageParams) -> Result<Page, ApiError> {
    let Query(query) = params.map_err(|_| ApiError::Unprocessable)?;
    Ok(Page::from_query(query.page)?)
}

pub async fn fallback() -> ApiError {
    ApiError::NotFound
}
