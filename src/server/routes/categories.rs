use std::collections::BTreeMap;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories, questions},
        Category, Question,
    },
    pagination::paginate,
    server::app::AppState,
};

use super::{requested_page, ApiError, ApiResponse, PageParams};

/// Categories keyed by id, serialized as `{"1": "Science", ...}`.
pub(super) type CategoryMap = BTreeMap<i64, String>;

pub(super) fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.label)).collect()
}

#[derive(Serialize)]
struct CategoriesBody {
    success: bool,
    categories: CategoryMap,
}

#[derive(Serialize)]
struct CategoryQuestionsBody {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    current_category: String,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesBody> {
    let categories = categories::get_all_categories(&pool).await.map_err(|e| {
        tracing::warn!("Cannot load categories: {e}");
        ApiError::NotFound
    })?;
    Ok(Json(CategoriesBody {
        success: true,
        categories: category_map(categories),
    }))
}

async fn questions_for_category(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
    params: PageParams,
) -> ApiResponse<CategoryQuestionsBody> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;
    let page = requested_page(params)?;
    let category = categories::get_category(&pool, id)
        .await?
        .ok_or(ApiError::BadRequest)?;

    let selection = questions::get_questions_for_category(&pool, category.id).await?;
    // total across all categories, not just this one
    let total_questions = questions::count_questions(&pool).await?;

    Ok(Json(CategoryQuestionsBody {
        success: true,
        questions: paginate(&selection, page).to_vec(),
        total_questions,
        current_category: category.label,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
        .with_state(state)
}
