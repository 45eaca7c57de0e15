use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories, questions},
        Question,
    },
    pagination::paginate,
    server::app::AppState,
    telemetry::{QUESTIONS_CREATED, QUESTIONS_DELETED},
};

use super::categories::{category_map, CategoryMap};
use super::{requested_page, ApiError, ApiResponse, PageParams};

#[derive(Deserialize)]
struct NewQuestion {
    question: String,
    answer: String,
    // the add form posts its select values as strings
    #[serde(deserialize_with = "deserialize_number_from_string")]
    category: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    difficulty: i64,
}

#[derive(Deserialize)]
struct SearchRequest {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    categories: CategoryMap,
}

#[derive(Serialize)]
struct CreatedBody {
    success: bool,
    created: i64,
    questions: Vec<Question>,
    total_questions: i64,
}

#[derive(Serialize)]
struct DeletedBody {
    success: bool,
    deleted: i64,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    params: PageParams,
) -> ApiResponse<QuestionsPage> {
    let page = requested_page(params)?;
    let selection = questions::get_all_questions(&pool).await?;
    let current = paginate(&selection, page);
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = categories::get_all_categories(&pool).await?;

    Ok(Json(QuestionsPage {
        success: true,
        questions: current.to_vec(),
        total_questions: selection.len() as i64,
        categories: category_map(categories),
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    params: PageParams,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> ApiResponse<CreatedBody> {
    let page = requested_page(params)?;
    let Json(new_question) = payload.map_err(|e| {
        tracing::debug!("Rejected question payload: {e}");
        ApiError::Unprocessable
    })?;
    if new_question.question.trim().is_empty() || new_question.answer.trim().is_empty() {
        return Err(ApiError::Unprocessable);
    }

    let id = questions::create_question(
        &pool,
        &new_question.question,
        &new_question.answer,
        new_question.category,
        new_question.difficulty,
    )
    .await
    .map_err(|e| {
        tracing::warn!("Cannot create question: {e}");
        ApiError::Unprocessable
    })?;
    QUESTIONS_CREATED.inc();
    tracing::info!("Created question {id} in category {}", new_question.category);

    let selection = questions::get_all_questions(&pool).await.map_err(|e| {
        tracing::warn!("Cannot reload questions after create: {e}");
        ApiError::Unprocessable
    })?;
    Ok(Json(CreatedBody {
        success: true,
        created: id,
        questions: paginate(&selection, page).to_vec(),
        total_questions: selection.len() as i64,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResponse<DeletedBody> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;
    let unprocessable = |e: sqlx::Error| {
        tracing::warn!("Cannot delete question {id}: {e}");
        ApiError::Unprocessable
    };

    questions::get_question_by_id(&pool, id)
        .await
        .map_err(unprocessable)?
        .ok_or(ApiError::NotFound)?;
    if !questions::delete_question(&pool, id)
        .await
        .map_err(unprocessable)?
    {
        return Err(ApiError::NotFound);
    }
    QUESTIONS_DELETED.inc();
    tracing::info!("Deleted question {id}");

    Ok(Json(DeletedBody {
        success: true,
        deleted: id,
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    params: PageParams,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResponse<SearchResults> {
    let page = requested_page(params)?;
    let Json(SearchRequest { search_term }) = payload.map_err(|e| {
        tracing::debug!("Rejected search payload: {e}");
        ApiError::Unprocessable
    })?;
    if search_term.is_empty() {
        return Err(ApiError::Unprocessable);
    }

    let related = questions::search_questions(&pool, &search_term).await?;
    if related.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(SearchResults {
        success: true,
        questions: paginate(&related, page).to_vec(),
        total_questions: related.len() as i64,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route(
            "/questions/search",
            get(search_questions).post(search_questions),
        )
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
