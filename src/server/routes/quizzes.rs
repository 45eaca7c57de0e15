use std::collections::HashSet;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions, Question},
    quiz::{select_question, ANY_CATEGORY},
    server::app::AppState,
    telemetry::QUIZ_QUESTIONS_SERVED,
};

use super::{ApiError, ApiResponse};

#[derive(Deserialize)]
struct QuizCategory {
    // category ids arrive as object keys from the browser, so strings are common
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
    #[serde(rename = "type", default)]
    label: Option<String>,
}

#[derive(Deserialize)]
struct QuizRequest {
    previous_questions: Option<Vec<i64>>,
    quiz_category: Option<QuizCategory>,
}

#[derive(Serialize)]
struct QuizBody {
    success: bool,
    question: Question,
}

async fn next_question(
    State(pool): State<SqlitePool>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResponse<QuizBody> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!("Rejected quiz payload: {e}");
        ApiError::NotFound
    })?;
    let (Some(previous_questions), Some(category)) =
        (request.previous_questions, request.quiz_category)
    else {
        return Err(ApiError::NotFound);
    };
    tracing::debug!(
        "Quiz round for category {} ({}), {} questions seen",
        category.id,
        category.label.as_deref().unwrap_or("unlabelled"),
        previous_questions.len()
    );

    let eligible = if category.id == ANY_CATEGORY {
        questions::get_all_questions(&pool).await?
    } else {
        questions::get_questions_for_category(&pool, category.id).await?
    };
    let seen: HashSet<i64> = previous_questions.into_iter().collect();
    let question = select_question(&eligible, &seen, &mut rand::thread_rng())?.clone();

    QUIZ_QUESTIONS_SERVED
        .with_label_values(&[question.category.to_string().as_str()])
        .inc();

    Ok(Json(QuizBody {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
