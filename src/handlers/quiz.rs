use std::collections::BTreeMap;

use axum::{
    extract::{Form, Path, State},
    response::Redirect,
    routing::get,
    Router,
};
use maud::Markup;

use crate::{
    extractors::{AuthGuard, CurrentUser},
    names,
    rejections::{AppError, ResultExt},
    views, AppState,
};

use crate::views::quiz as quiz_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUIZZES_URL, get(quiz_list))
        .route("/quizzes/{quiz_id}/start", get(start_quiz))
        .route(
            "/quizzes/{quiz_id}/submit",
            get(submit_redirect).post(submit_quiz),
        )
        .route("/submissions/{submission_id}/result", get(quiz_result))
        .route(names::HISTORY_URL, get(quiz_history))
}

async fn quiz_list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Markup, AppError> {
    let quizzes = state.db.quizzes().await.reject("could not get quizzes")?;

    Ok(views::page_with_user(
        "Quizzes",
        quiz_views::quiz_list(&quizzes),
        user.as_ref().map(|u| u.username.as_str()),
    ))
}

async fn start_quiz(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(quiz_id): Path<i64>,
) -> Result<Markup, AppError> {
    let quiz = state
        .db
        .get_quiz(quiz_id)
        .await
        .reject("could not get quiz")?
        .ok_or(AppError::NotFound)?;

    let username = user.as_ref().map(|u| u.username.as_str());
    Ok(views::page_with_user(
        &quiz.title,
        quiz_views::attempt(&quiz, username),
        username,
    ))
}

/// The submit URL only accepts POST; send stray GETs back to the form.
async fn submit_redirect(Path(quiz_id): Path<i64>) -> Redirect {
    Redirect::to(&names::start_quiz_url(quiz_id))
}

async fn submit_quiz(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(quiz_id): Path<i64>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Redirect, AppError> {
    let mut form_user_name = None;
    let mut selections = BTreeMap::new();

    for (key, value) in &fields {
        if key == "user_name" {
            form_user_name = Some(value.clone());
            continue;
        }
        // Unparsable question or answer ids count as unanswered.
        if let Some(question_id) = key.strip_prefix(names::QUESTION_FIELD_PREFIX) {
            if let (Ok(question_id), Ok(answer_id)) =
                (question_id.parse::<i64>(), value.parse::<i64>())
            {
                selections.insert(question_id, answer_id);
            }
        }
    }

    // An authenticated identity always wins over the form field.
    let user_name = match &user {
        Some(user) => user.username.clone(),
        None => form_user_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| names::ANONYMOUS_USER_NAME.to_string()),
    };

    let submission_id = state
        .db
        .submit_quiz(quiz_id, &user_name, &selections)
        .await
        .reject("could not submit quiz")?
        .ok_or(AppError::NotFound)?;

    Ok(Redirect::to(&names::result_url(submission_id)))
}

async fn quiz_result(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(submission_id): Path<i64>,
) -> Result<Markup, AppError> {
    let result = state
        .db
        .get_result(submission_id)
        .await
        .reject("could not get result")?
        .ok_or(AppError::NotFound)?;

    Ok(views::page_with_user(
        "Results",
        quiz_views::result(&result),
        user.as_ref().map(|u| u.username.as_str()),
    ))
}

async fn quiz_history(
    State(state): State<AppState>,
    AuthGuard(user): AuthGuard,
) -> Result<Markup, AppError> {
    let entries = state
        .db
        .history_for_user(&user.username)
        .await
        .reject("could not get history")?;

    Ok(views::page_with_user(
        "History",
        quiz_views::history(&entries),
        Some(&user.username),
    ))
}
