use axum::{extract::State, routing::get, Router};
use maud::Markup;

use crate::{
    extractors::CurrentUser,
    names,
    rejections::{AppError, ResultExt},
    views, AppState,
};

use crate::views::event as event_views;

pub fn routes() -> Router<AppState> {
    Router::new().route(names::EVENTS_URL, get(event_list))
}

async fn event_list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Markup, AppError> {
    let today = chrono::Local::now().date_naive();
    let events = state
        .db
        .upcoming_events(today)
        .await
        .reject("could not get events")?;

    Ok(views::page_with_user(
        "Events",
        event_views::event_list(&events),
        user.as_ref().map(|u| u.username.as_str()),
    ))
}
