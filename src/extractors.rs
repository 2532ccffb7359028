use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use crate::{db::models::AuthUser, names, rejections::AppError, AppState};

/// Guard extractor that verifies the user session cookie against the database.
/// Carries the authenticated user's info for use in handlers.
pub struct AuthGuard(pub AuthUser);

impl FromRequestParts<AppState> for AuthGuard {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match lookup_session(parts, state).await {
            Some(user) => Ok(AuthGuard(user)),
            None => Err(AppError::Unauthorized),
        }
    }
}

/// Optional identity for pages that render for both visitors and users.
pub struct CurrentUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(lookup_session(parts, state).await))
    }
}

async fn lookup_session(parts: &Parts, state: &AppState) -> Option<AuthUser> {
    let jar = CookieJar::from_headers(&parts.headers);
    let session_id = jar.get(names::USER_SESSION_COOKIE_NAME)?.value().to_string();

    match state.db.get_user_by_session(&session_id).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("session lookup failed: {e}");
            None
        }
    }
}
