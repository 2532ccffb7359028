use axum::{
    extract::{Form, State},
    http::{
        header::{LOCATION, SET_COOKIE},
        HeaderValue, StatusCode,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use axum_extra::extract::CookieJar;
use maud::Markup;
use serde::Deserialize;

use crate::{
    extractors::CurrentUser,
    names,
    rejections::{AppError, ResultExt},
    utils, views, AppState,
};

use crate::views::homepage as homepage_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::HOME_URL, get(homepage))
        .route(names::REGISTER_URL, get(register_page).post(register_post))
        .route(names::LOGIN_URL, get(login_page).post(login_post))
        .route(names::LOGOUT_URL, get(logout).post(logout))
}

async fn homepage(CurrentUser(user): CurrentUser) -> Markup {
    let username = user.as_ref().map(|u| u.username.as_str());
    views::page_with_user("Home", homepage_views::landing(username), username)
}

async fn register_page(CurrentUser(user): CurrentUser) -> impl IntoResponse {
    if user.is_some() {
        return redirect_home(None);
    }
    views::page(
        "Register",
        homepage_views::register(homepage_views::RegisterState::NoError),
    )
    .into_response()
}

async fn login_page(CurrentUser(user): CurrentUser) -> impl IntoResponse {
    if user.is_some() {
        return redirect_home(None);
    }
    views::page("Log In", homepage_views::login(homepage_views::LoginState::NoError))
        .into_response()
}

#[derive(Deserialize)]
struct RegisterPost {
    username: String,
    password: String,
}

async fn register_post(
    State(state): State<AppState>,
    Form(body): Form<RegisterPost>,
) -> Result<axum::response::Response, AppError> {
    let username = body.username.trim();

    if username.is_empty() || body.password.is_empty() {
        return Ok(views::page(
            "Register",
            homepage_views::register(homepage_views::RegisterState::EmptyFields),
        )
        .into_response());
    }

    if state
        .db
        .username_exists(username)
        .await
        .reject("registration failed")?
    {
        return Ok(views::page(
            "Register",
            homepage_views::register(homepage_views::RegisterState::UsernameTaken),
        )
        .into_response());
    }

    let user_id = state
        .db
        .create_user(username, &body.password)
        .await
        .reject("registration failed")?;
    let session = state
        .db
        .create_user_session(user_id)
        .await
        .reject("could not create session")?;

    let cookie = utils::cookie(names::USER_SESSION_COOKIE_NAME, &session, state.secure_cookies)
        .reject("could not build session cookie")?;

    Ok(redirect_home(Some(cookie)))
}

#[derive(Deserialize)]
struct LoginPost {
    username: String,
    password: String,
}

async fn login_post(
    State(state): State<AppState>,
    Form(body): Form<LoginPost>,
) -> Result<axum::response::Response, AppError> {
    let valid = state
        .db
        .verify_user_password(&body.username, &body.password)
        .await
        .reject("login failed")?;

    if !valid {
        return Ok(views::page(
            "Log In",
            homepage_views::login(homepage_views::LoginState::IncorrectPassword),
        )
        .into_response());
    }

    let user = state
        .db
        .find_user_by_username(&body.username)
        .await
        .reject("login failed")?
        .ok_or(AppError::Internal("login failed"))?;
    let session = state
        .db
        .create_user_session(user.id)
        .await
        .reject("could not create session")?;

    let cookie = utils::cookie(names::USER_SESSION_COOKIE_NAME, &session, state.secure_cookies)
        .reject("could not build session cookie")?;

    Ok(redirect_home(Some(cookie)))
}

async fn logout(
    jar: CookieJar,
    State(state): State<AppState>,
) -> Result<axum::response::Response, AppError> {
    if let Some(session_id) = jar
        .get(names::USER_SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
    {
        let _ = state.db.delete_user_session(&session_id).await;
    }

    let clear = utils::clear_cookie(names::USER_SESSION_COOKIE_NAME, state.secure_cookies)
        .reject("could not build clear-session cookie")?;

    Ok(redirect_home(Some(clear)))
}

fn redirect_home(cookie: Option<HeaderValue>) -> axum::response::Response {
    match cookie {
        Some(cookie) => (
            StatusCode::SEE_OTHER,
            [
                (SET_COOKIE, cookie),
                (LOCATION, HeaderValue::from_static(names::HOME_URL)),
            ],
            "",
        )
            .into_response(),
        None => (
            StatusCode::SEE_OTHER,
            [(LOCATION, HeaderValue::from_static(names::HOME_URL))],
            "",
        )
            .into_response(),
    }
}
