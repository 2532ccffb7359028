mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::create_test_db;
use quizhall::{names, router, AppState};
use tower::ServiceExt;

#[tokio::test]
async fn history_rejects_direct_access_without_session_cookie() {
    let db = create_test_db().await;
    let app = router(AppState {
        db,
        secure_cookies: false,
    });

    let req = Request::builder()
        .method(Method::GET)
        .uri(names::HISTORY_URL)
        .body(Body::empty())
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn history_accepts_requests_with_valid_session_cookie() {
    let db = create_test_db().await;
    let user_id = db
        .create_user("alice", "hunter2!")
        .await
        .expect("create user");
    let session = db
        .create_user_session(user_id)
        .await
        .expect("create session");

    let app = router(AppState {
        db,
        secure_cookies: false,
    });

    let req = Request::builder()
        .method(Method::GET)
        .uri(names::HISTORY_URL)
        .header(
            "cookie",
            format!("{}={}", names::USER_SESSION_COOKIE_NAME, session),
        )
        .body(Body::empty())
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn history_rejects_a_forged_session_cookie() {
    let db = create_test_db().await;
    let app = router(AppState {
        db,
        secure_cookies: false,
    });

    let req = Request::builder()
        .method(Method::GET)
        .uri(names::HISTORY_URL)
        .header(
            "cookie",
            format!("{}=not-a-real-session", names::USER_SESSION_COOKIE_NAME),
        )
        .body(Body::empty())
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
