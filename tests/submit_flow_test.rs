mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{create_test_db, make_quiz};
use quizhall::db::Db;
use quizhall::{names, router, AppState};
use tower::ServiceExt;

fn app(db: Db) -> axum::Router {
    router(AppState {
        db,
        secure_cookies: false,
    })
}

fn form_request(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from(body))
        .expect("request build should succeed")
}

#[tokio::test]
async fn public_pages_render() {
    let db = create_test_db().await;
    db.load_quiz(make_quiz("Smoke", 1)).await.expect("load quiz");
    let app = app(db);

    for uri in ["/", names::QUIZZES_URL, names::EVENTS_URL, "/quizzes/1/start"] {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("request build should succeed");
        let resp = app
            .clone()
            .oneshot(req)
            .await
            .expect("router should respond");
        assert_eq!(resp.status(), StatusCode::OK, "expected OK for {uri}");
    }
}

#[tokio::test]
async fn submitting_a_quiz_redirects_to_its_result_page() {
    let db = create_test_db().await;
    let quiz_id = db.load_quiz(make_quiz("Flow", 1)).await.expect("load quiz");
    let quiz = db
        .get_quiz(quiz_id)
        .await
        .expect("get quiz")
        .expect("quiz should exist");
    let question = &quiz.questions[0];
    let answer = question
        .answers
        .iter()
        .find(|a| a.is_correct)
        .expect("question should have a correct answer");

    let app = app(db);

    let body = format!(
        "user_name=alice&{}{}={}",
        names::QUESTION_FIELD_PREFIX,
        question.id,
        answer.id
    );
    let resp = app
        .clone()
        .oneshot(form_request(&names::submit_quiz_url(quiz_id), body))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .expect("redirect should carry a location")
        .to_str()
        .expect("location should be valid UTF-8")
        .to_string();
    assert!(location.starts_with("/submissions/"));

    let req = Request::builder()
        .method(Method::GET)
        .uri(&location)
        .body(Body::empty())
        .expect("request build should succeed");
    let resp = app.oneshot(req).await.expect("router should respond");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn getting_the_submit_url_redirects_back_to_the_start_page() {
    let db = create_test_db().await;
    let quiz_id = db.load_quiz(make_quiz("Flow", 1)).await.expect("load quiz");
    let app = app(db);

    let req = Request::builder()
        .method(Method::GET)
        .uri(names::submit_quiz_url(quiz_id))
        .body(Body::empty())
        .expect("request build should succeed");
    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .expect("redirect should carry a location"),
        &names::start_quiz_url(quiz_id)
    );
}

#[tokio::test]
async fn unknown_ids_render_not_found() {
    let db = create_test_db().await;
    let app = app(db);

    let cases = [
        "/quizzes/9999/start".to_string(),
        names::result_url(9999),
        "/no-such-page".to_string(),
    ];
    for uri in &cases {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("request build should succeed");
        let resp = app
            .clone()
            .oneshot(req)
            .await
            .expect("router should respond");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "expected 404 for {uri}");
    }

    let resp = app
        .oneshot(form_request(
            &names::submit_quiz_url(9999),
            "user_name=alice".to_string(),
        ))
        .await
        .expect("router should respond");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn registration_logs_the_user_in_and_history_shows_their_submissions() {
    let db = create_test_db().await;
    let quiz_id = db.load_quiz(make_quiz("Tracked", 1)).await.expect("load quiz");
    let app = app(db);

    let resp = app
        .clone()
        .oneshot(form_request(
            names::REGISTER_URL,
            "username=alice&password=hunter2!".to_string(),
        ))
        .await
        .expect("router should respond");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("registration should set a session cookie")
        .to_str()
        .expect("cookie should be valid UTF-8")
        .split(';')
        .next()
        .expect("cookie should have a name=value part")
        .to_string();

    // Submit while logged in; the authenticated identity overrides the form.
    let mut req = form_request(
        &names::submit_quiz_url(quiz_id),
        "user_name=ignored".to_string(),
    );
    req.headers_mut().insert(
        header::COOKIE,
        cookie.parse().expect("cookie should round-trip"),
    );
    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("router should respond");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let req = Request::builder()
        .method(Method::GET)
        .uri(names::HISTORY_URL)
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .expect("request build should succeed");
    let resp = app.oneshot(req).await.expect("router should respond");
    assert_eq!(resp.status(), StatusCode::OK);
}
