pub const HOME_URL: &str = "/";
pub const QUIZZES_URL: &str = "/quizzes";
pub const EVENTS_URL: &str = "/events";
pub const HISTORY_URL: &str = "/history";

pub const LOGIN_URL: &str = "/login";
pub const LOGOUT_URL: &str = "/logout";
pub const REGISTER_URL: &str = "/register";

pub const USER_SESSION_COOKIE_NAME: &str = "user_session";

/// Name recorded on submissions when no identity is available.
pub const ANONYMOUS_USER_NAME: &str = "Anonymous";

/// Form field prefix for per-question answer selections.
pub const QUESTION_FIELD_PREFIX: &str = "question_";

pub fn start_quiz_url(quiz_id: i64) -> String {
    format!("/quizzes/{quiz_id}/start")
}

pub fn submit_quiz_url(quiz_id: i64) -> String {
    format!("/quizzes/{quiz_id}/submit")
}

pub fn result_url(submission_id: i64) -> String {
    format!("/submissions/{submission_id}/result")
}
