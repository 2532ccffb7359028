// Database model structs

use chrono::{NaiveDate, NaiveDateTime};

#[derive(Clone, sqlx::FromRow)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
}

#[derive(sqlx::FromRow)]
pub struct QuizSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub question_count: i64,
}

/// A quiz with its questions and each question's answers eagerly loaded.
pub struct QuizDetail {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionDetail>,
}

pub struct QuestionDetail {
    pub id: i64,
    pub text: String,
    pub is_multiple_choice: bool,
    pub answers: Vec<AnswerRow>,
}

#[derive(Clone, sqlx::FromRow)]
pub struct AnswerRow {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub is_correct: bool,
}

#[derive(sqlx::FromRow)]
pub struct EventRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
}

#[derive(sqlx::FromRow)]
pub struct SubmissionRow {
    pub id: i64,
    pub quiz_id: i64,
    pub quiz_title: String,
    pub user_name: String,
    pub score: i64,
    pub submitted_at: NaiveDateTime,
}

/// One line of the per-question review on the result page. `is_correct` is the
/// snapshot taken at submission time, not recomputed against current content.
#[derive(sqlx::FromRow)]
pub struct ReviewAnswer {
    pub question_text: String,
    pub answer_text: String,
    pub is_correct: bool,
}

pub struct SubmissionResult {
    pub submission: SubmissionRow,
    pub answers: Vec<ReviewAnswer>,
    pub total_questions: i64,
    pub percentage: f64,
}

pub struct HistoryEntry {
    pub submission: SubmissionRow,
    pub total_questions: i64,
    pub percentage: f64,
}
