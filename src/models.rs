//! Input models for seed-file content loading.

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub quizzes: Vec<NewQuiz>,
    #[serde(default)]
    pub events: Vec<NewEvent>,
}

#[derive(Debug, Deserialize)]
pub struct NewQuiz {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<NewQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct NewQuestion {
    pub text: String,
    #[serde(default)]
    pub is_multiple_choice: bool,
    pub answers: Vec<NewAnswer>,
}

#[derive(Debug, Deserialize)]
pub struct NewAnswer {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
}
