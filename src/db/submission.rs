use std::collections::BTreeMap;

use color_eyre::Result;

use super::models::{HistoryEntry, ReviewAnswer, SubmissionResult, SubmissionRow};
use super::Db;
use crate::utils;

#[derive(sqlx::FromRow)]
struct HistoryRow {
    id: i64,
    quiz_id: i64,
    quiz_title: String,
    user_name: String,
    score: i64,
    submitted_at: chrono::NaiveDateTime,
    total_questions: i64,
}

impl Db {
    /// Score and persist one quiz attempt atomically.
    ///
    /// `selections` maps question id to the answer id the user picked. A
    /// question with no entry counts as unanswered; a selection whose answer
    /// does not belong to that question is skipped without error. Correctness
    /// is snapshotted per answered question and the final tally is written to
    /// the submission before the transaction commits.
    ///
    /// Returns `None` when `quiz_id` does not resolve.
    pub async fn submit_quiz(
        &self,
        quiz_id: i64,
        user_name: &str,
        selections: &BTreeMap<i64, i64>,
    ) -> Result<Option<i64>> {
        let mut tx = self.pool.begin().await?;

        let quiz_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM quizzes WHERE id = ?)")
            .bind(quiz_id)
            .fetch_one(&mut *tx)
            .await?;
        if !quiz_exists {
            return Ok(None);
        }

        let question_ids: Vec<i64> =
            sqlx::query_scalar("SELECT id FROM questions WHERE quiz_id = ? ORDER BY id")
                .bind(quiz_id)
                .fetch_all(&mut *tx)
                .await?;

        let submission_id: i64 = sqlx::query_scalar(
            "INSERT INTO submissions (quiz_id, user_name, score) VALUES (?, ?, 0) RETURNING id",
        )
        .bind(quiz_id)
        .bind(user_name)
        .fetch_one(&mut *tx)
        .await?;

        let mut score: i64 = 0;

        for question_id in question_ids {
            let Some(&answer_id) = selections.get(&question_id) else {
                continue;
            };

            // The answer must belong to this question; a tampered pair is
            // treated the same as an unanswered question.
            let resolved: Option<bool> = sqlx::query_scalar(
                "SELECT is_correct FROM answers WHERE id = ? AND question_id = ?",
            )
            .bind(answer_id)
            .bind(question_id)
            .fetch_optional(&mut *tx)
            .await?;

            let Some(is_correct) = resolved else {
                continue;
            };

            if is_correct {
                score += 1;
            }

            sqlx::query(
                "INSERT INTO user_answers (submission_id, question_id, answer_id, is_correct) VALUES (?, ?, ?, ?)",
            )
            .bind(submission_id)
            .bind(question_id)
            .bind(answer_id)
            .bind(is_correct)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("UPDATE submissions SET score = ? WHERE id = ?")
            .bind(score)
            .bind(submission_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            "submission {submission_id} recorded for quiz={quiz_id} user={user_name} score={score}"
        );
        Ok(Some(submission_id))
    }

    /// Fetch a submission with its answer review and derived statistics.
    ///
    /// `total_questions` is counted at read time, so the percentage of an old
    /// submission shifts if the quiz's questions change afterwards.
    pub async fn get_result(&self, submission_id: i64) -> Result<Option<SubmissionResult>> {
        let submission = sqlx::query_as::<_, SubmissionRow>(
            r#"
            SELECT s.id, s.quiz_id, q.title AS quiz_title, s.user_name, s.score, s.submitted_at
            FROM submissions s
            JOIN quizzes q ON q.id = s.quiz_id
            WHERE s.id = ?
            "#,
        )
        .bind(submission_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(submission) = submission else {
            return Ok(None);
        };

        let answers = sqlx::query_as::<_, ReviewAnswer>(
            r#"
            SELECT q.text AS question_text, a.text AS answer_text, ua.is_correct
            FROM user_answers ua
            JOIN questions q ON q.id = ua.question_id
            JOIN answers a ON a.id = ua.answer_id
            WHERE ua.submission_id = ?
            ORDER BY ua.question_id
            "#,
        )
        .bind(submission_id)
        .fetch_all(&self.pool)
        .await?;

        let total_questions = self.questions_count(submission.quiz_id).await?;
        let percentage = utils::percentage(submission.score, total_questions);

        Ok(Some(SubmissionResult {
            submission,
            answers,
            total_questions,
            percentage,
        }))
    }

    /// All submissions recorded under `user_name`, newest first.
    pub async fn history_for_user(&self, user_name: &str) -> Result<Vec<HistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT
              s.id,
              s.quiz_id,
              q.title AS quiz_title,
              s.user_name,
              s.score,
              s.submitted_at,
              (SELECT COUNT(*) FROM questions WHERE quiz_id = s.quiz_id) AS total_questions
            FROM submissions s
            JOIN quizzes q ON q.id = s.quiz_id
            WHERE s.user_name = ?
            ORDER BY s.submitted_at DESC, s.id DESC
            "#,
        )
        .bind(user_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| HistoryEntry {
                percentage: utils::percentage(r.score, r.total_questions),
                total_questions: r.total_questions,
                submission: SubmissionRow {
                    id: r.id,
                    quiz_id: r.quiz_id,
                    quiz_title: r.quiz_title,
                    user_name: r.user_name,
                    score: r.score,
                    submitted_at: r.submitted_at,
                },
            })
            .collect())
    }
}
