use color_eyre::Result;

use super::models::{AnswerRow, QuestionDetail, QuizDetail, QuizSummary};
use super::Db;
use crate::models::NewQuiz;

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    text: String,
    is_multiple_choice: bool,
}

impl Db {
    /// Insert a quiz with all its questions and answers atomically in a
    /// transaction. Returns the id of the newly created quiz.
    pub async fn load_quiz(&self, quiz: NewQuiz) -> Result<i64> {
        let mut tx = self.pool.begin().await?;

        let quiz_id: i64 = sqlx::query_scalar(
            "INSERT INTO quizzes (title, description) VALUES (?, ?) RETURNING id",
        )
        .bind(&quiz.title)
        .bind(&quiz.description)
        .fetch_one(&mut *tx)
        .await?;

        for question in &quiz.questions {
            let question_id: i64 = sqlx::query_scalar(
                "INSERT INTO questions (quiz_id, text, is_multiple_choice) VALUES (?, ?, ?) RETURNING id",
            )
            .bind(quiz_id)
            .bind(&question.text)
            .bind(question.is_multiple_choice)
            .fetch_one(&mut *tx)
            .await?;

            for answer in &question.answers {
                sqlx::query("INSERT INTO answers (question_id, text, is_correct) VALUES (?, ?, ?)")
                    .bind(question_id)
                    .bind(&answer.text)
                    .bind(answer.is_correct)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;

        tracing::info!("new quiz created with id: {quiz_id}");
        Ok(quiz_id)
    }

    /// Quiz summaries with question counts, newest first.
    pub async fn quizzes(&self) -> Result<Vec<QuizSummary>> {
        let quizzes = sqlx::query_as::<_, QuizSummary>(
            r#"
            SELECT
              quizzes.id AS id,
              quizzes.title AS title,
              quizzes.description AS description,
              quizzes.created_at AS created_at,
              COUNT(questions.id) AS question_count
            FROM
              quizzes
              LEFT JOIN questions ON questions.quiz_id = quizzes.id
            GROUP BY
              quizzes.id, quizzes.title, quizzes.description, quizzes.created_at
            ORDER BY
              quizzes.created_at DESC,
              quizzes.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(quizzes)
    }

    /// Fetch a quiz with its questions and each question's answers.
    pub async fn get_quiz(&self, quiz_id: i64) -> Result<Option<QuizDetail>> {
        let header = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT id, title, description FROM quizzes WHERE id = ?",
        )
        .bind(quiz_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some((id, title, description)) = header else {
            return Ok(None);
        };

        let question_rows = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, text, is_multiple_choice FROM questions WHERE quiz_id = ? ORDER BY id",
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        let answer_rows = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT a.id, a.question_id, a.text, a.is_correct
            FROM answers a
            JOIN questions q ON q.id = a.question_id
            WHERE q.quiz_id = ?
            ORDER BY a.question_id, a.id
            "#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        let questions = question_rows
            .into_iter()
            .map(|q| QuestionDetail {
                answers: answer_rows
                    .iter()
                    .filter(|a| a.question_id == q.id)
                    .cloned()
                    .collect(),
                id: q.id,
                text: q.text,
                is_multiple_choice: q.is_multiple_choice,
            })
            .collect();

        Ok(Some(QuizDetail {
            id,
            title,
            description,
            questions,
        }))
    }

    pub async fn questions_count(&self, quiz_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE quiz_id = ?")
            .bind(quiz_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn delete_quiz(&self, quiz_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM quizzes WHERE id = ?")
            .bind(quiz_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("quiz {quiz_id} deleted");
        Ok(())
    }
}
