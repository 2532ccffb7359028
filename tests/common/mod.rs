use quizhall::db::Db;
use quizhall::models::{NewAnswer, NewQuestion, NewQuiz};

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("quizhall_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = path.display().to_string();
    Db::new(url).await.expect("failed to create test database")
}

/// A quiz where question i has one correct answer ("Correct i") and one wrong
/// answer ("Wrong i").
pub fn make_quiz(title: &str, questions: usize) -> NewQuiz {
    NewQuiz {
        title: title.to_string(),
        description: String::new(),
        questions: (0..questions)
            .map(|i| NewQuestion {
                text: format!("Question {}", i + 1),
                is_multiple_choice: false,
                answers: vec![
                    NewAnswer {
                        text: format!("Correct {}", i + 1),
                        is_correct: true,
                    },
                    NewAnswer {
                        text: format!("Wrong {}", i + 1),
                        is_correct: false,
                    },
                ],
            })
            .collect(),
    }
}
