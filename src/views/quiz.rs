use maud::{html, Markup};

use crate::db::models::{HistoryEntry, QuizDetail, QuizSummary, SubmissionResult};
use crate::names;

pub fn quiz_list(quizzes: &[QuizSummary]) -> Markup {
    html! {
        h1 { "Quizzes" }
        @if quizzes.is_empty() {
            p { "No quizzes yet. Check back later." }
        }
        @for quiz in quizzes {
            article {
                header {
                    h2 { (quiz.title) }
                }
                @if !quiz.description.is_empty() {
                    p { (quiz.description) }
                }
                p."secondary" {
                    (quiz.question_count)
                    @if quiz.question_count == 1 { " question" } @else { " questions" }
                }
                a role="button" href=(names::start_quiz_url(quiz.id)) { "Start" }
            }
        }
    }
}

pub fn attempt(quiz: &QuizDetail, user: Option<&str>) -> Markup {
    html! {
        h1 { (quiz.title) }
        @if !quiz.description.is_empty() {
            p { (quiz.description) }
        }
        form action=(names::submit_quiz_url(quiz.id)) method="post" {
            @match user {
                Some(name) => {
                    p { "Submitting as " strong { (name) } }
                }
                None => {
                    label {
                        "Your name"
                        input name="user_name"
                              type="text"
                              placeholder=(names::ANONYMOUS_USER_NAME)
                              autocomplete="nickname"
                              aria-label="Your name";
                    }
                }
            }
            @for question in &quiz.questions {
                fieldset {
                    legend {
                        (question.text)
                        @if question.is_multiple_choice {
                            " " small."secondary" { "(multiple choice)" }
                        }
                    }
                    @for answer in &question.answers {
                        label {
                            input type="radio"
                                  name=(format!("{}{}", names::QUESTION_FIELD_PREFIX, question.id))
                                  value=(answer.id);
                            (answer.text)
                        }
                    }
                }
            }
            input type="submit" value="Submit answers";
        }
    }
}

pub fn result(result: &SubmissionResult) -> Markup {
    let submission = &result.submission;
    html! {
        h1 { "Results: " (submission.quiz_title) }
        article {
            header {
                h2 {
                    (submission.score) " / " (result.total_questions)
                    " (" mark { (format!("{:.2}%", result.percentage)) } ")"
                }
            }
            p {
                "Submitted by " strong { (submission.user_name) }
                " at " (submission.submitted_at.format("%Y-%m-%d %H:%M"))
            }
        }
        @if !result.answers.is_empty() {
            h3 { "Your answers" }
            table {
                thead {
                    tr {
                        th { "Question" }
                        th { "Your answer" }
                        th { "Result" }
                    }
                }
                tbody {
                    @for answer in &result.answers {
                        tr {
                            td { (answer.question_text) }
                            td { (answer.answer_text) }
                            td {
                                @if answer.is_correct { "\u{2705}" } @else { "\u{274C}" }
                            }
                        }
                    }
                }
            }
        }
        a role="button" href=(names::start_quiz_url(submission.quiz_id)) { "Try again" }
        " "
        a role="button" class="outline" href=(names::QUIZZES_URL) { "All quizzes" }
    }
}

pub fn history(entries: &[HistoryEntry]) -> Markup {
    html! {
        h1 { "Your quiz history" }
        @if entries.is_empty() {
            p {
                "You have not attempted any quizzes yet. "
                a href=(names::QUIZZES_URL) { "Find one to try." }
            }
        } @else {
            table {
                thead {
                    tr {
                        th { "Quiz" }
                        th { "Score" }
                        th { "Percentage" }
                        th { "Submitted" }
                        th { }
                    }
                }
                tbody {
                    @for entry in entries {
                        tr {
                            td { (entry.submission.quiz_title) }
                            td { (entry.submission.score) " / " (entry.total_questions) }
                            td { (format!("{:.2}%", entry.percentage)) }
                            td { (entry.submission.submitted_at.format("%Y-%m-%d %H:%M")) }
                            td {
                                a href=(names::result_url(entry.submission.id)) { "View" }
                            }
                        }
                    }
                }
            }
        }
    }
}
