use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header(user: Option<&str>) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."brand" {
                        a href=(names::HOME_URL) {
                            strong { "Quizhall" }
                        }
                    }
                }
                ul {
                    li { a href=(names::QUIZZES_URL) { "Quizzes" } }
                    li { a href=(names::EVENTS_URL) { "Events" } }
                    @if let Some(name) = user {
                        li { a href=(names::HISTORY_URL) { "History" } }
                        li {
                            form action=(names::LOGOUT_URL) method="post" {
                                button."link" type="submit" { "Log out (" (name) ")" }
                            }
                        }
                    } @else {
                        li { a href=(names::LOGIN_URL) { "Log in" } }
                        li { a href=(names::REGISTER_URL) { "Register" } }
                    }
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    page_with_user(title, body, None)
}

pub fn page_with_user(title: &str, body: Markup, user: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (icon())

            title { (format!("{title} - Quizhall")) }
        }

        body."container" {
            (header(user))
            (main(body))
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - Quizhall" }
        (body)
    }
}
