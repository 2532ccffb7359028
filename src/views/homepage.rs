use maud::{html, Markup};

use crate::names;

pub fn landing(user: Option<&str>) -> Markup {
    html! {
        section."hero" {
            h1 { "Welcome to Quizhall" }
            p { "Test yourself on our quizzes and keep up with upcoming events." }
            div."cta" {
                a role="button" href=(names::QUIZZES_URL) { "Browse quizzes" }
                a role="button" class="outline" href=(names::EVENTS_URL) { "Upcoming events" }
            }
        }
        @if user.is_none() {
            section {
                p {
                    "Have an account? "
                    a href=(names::LOGIN_URL) { "Log in" }
                    " to keep a history of your attempts, or "
                    a href=(names::REGISTER_URL) { "register" }
                    " to get started."
                }
            }
        }
    }
}

pub enum LoginState {
    NoError,
    IncorrectPassword,
}

pub fn login(state: LoginState) -> Markup {
    let error_msg = match state {
        LoginState::NoError => None,
        LoginState::IncorrectPassword => Some("Invalid username or password."),
    };

    html! {
        h1 { "Log In" }
        article style="width: fit-content;" {
            @if let Some(msg) = error_msg {
                p."error" { (msg) }
            }
            form action=(names::LOGIN_URL) method="post" {
                label {
                    "Username"
                    input name="username"
                          type="text"
                          autocomplete="username"
                          required
                          aria-label="Username";
                }
                label {
                    "Password"
                    input name="password"
                          type="password"
                          autocomplete="current-password"
                          required
                          aria-invalid=[error_msg.map(|_| "true")]
                          aria-label="Password";
                }
                input type="submit" value="Log in";
            }
            p {
                "No account yet? "
                a href=(names::REGISTER_URL) { "Register" }
            }
        }
    }
}

pub enum RegisterState {
    NoError,
    UsernameTaken,
    EmptyFields,
}

pub fn register(state: RegisterState) -> Markup {
    let error_msg = match state {
        RegisterState::NoError => None,
        RegisterState::UsernameTaken => Some("That username is already taken."),
        RegisterState::EmptyFields => Some("Username and password must not be empty."),
    };

    html! {
        h1 { "Register" }
        article style="width: fit-content;" {
            @if let Some(msg) = error_msg {
                p."error" { (msg) }
            }
            form action=(names::REGISTER_URL) method="post" {
                label {
                    "Username"
                    input name="username"
                          type="text"
                          autocomplete="username"
                          required
                          aria-label="Username";
                }
                label {
                    "Password"
                    input name="password"
                          type="password"
                          autocomplete="new-password"
                          required
                          aria-label="Password";
                }
                input type="submit" value="Create account";
            }
            p {
                "Already registered? "
                a href=(names::LOGIN_URL) { "Log in" }
            }
        }
    }
}
