use maud::{html, Markup};

use crate::db::models::EventRow;

pub fn event_list(events: &[EventRow]) -> Markup {
    html! {
        h1 { "Upcoming events" }
        @if events.is_empty() {
            p { "Nothing scheduled right now." }
        }
        @for event in events {
            article {
                header {
                    h2 { (event.title) }
                }
                p { (event.description) }
                p."secondary" {
                    (event.date.format("%A, %B %-d, %Y"))
                    " \u{00B7} "
                    (event.location)
                }
            }
        }
    }
}
