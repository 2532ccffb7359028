use chrono::NaiveDate;
use color_eyre::Result;

use super::models::EventRow;
use super::Db;
use crate::models::NewEvent;

impl Db {
    pub async fn create_event(&self, event: NewEvent) -> Result<i64> {
        let event_id: i64 = sqlx::query_scalar(
            "INSERT INTO events (title, description, date, location) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date)
        .bind(&event.location)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("new event created with id: {event_id}");
        Ok(event_id)
    }

    /// Events on or after `today`, soonest first.
    pub async fn upcoming_events(&self, today: NaiveDate) -> Result<Vec<EventRow>> {
        let events = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, description, date, location
            FROM events
            WHERE date >= ?
            ORDER BY date ASC, id ASC
            "#,
        )
        .bind(today)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }
}
