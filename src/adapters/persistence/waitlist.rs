use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::{PostgresPersistence, is_unique_violation},
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::{
        waitlist_email::WaitlistEmail,
        waitlist_entry::{InsertOutcome, WaitlistEntry},
    },
};

fn row_to_entry(row: sqlx::postgres::PgRow) -> WaitlistEntry {
    WaitlistEntry {
        id: row.get("id"),
        email: row.get("email"),
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn insert(&self, email: &WaitlistEmail) -> AppResult<InsertOutcome> {
        let id = Uuid::new_v4();
        // The conflict target turns a duplicate into "no row returned" instead of
        // an error.
        let result = sqlx::query(
            r#"
            INSERT INTO waitlist (id, email)
            VALUES ($1, $2)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, created_at
            "#,
        )
        .bind(id)
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(Some(row)) => Ok(InsertOutcome::Inserted(row_to_entry(row))),
            Ok(None) => Ok(InsertOutcome::AlreadyExists),
            Err(err) if is_unique_violation(&err) => Ok(InsertOutcome::AlreadyExists),
            Err(err) => Err(AppError::from(err)),
        }
    }

    async fn list_newest_first(&self) -> AppResult<Vec<WaitlistEntry>> {
        let rows = sqlx::query("SELECT id, email, created_at FROM waitlist ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(rows.into_iter().map(row_to_entry).collect())
    }
}
