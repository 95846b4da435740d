use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::domain::entities::{
    waitlist_email::WaitlistEmail,
    waitlist_entry::{InsertOutcome, WaitlistEntry},
};

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Records `email` unless it is already present. A duplicate is reported as
    /// `InsertOutcome::AlreadyExists`, never as an error.
    async fn insert(&self, email: &WaitlistEmail) -> AppResult<InsertOutcome>;
    async fn list_newest_first(&self) -> AppResult<Vec<WaitlistEntry>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistListing {
    pub entries: Vec<WaitlistEntry>,
    pub count: usize,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    /// Validates and stores a signup. `raw_email` is `None` when the caller
    /// sent no usable string.
    #[instrument(skip(self))]
    pub async fn join(&self, raw_email: Option<&str>) -> AppResult<()> {
        let raw = match raw_email {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(AppError::EmailRequired),
        };

        let email = WaitlistEmail::parse(raw).ok_or(AppError::InvalidEmail)?;

        match self.repo.insert(&email).await? {
            InsertOutcome::Inserted(entry) => {
                tracing::info!(entry_id = %entry.id, "Waitlist entry created");
            }
            InsertOutcome::AlreadyExists => {
                tracing::debug!("Waitlist entry already present");
            }
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> AppResult<WaitlistListing> {
        let entries = self.repo.list_newest_first().await?;
        let count = entries.len();
        Ok(WaitlistListing { entries, count })
    }
}
