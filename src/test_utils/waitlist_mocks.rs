//! In-memory mock implementations for the waitlist repository trait.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::{
        waitlist_email::WaitlistEmail,
        waitlist_entry::{InsertOutcome, WaitlistEntry},
    },
};

/// In-memory implementation of WaitlistRepo for testing.
///
/// Enforces the same uniqueness rule as the `waitlist.email` column and can be
/// switched into an outage mode per operation.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    fail_inserts: AtomicBool,
    fail_reads: AtomicBool,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    /// Get all entries in insertion order (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn set_fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, email: &WaitlistEmail) -> AppResult<InsertOutcome> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(AppError::Database("simulated outage".into()));
        }

        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.email == email.as_str()) {
            return Ok(InsertOutcome::AlreadyExists);
        }

        let entry = WaitlistEntry {
            id: Uuid::new_v4(),
            email: email.as_str().to_string(),
            created_at: chrono::Utc::now(),
        };
        entries.push(entry.clone());
        Ok(InsertOutcome::Inserted(entry))
    }

    async fn list_newest_first(&self) -> AppResult<Vec<WaitlistEntry>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::Database("simulated outage".into()));
        }

        // Later inserts win ties on equal timestamps.
        let mut entries: Vec<WaitlistEntry> =
            self.entries.lock().unwrap().iter().rev().cloned().collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }
}

/// Repo whose every call fails, standing in for an unreachable database.
#[derive(Default)]
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn insert(&self, _email: &WaitlistEmail) -> AppResult<InsertOutcome> {
        Err(AppError::Database("Database operation failed".into()))
    }

    async fn list_newest_first(&self) -> AppResult<Vec<WaitlistEntry>> {
        Err(AppError::Database("Database operation failed".into()))
    }
}
