//! In-Memory Applicant Repository
//!
//! Process-local store used when no database URL is configured, and by tests.
//! The email index and the records share one lock, so the uniqueness check
//! and the write are atomic.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{Applicant, ApplicantRepository};
use crate::shared::error::AppError;

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    records: BTreeMap<i64, Applicant>,
    by_email: HashMap<String, i64>,
}

/// In-memory applicant repository.
#[derive(Debug, Default)]
pub struct InMemoryApplicantRepository {
    store: RwLock<Store>,
}

impl InMemoryApplicantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored applicants.
    pub fn len(&self) -> usize {
        self.store.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn conflict(email: &str) -> AppError {
    AppError::Conflict(format!("Applicant with email {} already exists", email))
}

#[async_trait]
impl ApplicantRepository for InMemoryApplicantRepository {
    async fn find_by_id(&self, applicant_id: i64) -> Result<Option<Applicant>, AppError> {
        Ok(self.store.read().records.get(&applicant_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Applicant>, AppError> {
        let store = self.store.read();
        Ok(store
            .by_email
            .get(email)
            .and_then(|id| store.records.get(id))
            .cloned())
    }

    async fn save(&self, applicant: &Applicant) -> Result<Applicant, AppError> {
        let mut store = self.store.write();
        let email = applicant.email().to_owned();

        let applicant_id = match applicant.applicant_id {
            Some(applicant_id) => {
                let previous = store
                    .records
                    .get(&applicant_id)
                    .map(|a| a.email().to_owned())
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Applicant with id {} not found", applicant_id))
                    })?;
                if store.by_email.get(&email).is_some_and(|id| *id != applicant_id) {
                    return Err(conflict(&email));
                }
                store.by_email.remove(&previous);
                applicant_id
            }
            None => {
                if store.by_email.contains_key(&email) {
                    return Err(conflict(&email));
                }
                store.last_id += 1;
                store.last_id
            }
        };

        let saved = applicant.clone().with_id(applicant_id);
        store.by_email.insert(email, applicant_id);
        store.records.insert(applicant_id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, applicant_id: i64) -> Result<(), AppError> {
        let mut store = self.store.write();
        let removed = store.records.remove(&applicant_id).ok_or_else(|| {
            AppError::NotFound(format!("Applicant with id {} not found", applicant_id))
        })?;
        store.by_email.remove(removed.email());
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
