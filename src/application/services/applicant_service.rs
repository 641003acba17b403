//! Applicant Service
//!
//! Sole arbiter of applicant lifecycle rules: one applicant per email on
//! create, and lookups/deletes only for applicants that exist. Holds no
//! state of its own.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::{Applicant, ApplicantRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Applicant service trait
#[async_trait]
pub trait ApplicantService: Send + Sync {
    /// Register a new applicant. Any id on the input is ignored.
    async fn save(&self, applicant: Applicant) -> Result<Applicant, ApplicantError>;

    /// Get applicant by email
    async fn get_by_email(&self, email: &str) -> Result<Applicant, ApplicantError>;

    /// Get applicant by ID
    async fn get_by_id(&self, applicant_id: i64) -> Result<Applicant, ApplicantError>;

    /// Delete an existing applicant
    async fn delete_by_id(&self, applicant_id: i64) -> Result<(), ApplicantError>;
}

/// Key an applicant was looked up by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicantKey {
    Email(String),
    Id(i64),
}

impl fmt::Display for ApplicantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email(email) => write!(f, "email {}", email),
            Self::Id(id) => write!(f, "id {}", id),
        }
    }
}

/// Applicant service errors
#[derive(Debug, thiserror::Error)]
pub enum ApplicantError {
    #[error("Applicant with email {0} already exists")]
    AlreadyExists(String),

    #[error("Applicant with {0} is unknown")]
    NotFound(ApplicantKey),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicantError {
    /// Metric label for the outcome.
    fn outcome(&self) -> &'static str {
        match self {
            Self::AlreadyExists(_) => "already_exists",
            Self::NotFound(_) => "not_found",
            Self::Internal(_) => "error",
        }
    }
}

impl From<ApplicantError> for AppError {
    fn from(err: ApplicantError) -> Self {
        match err {
            ApplicantError::AlreadyExists(_) => AppError::Conflict(err.to_string()),
            ApplicantError::NotFound(_) => AppError::NotFound(err.to_string()),
            ApplicantError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

fn record<T>(operation: &str, result: &Result<T, ApplicantError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(e) => e.outcome(),
    };
    metrics::record_applicant_operation(operation, outcome);
}

/// ApplicantService implementation
pub struct ApplicantServiceImpl<R>
where
    R: ApplicantRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> ApplicantServiceImpl<R>
where
    R: ApplicantRepository + ?Sized,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    async fn insert(&self, applicant: Applicant) -> Result<Applicant, ApplicantError> {
        let applicant = applicant.without_id();
        let email = applicant.email().to_owned();
        debug_assert!(!email.is_empty(), "applicant email must be validated before save");

        let existing = self
            .repository
            .find_by_email(&email)
            .await
            .map_err(|e| ApplicantError::Internal(e.to_string()))?;

        if existing.is_some() {
            warn!(%email, "Applicant already exists");
            return Err(ApplicantError::AlreadyExists(email));
        }

        // The store enforces uniqueness too; a concurrent writer surfaces as Conflict.
        let saved = self
            .repository
            .save(&applicant)
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => ApplicantError::AlreadyExists(email.clone()),
                e => ApplicantError::Internal(e.to_string()),
            })?;

        info!(applicant_id = ?saved.applicant_id, %email, "Applicant created");
        Ok(saved)
    }

    async fn find_by_id(&self, applicant_id: i64) -> Result<Applicant, ApplicantError> {
        self.repository
            .find_by_id(applicant_id)
            .await
            .map_err(|e| ApplicantError::Internal(e.to_string()))?
            .ok_or(ApplicantError::NotFound(ApplicantKey::Id(applicant_id)))
    }

    async fn remove(&self, applicant_id: i64) -> Result<(), ApplicantError> {
        self.find_by_id(applicant_id).await?;

        self.repository
            .delete_by_id(applicant_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => ApplicantError::NotFound(ApplicantKey::Id(applicant_id)),
                e => ApplicantError::Internal(e.to_string()),
            })?;

        info!(applicant_id, "Applicant deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> ApplicantService for ApplicantServiceImpl<R>
where
    R: ApplicantRepository + ?Sized + 'static,
{
    async fn save(&self, applicant: Applicant) -> Result<Applicant, ApplicantError> {
        let result = self.insert(applicant).await;
        record("save", &result);
        result
    }

    async fn get_by_email(&self, email: &str) -> Result<Applicant, ApplicantError> {
        debug!(%email, "Looking up applicant by email");
        let result = self
            .repository
            .find_by_email(email)
            .await
            .map_err(|e| ApplicantError::Internal(e.to_string()))
            .and_then(|found| {
                found.ok_or_else(|| ApplicantError::NotFound(ApplicantKey::Email(email.to_owned())))
            });
        record("get_by_email", &result);
        result
    }

    async fn get_by_id(&self, applicant_id: i64) -> Result<Applicant, ApplicantError> {
        debug!(applicant_id, "Looking up applicant by id");
        let result = self.find_by_id(applicant_id).await;
        record("get_by_id", &result);
        result
    }

    async fn delete_by_id(&self, applicant_id: i64) -> Result<(), ApplicantError> {
        let result = self.remove(applicant_id).await;
        record("delete_by_id", &result);
        result
    }
}
