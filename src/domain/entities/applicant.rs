//! Applicant entity and repository trait.
//!
//! Maps to the `applicants` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A bank applicant.
///
/// Maps to the `applicants` table:
/// - applicant_id: BIGSERIAL PRIMARY KEY
/// - first_name: TEXT NULL
/// - last_name: TEXT NOT NULL
/// - middle_name: TEXT NULL
/// - email: TEXT NOT NULL UNIQUE
///
/// `applicant_id` is `None` until the store has persisted the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub applicant_id: Option<i64>,
    pub person: Person,
    pub contact_point: ContactPoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub person_name: PersonName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub first_name: Option<String>,
    pub last_name: String,
    pub middle_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    pub electronic_address: ElectronicAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicAddress {
    pub email: String,
}

impl Applicant {
    /// Create a transient applicant with only the required fields.
    pub fn new(last_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            applicant_id: None,
            person: Person {
                person_name: PersonName {
                    first_name: None,
                    last_name: last_name.into(),
                    middle_name: None,
                },
            },
            contact_point: ContactPoint {
                electronic_address: ElectronicAddress {
                    email: email.into(),
                },
            },
        }
    }

    /// The business key.
    pub fn email(&self) -> &str {
        &self.contact_point.electronic_address.email
    }

    /// Same record carrying the given id.
    pub fn with_id(mut self, applicant_id: i64) -> Self {
        self.applicant_id = Some(applicant_id);
        self
    }

    /// Same record with the id cleared.
    pub fn without_id(mut self) -> Self {
        self.applicant_id = None;
        self
    }
}

/// Repository trait for Applicant data access operations.
///
/// Implementations must keep at most one record per email: a write that
/// would duplicate an email fails with `AppError::Conflict`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicantRepository: Send + Sync {
    /// Find an applicant by id.
    async fn find_by_id(&self, applicant_id: i64) -> Result<Option<Applicant>, AppError>;

    /// Find an applicant by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<Applicant>, AppError>;

    /// Insert a transient applicant, or update the stored one when it carries an id.
    /// Returns the stored record with its id.
    ///
    /// `ApplicantService` always clears the id, so only the store tests reach the
    /// update path.
    async fn save(&self, applicant: &Applicant) -> Result<Applicant, AppError>;

    /// Delete an applicant by id. Fails with `AppError::NotFound` if nothing was removed.
    async fn delete_by_id(&self, applicant_id: i64) -> Result<(), AppError>;

    /// Round-trip to the backing store.
    async fn ping(&self) -> Result<(), AppError>;
}
