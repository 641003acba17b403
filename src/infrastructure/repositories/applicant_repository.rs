//! Applicant Repository Implementation
//!
//! PostgreSQL implementation of the ApplicantRepository trait.
//! Maps between the flat `applicants` table and the nested domain Applicant.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{
    Applicant, ApplicantRepository, ContactPoint, ElectronicAddress, Person, PersonName,
};
use crate::shared::error::AppError;

/// Database row representation matching the applicants table schema.
#[derive(Debug, sqlx::FromRow)]
struct ApplicantRow {
    applicant_id: i64,
    first_name: Option<String>,
    last_name: String,
    middle_name: Option<String>,
    email: String,
}

impl ApplicantRow {
    /// Convert database row to domain Applicant entity.
    fn into_applicant(self) -> Applicant {
        Applicant {
            applicant_id: Some(self.applicant_id),
            person: Person {
                person_name: PersonName {
                    first_name: self.first_name,
                    last_name: self.last_name,
                    middle_name: self.middle_name,
                },
            },
            contact_point: ContactPoint {
                electronic_address: ElectronicAddress { email: self.email },
            },
        }
    }
}

fn map_write_error(e: sqlx::Error, email: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(format!("Applicant with email {} already exists", email))
        }
        _ => AppError::Database(e),
    }
}

/// PostgreSQL applicant repository implementation.
///
/// Uniqueness of `email` is enforced by the `applicants_email_key` constraint.
#[derive(Clone)]
pub struct PgApplicantRepository {
    pool: PgPool,
}

impl PgApplicantRepository {
    /// Create a new PgApplicantRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, applicant: &Applicant) -> Result<Applicant, AppError> {
        let name = &applicant.person.person_name;
        let row = sqlx::query_as::<_, ApplicantRow>(
            r#"
            INSERT INTO applicants (first_name, last_name, middle_name, email)
            VALUES ($1, $2, $3, $4)
            RETURNING applicant_id, first_name, last_name, middle_name, email
            "#,
        )
        .bind(&name.first_name)
        .bind(&name.last_name)
        .bind(&name.middle_name)
        .bind(applicant.email())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, applicant.email()))?;

        Ok(row.into_applicant())
    }

    async fn update(&self, applicant_id: i64, applicant: &Applicant) -> Result<Applicant, AppError> {
        let name = &applicant.person.person_name;
        let row = sqlx::query_as::<_, ApplicantRow>(
            r#"
            UPDATE applicants
            SET first_name = $2,
                last_name = $3,
                middle_name = $4,
                email = $5
            WHERE applicant_id = $1
            RETURNING applicant_id, first_name, last_name, middle_name, email
            "#,
        )
        .bind(applicant_id)
        .bind(&name.first_name)
        .bind(&name.last_name)
        .bind(&name.middle_name)
        .bind(applicant.email())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, applicant.email()))?
        .ok_or_else(|| AppError::NotFound(format!("Applicant with id {} not found", applicant_id)))?;

        Ok(row.into_applicant())
    }
}

#[async_trait]
impl ApplicantRepository for PgApplicantRepository {
    async fn find_by_id(&self, applicant_id: i64) -> Result<Option<Applicant>, AppError> {
        let row = sqlx::query_as::<_, ApplicantRow>(
            r#"
            SELECT applicant_id, first_name, last_name, middle_name, email
            FROM applicants
            WHERE applicant_id = $1
            "#,
        )
        .bind(applicant_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ApplicantRow::into_applicant))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Applicant>, AppError> {
        let row = sqlx::query_as::<_, ApplicantRow>(
            r#"
            SELECT applicant_id, first_name, last_name, middle_name, email
            FROM applicants
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ApplicantRow::into_applicant))
    }

    async fn save(&self, applicant: &Applicant) -> Result<Applicant, AppError> {
        match applicant.applicant_id {
            Some(applicant_id) => self.update(applicant_id, applicant).await,
            None => self.insert(applicant).await,
        }
    }

    async fn delete_by_id(&self, applicant_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM applicants WHERE applicant_id = $1")
            .bind(applicant_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Applicant with id {} not found",
                applicant_id
            )));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
