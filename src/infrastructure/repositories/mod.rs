//! Repository Implementations
//!
//! Implementations of the domain `ApplicantRepository` trait.
//!
//! - **PgApplicantRepository** - PostgreSQL, email uniqueness by constraint
//! - **InMemoryApplicantRepository** - process-local, for development and tests
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::PgApplicantRepository;
//!
//! fn setup_repositories(pool: PgPool) {
//!     let applicant_repo = PgApplicantRepository::new(pool);
//! }
//! ```

pub mod applicant_repository;
pub mod memory_repository;

pub use applicant_repository::PgApplicantRepository;
pub use memory_repository::InMemoryApplicantRepository;
