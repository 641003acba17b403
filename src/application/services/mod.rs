//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ApplicantService**: Applicant registration, lookup and removal

pub mod applicant_service;

// Re-export applicant service types
pub use applicant_service::{ApplicantError, ApplicantKey, ApplicantService, ApplicantServiceImpl};
