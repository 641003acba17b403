//! # Domain Entities
//!
//! Core domain entities. All entities map directly to their corresponding
//! database tables.
//!
//! - **Applicant**: a bank applicant identified by email, with a person name
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod applicant;

pub use applicant::{
    Applicant, ApplicantRepository, ContactPoint, ElectronicAddress, Person, PersonName,
};

#[cfg(test)]
pub use applicant::MockApplicantRepository;
