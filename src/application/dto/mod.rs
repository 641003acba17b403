//! Data Transfer Objects
//!
//! DTOs for API request serialization. Responses use the domain
//! `Applicant` directly.

pub mod request;

pub use request::{
    ContactPointRequest, CreateApplicantRequest, ElectronicAddressRequest, EmailQuery,
    PersonNameRequest, PersonRequest,
};
