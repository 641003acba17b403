//! Request DTOs
//!
//! Data structures for API request bodies. Every field is optional on the
//! wire so that missing parts surface as field errors instead of JSON
//! decoding failures.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::{Applicant, ContactPoint, ElectronicAddress, Person, PersonName};
use crate::shared::error::{AppError, FieldError};
use crate::shared::validation::validation_error;

/// Create applicant request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicantRequest {
    /// Ignored; the store assigns ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_id: Option<i64>,

    #[validate(required(message = "Person is required"), nested)]
    pub person: Option<PersonRequest>,

    #[validate(required(message = "Contact point is required"), nested)]
    pub contact_point: Option<ContactPointRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonRequest {
    #[validate(required(message = "Person name is required"), nested)]
    pub person_name: Option<PersonNameRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonNameRequest {
    pub first_name: Option<String>,

    #[validate(
        required(message = "Last name is required"),
        length(min = 1, message = "Last name must not be empty"),
        custom(function = "alphabetic")
    )]
    pub last_name: Option<String>,

    pub middle_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactPointRequest {
    #[validate(required(message = "Electronic address is required"), nested)]
    pub electronic_address: Option<ElectronicAddressRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicAddressRequest {
    #[validate(
        required(message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: Option<String>,
}

/// Last names are ASCII letters only.
fn alphabetic(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(ValidationError::new("alphabetic")
            .with_message(Cow::Borrowed("Last name must contain only letters")))
    }
}

impl CreateApplicantRequest {
    /// Validate and convert into a transient domain applicant.
    ///
    /// Any supplied `applicantId` is dropped.
    pub fn into_applicant(self) -> Result<Applicant, AppError> {
        self.validate().map_err(validation_error)?;

        let Some(PersonNameRequest {
            first_name,
            last_name: Some(last_name),
            middle_name,
        }) = self.person.and_then(|p| p.person_name)
        else {
            return Err(missing("person.personName.lastName"));
        };

        let Some(email) = self
            .contact_point
            .and_then(|c| c.electronic_address)
            .and_then(|e| e.email)
        else {
            return Err(missing("contactPoint.electronicAddress.email"));
        };

        Ok(Applicant {
            applicant_id: None,
            person: Person {
                person_name: PersonName {
                    first_name,
                    last_name,
                    middle_name,
                },
            },
            contact_point: ContactPoint {
                electronic_address: ElectronicAddress { email },
            },
        })
    }
}

fn missing(field: &str) -> AppError {
    AppError::Validation {
        message: format!("{}: is required", field),
        errors: vec![FieldError {
            field: field.to_string(),
            message: "is required".to_string(),
        }],
    }
}

/// Lookup query for `GET /applicants?email=...`
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}
