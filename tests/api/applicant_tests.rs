//! Applicant API Tests
//!
//! End-to-end scenarios run against the in-memory store; handler wiring is
//! checked against a mocked service.

use async_trait::async_trait;
use axum::http::{header, StatusCode};
use mockall::{mock, predicate::eq};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use applicant_service::application::services::{ApplicantError, ApplicantKey, ApplicantService};
use applicant_service::domain::Applicant;
use applicant_service::shared::error::ErrorResponse;

use crate::common::{applicant_body, unique_email, TestApp};

mock! {
    pub Applicants {}

    #[async_trait]
    impl ApplicantService for Applicants {
        async fn save(&self, applicant: Applicant) -> Result<Applicant, ApplicantError>;
        async fn get_by_email(&self, email: &str) -> Result<Applicant, ApplicantError>;
        async fn get_by_id(&self, applicant_id: i64) -> Result<Applicant, ApplicantError>;
        async fn delete_by_id(&self, applicant_id: i64) -> Result<(), ApplicantError>;
    }
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_returns_created_with_location() {
    let app = TestApp::new();
    let email = unique_email();

    let response = app
        .server
        .post("/applicants")
        .json(&applicant_body("Lastname", &email))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    let id = body["applicantId"].as_i64().unwrap();
    assert_eq!(
        response.header(header::LOCATION).to_str().unwrap(),
        format!("applicants/{}", id)
    );
    assert_eq!(body["person"]["personName"]["lastName"], "Lastname");
    assert_eq!(body["contactPoint"]["electronicAddress"]["email"], email.as_str());
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_create_keeps_optional_names() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/applicants")
        .json(&json!({
            "person": {
                "personName": {
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "middleName": "King"
                }
            },
            "contactPoint": { "electronicAddress": { "email": unique_email() } }
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["person"]["personName"]["firstName"], "Ada");
    assert_eq!(body["person"]["personName"]["middleName"], "King");
}

#[tokio::test]
async fn test_create_ignores_supplied_id() {
    let app = TestApp::new();
    let mut body = applicant_body("Lastname", &unique_email());
    body["applicantId"] = json!(999);

    let response = app.server.post("/applicants").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_ne!(created["applicantId"], json!(999));
}

#[tokio::test]
async fn test_create_duplicate_email_conflicts() {
    let app = TestApp::new();
    let email = unique_email();
    app.create("Lastname", &email).await;

    let response = app
        .server
        .post("/applicants")
        .json(&applicant_body("Othername", &email))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let error: ErrorResponse = response.json();
    assert_eq!(error.code, 10005);
    assert!(error.message.contains(&email));
    assert_eq!(app.store.len(), 1);
}

#[test_case(json!({}) ; "empty body")]
#[test_case(json!({ "contactPoint": { "electronicAddress": { "email": "a@b.com" } } }) ; "missing person")]
#[test_case(json!({ "person": { "personName": { "lastName": "Lastname" } } }) ; "missing contact point")]
#[test_case(applicant_body("", "a@b.com") ; "empty last name")]
#[test_case(applicant_body("L4stname", "a@b.com") ; "digits in last name")]
#[test_case(applicant_body("Lastname", "not-an-email") ; "malformed email")]
#[tokio::test]
async fn test_create_invalid_body_is_rejected(body: Value) {
    let app = TestApp::new();

    let response = app.server.post("/applicants").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: ErrorResponse = response.json();
    assert_eq!(error.code, 10007);
    assert!(!error.errors.unwrap_or_default().is_empty());
    assert!(app.store.is_empty());
}

#[test_case(applicant_body("L4st", "a@b.com"), "person.personName.lastName" ; "last name")]
#[test_case(json!({
    "person": { "personName": { "lastName": "Lastname" } },
    "contactPoint": { "electronicAddress": {} }
}), "contactPoint.electronicAddress.email" ; "missing email")]
#[tokio::test]
async fn test_field_errors_use_payload_paths(body: Value, field: &str) {
    let app = TestApp::new();

    let response = app.server.post("/applicants").json(&body).await;

    response.assert_status_bad_request();
    let error: ErrorResponse = response.json();
    let fields: Vec<String> = error
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(fields, vec![field.to_string()]);
}

#[tokio::test]
async fn test_create_malformed_json_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/applicants")
        .text("{\"person\": ")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: ErrorResponse = response.json();
    assert_eq!(error.code, 10002);
}

// ============================================================================
// Get by email
// ============================================================================

#[tokio::test]
async fn test_get_by_email_returns_applicant() {
    let app = TestApp::new();
    let email = unique_email();
    let id = app.create("Lastname", &email).await;

    let response = app
        .server
        .get("/applicants")
        .add_query_param("email", &email)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["applicantId"], json!(id));
    assert_eq!(body["contactPoint"]["electronicAddress"]["email"], email.as_str());
}

#[tokio::test]
async fn test_get_by_unknown_email_is_not_found() {
    let app = TestApp::new();

    let response = app
        .server
        .get("/applicants")
        .add_query_param("email", "nobody@example.com")
        .await;

    response.assert_status_not_found();
    let error: ErrorResponse = response.json();
    assert_eq!(error.code, 10001);
}

#[tokio::test]
async fn test_get_without_email_is_bad_request() {
    let app = TestApp::new();

    let response = app.server.get("/applicants").await;

    response.assert_status_bad_request();
}

// ============================================================================
// Get by id
// ============================================================================

#[tokio::test]
async fn test_get_by_id_returns_applicant() {
    let app = TestApp::new();
    let email = unique_email();
    let id = app.create("Lastname", &email).await;

    let response = app.server.get(&format!("/applicants/{}", id)).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["applicantId"], json!(id));
    assert_eq!(body["person"]["personName"]["lastName"], "Lastname");
}

#[tokio::test]
async fn test_get_by_unknown_id_is_not_found() {
    let app = TestApp::new();

    let response = app.server.get("/applicants/42").await;

    response.assert_status_not_found();
}

#[test_case("abc" ; "letters")]
#[test_case("1.5" ; "decimal")]
#[tokio::test]
async fn test_get_by_non_numeric_id_is_bad_request(id: &str) {
    let app = TestApp::new();

    let response = app.server.get(&format!("/applicants/{}", id)).await;

    response.assert_status_bad_request();
    let error: ErrorResponse = response.json();
    assert_eq!(error.code, 10002);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_then_lookups_are_not_found() {
    let app = TestApp::new();
    let email = unique_email();
    let id = app.create("Lastname", &email).await;

    let response = app.server.delete(&format!("/applicants/{}", id)).await;
    response.assert_status_ok();
    assert!(app.store.is_empty());

    app.server
        .get(&format!("/applicants/{}", id))
        .await
        .assert_status_not_found();
    app.server
        .get("/applicants")
        .add_query_param("email", &email)
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let app = TestApp::new();
    let id = app.create("Lastname", &unique_email()).await;

    app.server
        .delete(&format!("/applicants/{}", id))
        .await
        .assert_status_ok();
    app.server
        .delete(&format!("/applicants/{}", id))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_email_can_be_reused_after_delete() {
    let app = TestApp::new();
    let email = unique_email();
    let first = app.create("Lastname", &email).await;

    app.server
        .delete(&format!("/applicants/{}", first))
        .await
        .assert_status_ok();
    let second = app.create("Lastname", &email).await;

    assert_ne!(first, second);
}

// ============================================================================
// Handler wiring
// ============================================================================

#[tokio::test]
async fn test_create_passes_transient_applicant_to_service() {
    let mut service = MockApplicants::new();
    service
        .expect_save()
        .withf(|a| a.applicant_id.is_none() && a.email() == "test@test.com")
        .times(1)
        .returning(|a| Ok(a.with_id(7)));
    let app = TestApp::with_service(service);

    let mut body = applicant_body("Lastname", "test@test.com");
    body["applicantId"] = json!(3);
    let response = app.server.post("/applicants").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.header(header::LOCATION).to_str().unwrap(), "applicants/7");
}

#[tokio::test]
async fn test_invalid_body_never_reaches_service() {
    let mut service = MockApplicants::new();
    service.expect_save().never();
    let app = TestApp::with_service(service);

    let response = app
        .server
        .post("/applicants")
        .json(&applicant_body("Lastname", "test@"))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_get_by_email_passes_query_value() {
    let mut service = MockApplicants::new();
    service
        .expect_get_by_email()
        .with(eq("test@test.com"))
        .times(1)
        .returning(|email| Ok(Applicant::new("Lastname", email).with_id(1)));
    let app = TestApp::with_service(service);

    let response = app
        .server
        .get("/applicants")
        .add_query_param("email", "test@test.com")
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_delete_maps_unknown_to_not_found() {
    let mut service = MockApplicants::new();
    service
        .expect_delete_by_id()
        .with(eq(5))
        .times(1)
        .returning(|id| Err(ApplicantError::NotFound(ApplicantKey::Id(id))));
    let app = TestApp::with_service(service);

    let response = app.server.delete("/applicants/5").await;

    response.assert_status_not_found();
    let error: ErrorResponse = response.json();
    assert_eq!(error.message, "Applicant with id 5 is unknown");
}

#[tokio::test]
async fn test_internal_errors_are_masked() {
    let mut service = MockApplicants::new();
    service
        .expect_get_by_id()
        .returning(|_| Err(ApplicantError::Internal("connection reset".into())));
    let app = TestApp::with_service(service);

    let response = app.server.get("/applicants/1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorResponse = response.json();
    assert_eq!(error.message, "Internal server error");
}
