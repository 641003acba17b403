//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum_test::TestServer;
use fake::{faker::internet::en::SafeEmail, Fake};
use serde_json::{json, Value};

use applicant_service::application::services::ApplicantService;
use applicant_service::config::Settings;
use applicant_service::infrastructure::repositories::InMemoryApplicantRepository;
use applicant_service::startup::{build_router, AppState};

/// Test application backed by the in-memory store
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<InMemoryApplicantRepository>,
}

impl TestApp {
    /// Full router over a fresh, empty store
    pub fn new() -> Self {
        let store = Arc::new(InMemoryApplicantRepository::new());
        let state = AppState::new(store.clone());
        Self {
            server: test_server(state),
            store,
        }
    }

    /// Full router with the given service in front of an empty store
    pub fn with_service(applicants: impl ApplicantService + 'static) -> Self {
        let store = Arc::new(InMemoryApplicantRepository::new());
        let state = AppState {
            applicants: Arc::new(applicants),
            store: store.clone(),
        };
        Self {
            server: test_server(state),
            store,
        }
    }

    /// Create an applicant and return its id
    pub async fn create(&self, last_name: &str, email: &str) -> i64 {
        let response = self
            .server
            .post("/applicants")
            .json(&applicant_body(last_name, email))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body: Value = response.json();
        body["applicantId"].as_i64().unwrap()
    }
}

/// Full router with trace and CORS layers over the given state
pub fn test_server(state: AppState) -> TestServer {
    let settings = Settings::defaults().unwrap();
    TestServer::new(build_router(state, &settings)).unwrap()
}

/// Minimal valid create request body
pub fn applicant_body(last_name: &str, email: &str) -> Value {
    json!({
        "person": {
            "personName": { "lastName": last_name }
        },
        "contactPoint": {
            "electronicAddress": { "email": email }
        }
    })
}

/// Generate a unique test email
pub fn unique_email() -> String {
    let email: String = SafeEmail().fake();
    let (local, domain) = email.split_once('@').unwrap();
    format!("{}.{}@{}", local, unique_suffix(), domain)
}

fn unique_suffix() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};
    static NEXT: AtomicU64 = AtomicU64::new(1);
    NEXT.fetch_add(1, Ordering::Relaxed)
}
