//! REST API endpoint tests

mod applicant_tests;
