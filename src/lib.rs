//! # Applicant Service Library
//!
//! A small REST service that registers job applicants and looks them up
//! by email or by id:
//! - RESTful HTTP API endpoints under `/applicants`
//! - PostgreSQL or in-process storage
//! - Health probes and Prometheus metrics
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The applicant record and the repository trait
//! - **Application Layer**: Lifecycle rules and request DTOs
//! - **Infrastructure Layer**: Database, storage and metrics implementations
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! applicant_service/
//! +-- config/         Configuration management
//! +-- domain/         Applicant entity and repository trait
//! +-- application/    Applicant service and DTOs
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
