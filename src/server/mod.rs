//! Server-side backend and business logic.
//!
//! # Architecture
//!
//! The backend follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, input validation, DTO conversion
//! - **Service Layer** (`service/`) - Business logic, including order enrichment and the
//!   HTTP client for the member and book services
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application and enrichment error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared application state (DB pool, upstream client)
//! - **Startup** (`startup`) - Tracing, database, HTTP client and server setup
//! - **Router** (`router`) - Axum route configuration per service
//! - **Docs** (`docs`) - OpenAPI documents per service
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** validates the identifier or payload, calls the service
//! 3. **Service** executes business logic, orchestrates data operations and upstream calls
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
mod test;
