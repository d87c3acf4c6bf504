//! Library management HTTP backend.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation and not-found mapping
//! - **Data Layer** (`data/`) - `LibraryContext` unit of work and repositories over it
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - `appsettings.json` and environment configuration
//! - **Factory** (`factory`) - Design-time `LibraryContext` construction for schema tooling
//! - **State** (`state`) - Shared connection pool and the per-request context extractor
//! - **Startup** (`startup`) - Database connection, migrations and shutdown handling
//! - **Router** (`router`) - Route table, OpenAPI document and middleware
//!
//! # Request Flow
//!
//! 1. **Router** matches the request and the extractor builds a fresh `LibraryContext`
//! 2. **Controller** converts the DTO to params and calls the service
//! 3. **Service** validates, then calls the repository
//! 4. **Data** queries or stages changes on the context and calls `save_changes`
//! 5. **Controller** converts the domain model to a DTO and picks the status code

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod factory;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
