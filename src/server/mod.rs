//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: startup and configuration, the HTTP
//! API, business logic and data access. The backend uses Axum as the web framework
//! and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Request and startup error types
//! - **Middleware** (`middleware/`) - Bearer authentication, security headers, CORS and rate limiting
//!
//! # Infrastructure
//!
//! - **Configuration** (`config/`) - Profile resolution from an environment snapshot
//! - **Gate** (`gate`) - Refuses production startup with missing settings
//! - **Extensions** (`extension/`) - Database, tokens, password hashing, rate limiter and migrations
//! - **Observability** (`observability/`) - Rotating file logs and error reporting
//! - **State** (`state`) - Shared application state
//! - **Router** (`router`) - Route composition and API documentation
//! - **Startup** (`startup`) - Bootstrap sequence and serving
//!
//! # Request Flow
//!
//! 1. **Router** normalizes the path and applies security headers, CORS and rate limiting
//! 2. **Controller** authenticates the caller, converts DTOs to params, calls service
//! 3. **Service** validates and executes business logic
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extension;
pub mod gate;
pub mod middleware;
pub mod model;
pub mod observability;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

#[cfg(test)]
mod test;
