#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Customer Service
//!
//! A small PostgreSQL-backed customer store, plus the container helpers used to
//! test it against a real database.
//!
//! ## Overview
//!
//! [`CustomerService`] issues four fixed statements against a `customers`
//! table (create-if-not-exists, insert, select, delete-all). Every call opens
//! its own connection and closes it before returning.
//!
//! The interesting part is the test side: [`test_helpers`] starts a disposable
//! PostgreSQL server with `testcontainers` and shows three ways to manage its
//! lifetime:
//!
//! - **Explicit callbacks**: start before the scenarios, `stop()` after them
//! - **Scoped**: the container lives as long as a guard value
//! - **Singleton**: one container shared by every test in the process
//!
//! ## Module Organization
//!
//! - [`models`] - The `Customer` record
//! - [`database`] - Connection settings and schema
//! - [`services`] - The data-access service
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging
//! - [`test_helpers`] - testcontainers integration (feature `test-helpers`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use customer_service::{Customer, CustomerService};
//!
//! # async fn example() -> customer_service::Result<()> {
//! let service =
//!     CustomerService::new("postgres://localhost:5432/customers", "postgres", "postgres").await?;
//!
//! service.create_customer(&Customer::new(1, "George")).await?;
//! let george = service.get_customer(1).await?;
//! assert_eq!(george, Some(Customer::new(1, "George")));
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test                 # Unit tests, no Docker needed
//! cargo test -- --ignored    # Container-backed integration tests
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use config::DatabaseConfig;
pub use database::ConnectionSettings;
pub use error::{CustomerServiceError, Result};
pub use models::Customer;
pub use services::CustomerService;
