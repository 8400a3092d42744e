//! # testcontainers Integration Testing Infrastructure
//!
//! Wraps the `testcontainers-modules` PostgreSQL image so tests can get a
//! [`CustomerService`](crate::services::CustomerService) wired to a fresh,
//! disposable database.
//!
//! ## Lifecycle Styles
//!
//! ### Explicit start and stop
//!
//! ```rust,no_run
//! use customer_service::test_helpers::PostgresContainer;
//!
//! # async fn example() -> customer_service::Result<()> {
//! let postgres = PostgresContainer::new().start().await?;
//! let service = postgres.customer_service().await?;
//! service.delete_all_customers().await?;
//! // ...
//! postgres.stop().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Scoped
//!
//! Dropping a [`RunningPostgres`] without calling `stop` removes the container,
//! so binding it to a local is enough to tie the container to the test body.
//!
//! ### Singleton
//!
//! [`shared_postgres`] starts one container on first use and hands the same
//! connection details to every later caller in the process.
//!
//! All container tests are `#[ignore]`d so `cargo test` passes without Docker:
//!
//! ```bash
//! cargo test -- --ignored
//! ```

pub mod postgres_container;
pub mod shared;
pub mod utils;

pub use postgres_container::{ConnectionDetails, PostgresContainer, RunningPostgres};
pub use shared::shared_postgres;
pub use utils::docker_available;

/// Default PostgreSQL image tag
pub const DEFAULT_POSTGRES_TAG: &str = "15.2-alpine";

/// Port PostgreSQL listens on inside the container
pub const POSTGRES_PORT: u16 = 5432;
