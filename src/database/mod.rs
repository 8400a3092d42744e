//! # Database Operations
//!
//! Connection handling and schema for the customer store.
//!
//! ## Key Components
//!
//! - [`connection`] - Endpoint settings and per-call connection acquisition
//! - [`schema`] - The `customers` table and the fixed statements issued against it
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use customer_service::database::ConnectionSettings;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = ConnectionSettings::new(
//!     "postgres://localhost:5432/customers",
//!     "postgres",
//!     "postgres",
//! );
//! assert!(settings.health_check().await?);
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod schema;

pub use connection::{release, ConnectionSettings};
