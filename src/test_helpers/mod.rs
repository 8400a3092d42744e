// Test Helpers Module - Container-backed integration testing infrastructure
//
// Starts disposable PostgreSQL containers for the customer service tests in
// three lifecycle styles: explicit start/stop, scoped to a guard value, and a
// process-wide singleton.

pub mod testcontainers;

pub use self::testcontainers::{
    docker_available, shared_postgres, ConnectionDetails, PostgresContainer, RunningPostgres,
};
