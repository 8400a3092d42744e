//! # Singleton PostgreSQL Container
//!
//! One container per test process, started by the first caller and reused by
//! every test after it. Each test gets its own runtime under `#[tokio::test]`,
//! so only the connection details are handed out; the container handle itself
//! is parked for the life of the process and force-removed at exit.

use super::postgres_container::{ConnectionDetails, PostgresContainer};
use crate::error::Result;
use std::process::{Command, Stdio};
use std::sync::OnceLock;
use testcontainers_modules::postgres::Postgres;
use testcontainers_modules::testcontainers::ContainerAsync;
use tokio::sync::OnceCell;

struct SharedPostgres {
    details: ConnectionDetails,
    _container: ContainerAsync<Postgres>,
}

static SHARED_POSTGRES: OnceCell<SharedPostgres> = OnceCell::const_new();
static SHARED_CONTAINER_ID: OnceLock<String> = OnceLock::new();

/// Connection details of the process-wide PostgreSQL container, starting it
/// on first use. Concurrent first callers wait for the same startup.
pub async fn shared_postgres() -> Result<&'static ConnectionDetails> {
    let shared = SHARED_POSTGRES
        .get_or_try_init(|| async {
            let running = PostgresContainer::new().start().await?;
            let (container, details) = running.into_parts();
            let _ = SHARED_CONTAINER_ID.set(container.id().to_string());
            tracing::info!(
                container_id = %container.id(),
                "Shared PostgreSQL container started"
            );
            Ok::<_, crate::error::CustomerServiceError>(SharedPostgres {
                details,
                _container: container,
            })
        })
        .await?;

    Ok(&shared.details)
}

// Statics are never dropped, so the container's own cleanup never runs.
#[ctor::dtor]
fn remove_shared_postgres() {
    if let Some(id) = SHARED_CONTAINER_ID.get() {
        let _ = Command::new("docker")
            .args(["rm", "--force", "--volumes", id])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
    }
}
