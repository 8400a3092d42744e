//! Singleton lifecycle: every test in this binary shares one container. Tests
//! run concurrently, so each one works in a database of its own on the shared
//! server.

mod common;

use customer_service::test_helpers::{shared_postgres, ConnectionDetails};
use customer_service::CustomerService;

/// Create a dedicated database on the shared server and return a service for it
async fn isolated_service(database: &str) -> anyhow::Result<CustomerService> {
    common::init_logging();
    let shared = shared_postgres().await?;

    let mut conn = shared.settings().connect().await?;
    sqlx::query(&format!("CREATE DATABASE {database}"))
        .execute(&mut conn)
        .await?;
    customer_service::database::release(conn).await;

    let details = ConnectionDetails {
        database: database.to_string(),
        ..shared.clone()
    };
    Ok(details.customer_service().await?)
}

#[tokio::test]
#[ignore] // Only run when Docker is available
async fn should_create_customer() -> anyhow::Result<()> {
    let service = isolated_service("singleton_create").await?;
    common::should_create_customer(&service).await
}

#[tokio::test]
#[ignore] // Only run when Docker is available
async fn should_get_customers() -> anyhow::Result<()> {
    let service = isolated_service("singleton_list").await?;
    common::should_get_customers(&service).await
}

#[tokio::test]
#[ignore] // Only run when Docker is available
async fn should_delete_all_customers() -> anyhow::Result<()> {
    let service = isolated_service("singleton_delete").await?;
    common::should_delete_all_customers(&service).await
}

#[tokio::test]
#[ignore] // Only run when Docker is available
async fn table_creation_is_idempotent() -> anyhow::Result<()> {
    let service = isolated_service("singleton_idempotent").await?;
    let again = CustomerService::from_settings(service.settings().clone()).await?;

    assert_eq!(common::customers_table_count(&again).await?, 1);
    Ok(())
}

#[tokio::test]
#[ignore] // Only run when Docker is available
async fn container_is_started_once() -> anyhow::Result<()> {
    common::init_logging();
    let first = shared_postgres().await?;
    let second = shared_postgres().await?;

    assert!(std::ptr::eq(first, second));
    Ok(())
}
