//! Scenarios shared by every container lifecycle style.

#![allow(dead_code)]

use customer_service::{Customer, CustomerService, CustomerServiceError};
use sqlx::Row;

pub fn init_logging() {
    customer_service::logging::init_structured_logging();
}

pub async fn should_create_customer(service: &CustomerService) -> anyhow::Result<()> {
    service.create_customer(&Customer::new(1, "George")).await?;

    let customer = service.get_customer(1).await?;
    assert!(customer.is_some());
    let customer = customer.unwrap();
    assert_eq!(customer.id, 1);
    assert_eq!(customer.name, "George");
    Ok(())
}

pub async fn should_get_customers(service: &CustomerService) -> anyhow::Result<()> {
    service.create_customer(&Customer::new(1, "George")).await?;
    service.create_customer(&Customer::new(2, "John")).await?;

    let customers = service.get_all_customers().await?;
    assert_eq!(customers.len(), 2);
    assert_eq!(
        customers,
        vec![Customer::new(1, "George"), Customer::new(2, "John")]
    );
    Ok(())
}

pub async fn should_delete_all_customers(service: &CustomerService) -> anyhow::Result<()> {
    service.create_customer(&Customer::new(1, "George")).await?;
    service.create_customer(&Customer::new(2, "John")).await?;

    let deleted = service.delete_all_customers().await?;
    assert_eq!(deleted, 2);
    assert!(service.get_all_customers().await?.is_empty());
    Ok(())
}

pub async fn should_return_none_for_missing_customer(
    service: &CustomerService,
) -> anyhow::Result<()> {
    assert_eq!(service.get_customer(404).await?, None);
    Ok(())
}

pub async fn should_reject_duplicate_id(service: &CustomerService) -> anyhow::Result<()> {
    service.create_customer(&Customer::new(7, "George")).await?;

    let result = service.create_customer(&Customer::new(7, "Someone Else")).await;
    match result {
        Err(error @ CustomerServiceError::Database { .. }) => {
            assert!(error.is_unique_violation(), "unexpected error: {error}");
        }
        other => panic!("expected a unique violation, got {other:?}"),
    }

    // The original row is untouched
    assert_eq!(
        service.get_customer(7).await?,
        Some(Customer::new(7, "George"))
    );
    Ok(())
}

/// Number of `customers` tables visible in the service's database
pub async fn customers_table_count(service: &CustomerService) -> anyhow::Result<i64> {
    let mut conn = service.settings().connect().await?;
    let row = sqlx::query(
        "SELECT COUNT(*) AS count FROM information_schema.tables \
         WHERE table_name = 'customers' AND table_schema = 'public'",
    )
    .fetch_one(&mut conn)
    .await?;
    customer_service::database::release(conn).await;
    Ok(row.get("count"))
}
