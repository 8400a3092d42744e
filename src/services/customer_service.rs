//! # Customer Service
//!
//! Thin data-access layer over the `customers` table. Each operation opens its
//! own connection, issues exactly one statement and closes the connection
//! before returning, whether the statement succeeded or not.

use crate::config::DatabaseConfig;
use crate::database::schema::{
    CREATE_CUSTOMERS_TABLE, CUSTOMERS_TABLE, DELETE_ALL_CUSTOMERS, INSERT_CUSTOMER,
    SELECT_ALL_CUSTOMERS, SELECT_CUSTOMER_BY_ID,
};
use crate::database::{release, ConnectionSettings};
use crate::error::{CustomerServiceError, Result};
use crate::logging::{log_database_operation, log_error};
use crate::models::Customer;
use sqlx::postgres::PgConnection;
use std::time::Instant;
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct CustomerService {
    settings: ConnectionSettings,
}

impl CustomerService {
    /// Create a service for the given endpoint and make sure the `customers`
    /// table exists. Safe to call repeatedly against the same database.
    pub async fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::from_settings(ConnectionSettings::new(url, username, password)).await
    }

    pub async fn from_config(config: &DatabaseConfig) -> Result<Self> {
        config.validate()?;
        Self::from_settings(config.settings()).await
    }

    pub async fn from_settings(settings: ConnectionSettings) -> Result<Self> {
        let service = Self { settings };
        service.create_customers_table_if_not_exists().await?;
        Ok(service)
    }

    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    #[instrument(skip(self, customer), fields(customer_id = customer.id))]
    pub async fn create_customer(&self, customer: &Customer) -> Result<()> {
        let started = Instant::now();
        let mut conn = self.open("create_customer", Some(customer.id), started).await?;

        let result = sqlx::query(INSERT_CUSTOMER)
            .bind(customer.id)
            .bind(&customer.name)
            .execute(&mut conn)
            .await;
        release(conn).await;

        let result = Self::finish("create_customer", Some(customer.id), started, result)?;
        tracing::debug!(rows_affected = result.rows_affected(), "Customer inserted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_all_customers(&self) -> Result<Vec<Customer>> {
        let started = Instant::now();
        let mut conn = self.open("get_all_customers", None, started).await?;

        let result = sqlx::query_as::<_, Customer>(SELECT_ALL_CUSTOMERS)
            .fetch_all(&mut conn)
            .await;
        release(conn).await;

        Self::finish("get_all_customers", None, started, result)
    }

    #[instrument(skip(self))]
    pub async fn get_customer(&self, customer_id: i64) -> Result<Option<Customer>> {
        let started = Instant::now();
        let mut conn = self.open("get_customer", Some(customer_id), started).await?;

        let result = sqlx::query_as::<_, Customer>(SELECT_CUSTOMER_BY_ID)
            .bind(customer_id)
            .fetch_optional(&mut conn)
            .await;
        release(conn).await;

        Self::finish("get_customer", Some(customer_id), started, result)
    }

    /// Remove every customer, returning how many rows were deleted
    #[instrument(skip(self))]
    pub async fn delete_all_customers(&self) -> Result<u64> {
        let started = Instant::now();
        let mut conn = self.open("delete_all_customers", None, started).await?;

        let result = sqlx::query(DELETE_ALL_CUSTOMERS).execute(&mut conn).await;
        release(conn).await;

        let result = Self::finish("delete_all_customers", None, started, result)?;
        Ok(result.rows_affected())
    }

    async fn create_customers_table_if_not_exists(&self) -> Result<()> {
        let started = Instant::now();
        let mut conn = self.open("create_customers_table", None, started).await?;

        let result = sqlx::query(CREATE_CUSTOMERS_TABLE).execute(&mut conn).await;
        release(conn).await;

        Self::finish("create_customers_table", None, started, result)?;
        Ok(())
    }

    /// Open the connection for one operation, logging a failed attempt the
    /// same way a failed statement is logged
    async fn open(
        &self,
        operation: &'static str,
        record_id: Option<i64>,
        started: Instant,
    ) -> Result<PgConnection> {
        self.settings
            .connect()
            .await
            .inspect_err(|error| Self::log_failure(operation, record_id, started, error))
    }

    /// Log the outcome of a statement and convert driver errors
    fn finish<T>(
        operation: &'static str,
        record_id: Option<i64>,
        started: Instant,
        result: std::result::Result<T, sqlx::Error>,
    ) -> Result<T> {
        match result {
            Ok(value) => {
                log_database_operation(
                    operation,
                    Some(CUSTOMERS_TABLE),
                    record_id,
                    "success",
                    elapsed_ms(started),
                    None,
                );
                Ok(value)
            }
            Err(source) => {
                let error = CustomerServiceError::database(operation, source);
                Self::log_failure(operation, record_id, started, &error);
                Err(error)
            }
        }
    }

    fn log_failure(
        operation: &'static str,
        record_id: Option<i64>,
        started: Instant,
        error: &CustomerServiceError,
    ) {
        log_error("customer_service", operation, &error.to_string(), None);
        log_database_operation(
            operation,
            Some(CUSTOMERS_TABLE),
            record_id,
            "failed",
            elapsed_ms(started),
            None,
        );
    }
}

fn elapsed_ms(started: Instant) -> Option<u64> {
    u64::try_from(started.elapsed().as_millis()).ok()
}
