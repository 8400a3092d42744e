use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Customer is the single entity persisted by the service
/// Maps to `customers` table
///
/// The id is assigned by the caller; uniqueness is enforced by the table's
/// primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
}

impl Customer {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_new() {
        let customer = Customer::new(1, "George");
        assert_eq!(customer.id, 1);
        assert_eq!(customer.name, "George");
    }

    #[test]
    fn test_customer_json_shape() {
        let customer = Customer::new(2, "John");
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 2, "name": "John" }));
    }
}
