//! Schema and statements for the `customers` table.

pub const CUSTOMERS_TABLE: &str = "customers";

pub const CREATE_CUSTOMERS_TABLE: &str = r#"
    create table if not exists customers (
        id bigint not null,
        name varchar not null,
        primary key (id)
    )
"#;

pub const INSERT_CUSTOMER: &str = "insert into customers(id, name) values($1, $2)";

pub const SELECT_ALL_CUSTOMERS: &str = "select id, name from customers order by id";

pub const SELECT_CUSTOMER_BY_ID: &str = "select id, name from customers where id = $1";

pub const DELETE_ALL_CUSTOMERS: &str = "delete from customers";
