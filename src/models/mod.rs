pub mod customer;

// Re-export core models for easy access
pub use customer::Customer;
