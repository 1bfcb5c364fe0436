pub mod customers;
pub mod dashboard;
pub mod finance;
pub mod orders;
pub mod reports;
pub mod settings;
