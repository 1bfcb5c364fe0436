pub mod customer;
pub mod delivery;
pub mod metrics;
pub mod order;
pub mod profile;
pub mod transaction;
