pub mod budget;
pub mod transaction;
