pub mod catalog;
pub mod processor;
pub mod store;
