pub mod catalog;
pub mod draft_store;
pub mod processor;
