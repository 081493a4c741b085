mod seed;
pub mod static_catalog;
