pub mod booking;
pub mod catalog;
pub mod currency;
pub mod dining;
pub mod filter;
pub mod search;
pub mod transport;
