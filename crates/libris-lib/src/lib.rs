pub mod action;
pub mod alert;
pub mod catalogue;
pub mod config;
pub mod cookie;
pub mod error;
pub mod format;
pub mod models;
pub mod page;
pub mod payment;

/// Version of the controller, reported once at start-up
pub static LIB_VERSION: &str = env!("CARGO_PKG_VERSION");
