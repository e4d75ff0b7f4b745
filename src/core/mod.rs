pub mod auth;
pub mod clock;
pub mod config;
pub mod employees;
pub mod log;
pub mod reports;
pub mod session;
pub mod sink;
pub mod tracker;
