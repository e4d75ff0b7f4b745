pub mod identity;
pub mod report;
pub mod role;
pub mod route;
pub mod session;
pub mod tracker;
