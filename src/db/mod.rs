pub mod identities;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod reports;
pub mod slot;
pub mod stats;
pub mod time_state;
