//! Session and role authorization.

pub mod directory;
pub mod gate;
pub mod manager;
pub mod secret;
pub mod store;

pub use directory::IdentityDirectory;
pub use gate::{auth_state, authorize, navigate, require_role};
pub use manager::SessionManager;
pub use store::SessionStore;
