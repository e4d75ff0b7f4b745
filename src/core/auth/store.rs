use crate::errors::AppResult;

/// Durable single-slot storage for the serialized session snapshot.
///
/// Implementations report failures as `AppError::PersistenceUnavailable`;
/// the session manager downgrades them to "no session".
pub trait SessionStore {
    fn load(&self) -> AppResult<Option<String>>;
    fn save(&self, snapshot: &str) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn load(&self) -> AppResult<Option<String>> {
        (**self).load()
    }

    fn save(&self, snapshot: &str) -> AppResult<()> {
        (**self).save(snapshot)
    }

    fn clear(&self) -> AppResult<()> {
        (**self).clear()
    }
}
