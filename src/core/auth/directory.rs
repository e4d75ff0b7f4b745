use crate::errors::AppResult;
use crate::models::identity::DirectoryEntry;

/// Read-only lookup of identities by email.
///
/// Secret comparison is not the directory's job: it hands back the stored
/// hash and the session manager verifies it.
pub trait IdentityDirectory {
    fn find_by_email(&self, email: &str) -> AppResult<Option<DirectoryEntry>>;
}

impl<T: IdentityDirectory + ?Sized> IdentityDirectory for &T {
    fn find_by_email(&self, email: &str) -> AppResult<Option<DirectoryEntry>> {
        (**self).find_by_email(email)
    }
}
