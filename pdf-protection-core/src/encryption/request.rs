//! Parameters handed to the document writer

use std::fmt;

use crate::error::{ProtectionError, Result};
use crate::writer::EncryptionWriter;

/// Arguments of a single [`EncryptionWriter::set_encryption`] call
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptionRequest {
    /// UTF-8 bytes of the user password, `None` when there is none
    pub user_password: Option<Vec<u8>>,
    /// UTF-8 bytes of the owner password, `None` when there is none
    pub owner_password: Option<Vec<u8>>,
    /// Permission mask
    pub permissions: i32,
    /// Encryption mask
    pub encryption: i32,
}

impl EncryptionRequest {
    /// Hand the request to `writer`. Failures are not retried.
    pub fn apply<W: EncryptionWriter>(&self, writer: &mut W) -> Result<()> {
        tracing::debug!(
            permissions = self.permissions,
            encryption = self.encryption,
            user_password = self.user_password.is_some(),
            owner_password = self.owner_password.is_some(),
            "setting document encryption"
        );
        writer
            .set_encryption(
                self.user_password.as_deref(),
                self.owner_password.as_deref(),
                self.permissions,
                self.encryption,
            )
            .map_err(|e| ProtectionError::DocumentEncryption(Box::new(e)))
    }
}

/// Debug view of an optional secret showing only whether it is set
pub(crate) struct Redacted<'a, T>(pub(crate) &'a Option<T>);

impl<T> fmt::Debug for Redacted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Some(<redacted>)"),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Debug for EncryptionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionRequest")
            .field("user_password", &Redacted(&self.user_password))
            .field("owner_password", &Redacted(&self.owner_password))
            .field("permissions", &self.permissions)
            .field("encryption", &self.encryption)
            .finish()
    }
}
