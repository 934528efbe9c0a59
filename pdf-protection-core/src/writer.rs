//! Seam to the document writer that performs the actual encryption

/// A document writer able to set up standard security handler encryption.
///
/// Called at most once per document, before any content is written.
pub trait EncryptionWriter {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Install encryption on the document.
    ///
    /// `None` for a password means the document has no such password.
    /// `permissions` and `encryption` are the integer masks produced by
    /// [`ProtectionConfig`](crate::encryption::ProtectionConfig).
    fn set_encryption(
        &mut self,
        user_password: Option<&[u8]>,
        owner_password: Option<&[u8]>,
        permissions: i32,
        encryption: i32,
    ) -> Result<(), Self::Error>;
}

impl<W: EncryptionWriter + ?Sized> EncryptionWriter for &mut W {
    type Error = W::Error;

    fn set_encryption(
        &mut self,
        user_password: Option<&[u8]>,
        owner_password: Option<&[u8]>,
        permissions: i32,
        encryption: i32,
    ) -> Result<(), Self::Error> {
        (**self).set_encryption(user_password, owner_password, permissions, encryption)
    }
}
