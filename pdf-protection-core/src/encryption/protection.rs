//! Document protection settings

use std::collections::BTreeSet;
use std::fmt;

use super::flags::EncryptionBits;
use super::mask::{all_permissions_mask, permissions_mask};
use super::registry::{canonical_permission_name, find_encryption_type, find_flag, PERMISSIONS};
use super::request::{EncryptionRequest, Redacted};
use crate::error::{ProtectionError, Result};
use crate::writer::EncryptionWriter;

/// Protection requested for a document: permissions, algorithm and passwords.
///
/// Built from external configuration, checked once with [`validate`](Self::validate),
/// then only read while the document is written.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ProtectionConfig {
    /// Granted permissions. `None` grants every known permission.
    permissions: Option<BTreeSet<String>>,
    /// Encrypt the metadata stream along with the content
    encrypt_meta_data: bool,
    /// Encryption algorithm name
    encryption_type: Option<String>,
    user_password: Option<String>,
    owner_password: Option<String>,
}

impl ProtectionConfig {
    /// Settings that request no protection at all
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_permissions(Some(permissions.into_iter().map(Into::into).collect()));
        self
    }

    pub fn with_encryption_type(mut self, encryption_type: impl Into<String>) -> Self {
        self.encryption_type = Some(encryption_type.into());
        self
    }

    pub fn with_encrypt_meta_data(mut self, encrypt: bool) -> Self {
        self.encrypt_meta_data = encrypt;
        self
    }

    pub fn with_user_password(mut self, password: impl Into<String>) -> Self {
        self.user_password = Some(password.into());
        self
    }

    pub fn with_owner_password(mut self, password: impl Into<String>) -> Self {
        self.owner_password = Some(password.into());
        self
    }

    pub fn permissions(&self) -> Option<&BTreeSet<String>> {
        self.permissions.as_ref()
    }

    pub fn set_permissions(&mut self, permissions: Option<BTreeSet<String>>) -> &mut Self {
        self.permissions = permissions;
        self
    }

    pub fn encrypt_meta_data(&self) -> bool {
        self.encrypt_meta_data
    }

    pub fn set_encrypt_meta_data(&mut self, encrypt: bool) -> &mut Self {
        self.encrypt_meta_data = encrypt;
        self
    }

    pub fn encryption_type(&self) -> Option<&str> {
        self.encryption_type.as_deref()
    }

    pub fn set_encryption_type(&mut self, encryption_type: Option<String>) -> &mut Self {
        self.encryption_type = encryption_type;
        self
    }

    pub fn user_password(&self) -> Option<&str> {
        self.user_password.as_deref()
    }

    pub fn set_user_password(&mut self, password: Option<String>) -> &mut Self {
        self.user_password = password;
        self
    }

    pub fn owner_password(&self) -> Option<&str> {
        self.owner_password.as_deref()
    }

    pub fn set_owner_password(&mut self, password: Option<String>) -> &mut Self {
        self.owner_password = password;
        self
    }

    /// Permission mask: the listed permissions, or all of them when none are listed
    pub fn permissions_mask(&self) -> i32 {
        match &self.permissions {
            Some(names) => permissions_mask(names),
            None => all_permissions_mask(),
        }
    }

    /// Encryption mask: the selected algorithm, plus the metadata opt-out
    /// bit when metadata stays unencrypted.
    pub fn encryption_mask(&self) -> i32 {
        let mut mask = self
            .encryption_type
            .as_deref()
            .and_then(find_encryption_type)
            .map_or(0, |flag| flag.value());

        if !self.encrypt_meta_data {
            mask |= EncryptionBits::DO_NOT_ENCRYPT_METADATA.bits();
        }

        mask
    }

    /// Reject names missing from the registry.
    ///
    /// The encryption type is checked first, then permissions in sorted order.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.encryption_type {
            if find_encryption_type(name).is_none() {
                tracing::debug!("unknown encryption type '{}'", name);
                return Err(ProtectionError::invalid("encryptionType", name.as_str()));
            }
        }

        if let Some(names) = &self.permissions {
            for name in names {
                if find_flag(name, &PERMISSIONS).is_some() {
                    continue;
                }
                match canonical_permission_name(name) {
                    Some(canonical) => tracing::warn!(
                        "permission name '{}' is deprecated, use '{}' instead",
                        name,
                        canonical
                    ),
                    None => {
                        tracing::debug!("unknown permission '{}'", name);
                        return Err(ProtectionError::invalid("permissions", name.as_str()));
                    }
                }
            }
        }

        Ok(())
    }

    /// Validate, handing the settings back on success
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// True when a password or an explicit permission list is set
    pub fn is_encryption_requested(&self) -> bool {
        self.user_password.is_some() || self.owner_password.is_some() || self.permissions.is_some()
    }

    /// Writer arguments, or `None` when no encryption was requested
    pub fn encryption_request(&self) -> Option<EncryptionRequest> {
        if !self.is_encryption_requested() {
            return None;
        }

        Some(EncryptionRequest {
            user_password: self.user_password.as_ref().map(|p| p.as_bytes().to_vec()),
            owner_password: self.owner_password.as_ref().map(|p| p.as_bytes().to_vec()),
            permissions: self.permissions_mask(),
            encryption: self.encryption_mask(),
        })
    }

    /// Set up encryption on `writer` if any was requested.
    pub fn configure<W: EncryptionWriter>(&self, writer: &mut W) -> Result<()> {
        match self.encryption_request() {
            Some(request) => request.apply(writer),
            None => {
                tracing::debug!("no protection requested, leaving document unencrypted");
                Ok(())
            }
        }
    }
}

impl fmt::Debug for ProtectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtectionConfig")
            .field("permissions", &self.permissions)
            .field("encrypt_meta_data", &self.encrypt_meta_data)
            .field("encryption_type", &self.encryption_type)
            .field("user_password", &Redacted(&self.user_password))
            .field("owner_password", &Redacted(&self.owner_password))
            .finish()
    }
}
