//! Standard security handler settings for generated PDFs
//!
//! Maps permission and algorithm names from configuration onto the integer
//! masks expected by [`EncryptionWriter`](crate::writer::EncryptionWriter).

mod flags;
mod mask;
mod protection;
mod registry;
mod request;

pub use flags::{standard_security_p_value, EncryptionBits, PermissionBits, STANDARD_ENCRYPTION_40};
pub use mask::{all_permissions_mask, permissions_mask};
pub use protection::ProtectionConfig;
pub use registry::{
    canonical_permission_name, encryption_type_names, find_encryption_type, find_flag,
    find_permission, permission_names, NamedFlag, ENCRYPTION_TYPES, PERMISSIONS,
    PERMISSION_ALIASES,
};
pub use request::EncryptionRequest;
