//! Name tables for permissions and encryption algorithms
//!
//! Configuration refers to permissions and algorithms by name. These tables
//! map each name to its bit value. Lookups ignore ASCII case.

use super::flags::{EncryptionBits, PermissionBits, STANDARD_ENCRYPTION_40};

/// A configuration name paired with the bits it contributes to a mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedFlag {
    name: &'static str,
    value: i32,
}

impl NamedFlag {
    const fn new(name: &'static str, value: i32) -> Self {
        Self { name, value }
    }

    /// Canonical configuration name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Bits contributed to the mask
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Check whether `name` refers to this flag, ignoring ASCII case
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Document permissions
pub static PERMISSIONS: [NamedFlag; 8] = [
    NamedFlag::new("assembly", PermissionBits::ASSEMBLY.bits()),
    NamedFlag::new("copy", PermissionBits::COPY.bits()),
    NamedFlag::new("degradedPrinting", PermissionBits::DEGRADED_PRINTING.bits()),
    NamedFlag::new("fillIn", PermissionBits::FILL_IN.bits()),
    NamedFlag::new(
        "modifyAnnotations",
        PermissionBits::MODIFY_ANNOTATIONS.bits(),
    ),
    NamedFlag::new("modifyContents", PermissionBits::MODIFY_CONTENTS.bits()),
    NamedFlag::new("printing", PermissionBits::PRINTING.bits()),
    NamedFlag::new("screenReaders", PermissionBits::SCREEN_READERS.bits()),
];

/// Encryption algorithms
pub static ENCRYPTION_TYPES: [NamedFlag; 3] = [
    NamedFlag::new("standardEncryption40", STANDARD_ENCRYPTION_40),
    NamedFlag::new(
        "standardEncryption128",
        EncryptionBits::STANDARD_ENCRYPTION_128.bits(),
    ),
    NamedFlag::new(
        "encryptionAES128",
        EncryptionBits::ENCRYPTION_AES_128.bits(),
    ),
];

/// Legacy permission spellings still accepted in configuration, as
/// `(legacy, canonical)` pairs.
pub static PERMISSION_ALIASES: [(&str, &str); 1] = [("modifyContebts", "modifyContents")];

/// Find the entry of `table` whose name matches `name`, ignoring ASCII case.
pub fn find_flag<'a>(name: &str, table: &'a [NamedFlag]) -> Option<&'a NamedFlag> {
    table.iter().find(|flag| flag.matches(name))
}

/// Canonical name for a legacy permission spelling, ignoring ASCII case.
pub fn canonical_permission_name(legacy: &str) -> Option<&'static str> {
    PERMISSION_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(legacy))
        .map(|&(_, canonical)| canonical)
}

/// Find a permission by name, resolving legacy spellings.
pub fn find_permission(name: &str) -> Option<&'static NamedFlag> {
    match find_flag(name, &PERMISSIONS) {
        Some(flag) => Some(flag),
        None => find_flag(canonical_permission_name(name)?, &PERMISSIONS),
    }
}

/// Find an encryption algorithm by name.
pub fn find_encryption_type(name: &str) -> Option<&'static NamedFlag> {
    find_flag(name, &ENCRYPTION_TYPES)
}

/// Canonical permission names in table order
pub fn permission_names() -> impl Iterator<Item = &'static str> {
    PERMISSIONS.iter().map(NamedFlag::name)
}

/// Canonical encryption algorithm names in table order
pub fn encryption_type_names() -> impl Iterator<Item = &'static str> {
    ENCRYPTION_TYPES.iter().map(NamedFlag::name)
}
