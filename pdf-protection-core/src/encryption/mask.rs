//! Mask composition from permission names

use super::registry::{find_permission, PERMISSIONS};

/// Mask granting every known permission
pub fn all_permissions_mask() -> i32 {
    PERMISSIONS.iter().fold(0, |mask, flag| mask | flag.value())
}

/// Mask granting the named permissions.
///
/// Names that are not in the registry contribute nothing. Use
/// [`ProtectionConfig::validate`](super::ProtectionConfig::validate) to
/// reject them instead.
pub fn permissions_mask<I, S>(names: I) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut mask = 0;
    for name in names {
        let name = name.as_ref();
        match find_permission(name) {
            Some(flag) => mask |= flag.value(),
            None => tracing::debug!("skipping unknown permission '{}'", name),
        }
    }
    mask
}
