//! Integer flag words consumed by the standard security handler
//!
//! Values match the permission (`/P`) bits of ISO 32000-1 Table 22 and the
//! encryption mode selectors understood by the document writer.

use bitflags::bitflags;

bitflags! {
    /// Permission bits granted to users opening the document with the user password
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PermissionBits: i32 {
        /// Print the document (bit 3) in high quality (bit 12)
        const PRINTING = (1 << 2) | (1 << 11);
        /// Modify document contents (bit 4)
        const MODIFY_CONTENTS = 1 << 3;
        /// Copy text and graphics (bit 5)
        const COPY = 1 << 4;
        /// Add or modify text annotations (bit 6)
        const MODIFY_ANNOTATIONS = 1 << 5;
        /// Fill in form fields (bit 9)
        const FILL_IN = 1 << 8;
        /// Extract text and graphics for accessibility (bit 10)
        const SCREEN_READERS = 1 << 9;
        /// Assemble the document: insert, rotate, delete pages (bit 11)
        const ASSEMBLY = 1 << 10;
        /// Print at degraded quality only (bit 3)
        const DEGRADED_PRINTING = 1 << 2;
    }
}

bitflags! {
    /// Encryption mode selector and modifiers
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EncryptionBits: i32 {
        /// RC4 with a 128-bit key
        const STANDARD_ENCRYPTION_128 = 1;
        /// AES with a 128-bit key
        const ENCRYPTION_AES_128 = 2;
        /// Leave the document metadata stream unencrypted
        const DO_NOT_ENCRYPT_METADATA = 8;
    }
}

/// RC4 with a 40-bit key. The writer's default mode, so it contributes no bits.
pub const STANDARD_ENCRYPTION_40: i32 = 0;

/// Mask selecting the algorithm part of an encryption mask
const ENCRYPTION_MODE_MASK: i32 = 7;

/// Reserved `/P` bits for revision 3+ handlers (128-bit and AES)
const P_RESERVED_REVISION_3: u32 = 0xFFFF_F0C0;

/// Reserved `/P` bits for the revision 2 handler (40-bit)
const P_RESERVED_REVISION_2: u32 = 0xFFFF_FFC0;

/// Convert a permission mask into the value stored in the `/P` entry.
///
/// Bits 7-8 and 13-32 are reserved and must be set. Bits 1-2 must be clear.
/// The 40-bit handler only knows bits 3-6, so every higher bit is set.
pub fn standard_security_p_value(permissions: i32, encryption: i32) -> i32 {
    let reserved = if encryption & ENCRYPTION_MODE_MASK == STANDARD_ENCRYPTION_40 {
        P_RESERVED_REVISION_2
    } else {
        P_RESERVED_REVISION_3
    };
    ((permissions as u32 | reserved) & !0b11) as i32
}
