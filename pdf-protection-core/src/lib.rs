//! # pdf-protection
//!
//! Turns the protection section of a document configuration into the
//! arguments of a PDF writer's encryption setup.
//!
//! ## Features
//!
//! - **Registry**: permission and algorithm names with their bit values
//! - **Masks**: permission and encryption masks computed from configuration
//! - **Validation**: unknown names are rejected when configuration is loaded
//! - **Writer seam**: the final call goes through [`EncryptionWriter`]
//!
//! Encryption itself is done by the writer.
//!
//! ## Quick Start
//!
//! ```rust
//! use pdf_protection::{EncryptionWriter, ProtectionConfig, Result};
//!
//! struct Writer;
//!
//! impl EncryptionWriter for Writer {
//!     type Error = std::io::Error;
//!
//!     fn set_encryption(
//!         &mut self,
//!         user_password: Option<&[u8]>,
//!         owner_password: Option<&[u8]>,
//!         permissions: i32,
//!         encryption: i32,
//!     ) -> std::io::Result<()> {
//!         assert_eq!(user_password, None);
//!         assert_eq!(owner_password, Some(&b"owner"[..]));
//!         assert_eq!(permissions, 2052 | 16);
//!         assert_eq!(encryption, 2);
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let config = ProtectionConfig::new()
//!     .with_permissions(["printing", "copy"])
//!     .with_encryption_type("encryptionAES128")
//!     .with_encrypt_meta_data(true)
//!     .with_owner_password("owner")
//!     .validated()?;
//!
//! config.configure(&mut Writer)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`encryption`] - Registry, masks and [`ProtectionConfig`]
//! - [`writer`] - The [`EncryptionWriter`] trait
//! - [`error`] - Error types

pub mod encryption;
pub mod error;
pub mod writer;

pub use encryption::{EncryptionRequest, NamedFlag, ProtectionConfig};
pub use error::{ProtectionError, Result};
pub use writer::EncryptionWriter;
