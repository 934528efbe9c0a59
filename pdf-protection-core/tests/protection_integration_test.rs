//! Integration tests for document protection setup
//!
//! Covers the full path from configuration to the writer call:
//! - Opt-in rules for encryption
//! - Password and mask arguments
//! - Propagation of writer failures

use pdf_protection::encryption::{all_permissions_mask, EncryptionBits, PermissionBits};
use pdf_protection::{EncryptionWriter, ProtectionConfig, ProtectionError};
use pretty_assertions::assert_eq;
use std::error::Error as _;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
struct Call {
    user_password: Option<Vec<u8>>,
    owner_password: Option<Vec<u8>>,
    permissions: i32,
    encryption: i32,
}

#[derive(Debug)]
enum WriterError {
    AlreadyClosed,
}

impl fmt::Display for WriterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriterError::AlreadyClosed => write!(f, "document already closed"),
        }
    }
}

impl std::error::Error for WriterError {}

/// Test double recording every encryption setup call
#[derive(Default)]
struct RecordingWriter {
    calls: Vec<Call>,
    closed: bool,
}

impl EncryptionWriter for RecordingWriter {
    type Error = WriterError;

    fn set_encryption(
        &mut self,
        user_password: Option<&[u8]>,
        owner_password: Option<&[u8]>,
        permissions: i32,
        encryption: i32,
    ) -> Result<(), WriterError> {
        if self.closed {
            return Err(WriterError::AlreadyClosed);
        }
        self.calls.push(Call {
            user_password: user_password.map(|p| p.to_vec()),
            owner_password: owner_password.map(|p| p.to_vec()),
            permissions,
            encryption,
        });
        Ok(())
    }
}

#[test]
fn test_no_opt_in_means_no_writer_call() {
    let configs = [
        ProtectionConfig::new(),
        ProtectionConfig::new().with_encryption_type("standardEncryption128"),
        ProtectionConfig::new().with_encrypt_meta_data(true),
    ];

    for config in configs {
        let mut writer = RecordingWriter::default();
        config.configure(&mut writer).unwrap();
        assert!(writer.calls.is_empty());
    }
}

#[test]
fn test_owner_password_only() {
    let mut writer = RecordingWriter::default();
    ProtectionConfig::new()
        .with_owner_password("owner")
        .configure(&mut writer)
        .unwrap();

    assert_eq!(
        writer.calls,
        vec![Call {
            user_password: None,
            owner_password: Some(b"owner".to_vec()),
            permissions: all_permissions_mask(),
            encryption: EncryptionBits::DO_NOT_ENCRYPT_METADATA.bits(),
        }]
    );
}

#[test]
fn test_user_password_only() {
    let mut writer = RecordingWriter::default();
    ProtectionConfig::new()
        .with_user_password("user")
        .with_encryption_type("encryptionAES128")
        .with_encrypt_meta_data(true)
        .configure(&mut writer)
        .unwrap();

    assert_eq!(writer.calls.len(), 1);
    assert_eq!(writer.calls[0].user_password, Some(b"user".to_vec()));
    assert_eq!(writer.calls[0].owner_password, None);
    assert_eq!(writer.calls[0].encryption, 2);
}

#[test]
fn test_permissions_alone_opt_in() {
    let mut writer = RecordingWriter::default();
    ProtectionConfig::new()
        .with_permissions(["screenReaders", "fillIn"])
        .with_encryption_type("standardEncryption40")
        .configure(&mut writer)
        .unwrap();

    assert_eq!(
        writer.calls,
        vec![Call {
            user_password: None,
            owner_password: None,
            permissions: (PermissionBits::SCREEN_READERS | PermissionBits::FILL_IN).bits(),
            encryption: 8,
        }]
    );
}

#[test]
fn test_full_configuration() {
    let config = ProtectionConfig::new()
        .with_permissions(["Printing", "copy", "modifyAnnotations"])
        .with_encryption_type("STANDARDENCRYPTION128")
        .with_user_password("reader")
        .with_owner_password("author")
        .validated()
        .unwrap();

    let mut writer = RecordingWriter::default();
    config.configure(&mut writer).unwrap();

    assert_eq!(
        writer.calls,
        vec![Call {
            user_password: Some(b"reader".to_vec()),
            owner_password: Some(b"author".to_vec()),
            permissions: 2052 | 16 | 32,
            encryption: 1 | 8,
        }]
    );
}

#[test]
fn test_unvalidated_unknown_names_still_configure() {
    let config = ProtectionConfig::new()
        .with_permissions(["copy", "teleport"])
        .with_encryption_type("rot13");
    assert!(config.validate().is_err());

    let mut writer = RecordingWriter::default();
    config.configure(&mut writer).unwrap();
    assert_eq!(writer.calls[0].permissions, 16);
    assert_eq!(writer.calls[0].encryption, 8);
}

#[test]
fn test_writer_failure_is_propagated() {
    let mut writer = RecordingWriter {
        closed: true,
        ..Default::default()
    };
    let err = ProtectionConfig::new()
        .with_user_password("user")
        .configure(&mut writer)
        .unwrap_err();

    assert!(matches!(err, ProtectionError::DocumentEncryption(_)));
    assert_eq!(
        err.to_string(),
        "Document encryption error: document already closed"
    );
    let source = err.source().expect("writer error should be kept");
    assert!(matches!(
        source.downcast_ref::<WriterError>(),
        Some(WriterError::AlreadyClosed)
    ));
}

#[test]
fn test_validation_errors() {
    let err = ProtectionConfig::new()
        .with_permissions(["printing", "bogusName"])
        .validate()
        .unwrap_err();
    assert_eq!(err.field(), Some("permissions"));
    assert_eq!(err.to_string(), "invalid value for 'permissions': bogusName");

    let err = ProtectionConfig::new()
        .with_encryption_type("rot13")
        .validate()
        .unwrap_err();
    assert_eq!(err.field(), Some("encryptionType"));
    assert_eq!(err.to_string(), "invalid value for 'encryptionType': rot13");

    assert!(ProtectionConfig::new()
        .with_encryption_type("encryptionAES128")
        .validate()
        .is_ok());
}

#[test]
fn test_config_shared_across_threads() {
    let config = std::sync::Arc::new(
        ProtectionConfig::new()
            .with_permissions(["copy"])
            .with_owner_password("owner"),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = std::sync::Arc::clone(&config);
            std::thread::spawn(move || {
                let mut writer = RecordingWriter::default();
                config.configure(&mut writer).unwrap();
                writer.calls
            })
        })
        .collect();

    for handle in handles {
        let calls = handle.join().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].permissions, 16);
    }
}
