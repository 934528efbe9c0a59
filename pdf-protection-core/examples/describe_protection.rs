//! Load protection settings from JSON and show the resulting writer call.
//!
//! Run with: cargo run --example describe_protection --features serde [config.json]
//!
//! Set `RUST_LOG=pdf_protection=debug` to see library logging.

use pdf_protection::encryption::{permission_names, standard_security_p_value};
use pdf_protection::{EncryptionWriter, ProtectionConfig};
use std::convert::Infallible;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE: &str = r#"{
    "permissions": ["printing", "screenReaders"],
    "encryptionType": "standardEncryption128",
    "ownerPassword": "change-me"
}"#;

/// Prints what a real writer would receive
struct PrintingWriter;

impl EncryptionWriter for PrintingWriter {
    type Error = Infallible;

    fn set_encryption(
        &mut self,
        user_password: Option<&[u8]>,
        owner_password: Option<&[u8]>,
        permissions: i32,
        encryption: i32,
    ) -> Result<(), Infallible> {
        println!("User password:  {}", describe(user_password));
        println!("Owner password: {}", describe(owner_password));
        println!("Permissions:    {} (0x{:X})", permissions, permissions);
        println!("Encryption:     {}", encryption);
        println!(
            "/P entry:       {}",
            standard_security_p_value(permissions, encryption)
        );
        Ok(())
    }
}

fn describe(password: Option<&[u8]>) -> String {
    match password {
        Some(bytes) => format!("{} bytes", bytes.len()),
        None => "none".to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_protection=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    let config: ProtectionConfig = serde_json::from_str(&json)?;
    if let Err(e) = config.validate() {
        let known: Vec<_> = permission_names().collect();
        eprintln!("{}", e);
        eprintln!("Known permissions: {}", known.join(", "));
        return Err(e.into());
    }

    if !config.is_encryption_requested() {
        println!("No protection requested");
    }
    config.configure(&mut PrintingWriter)?;
    Ok(())
}
