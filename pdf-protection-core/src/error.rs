use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtectionError {
    #[error("invalid value for '{field}': {value}")]
    InvalidConfiguration { field: &'static str, value: String },

    #[error("Document encryption error: {0}")]
    DocumentEncryption(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ProtectionError {
    pub(crate) fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        ProtectionError::InvalidConfiguration {
            field,
            value: value.into(),
        }
    }

    /// Name of the configuration field that was rejected, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ProtectionError::InvalidConfiguration { field, .. } => Some(field),
            ProtectionError::DocumentEncryption(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProtectionError>;
