use crate::form::validate::FieldErrors;

/// Convenience result type used across claimsign.
pub type ClaimResult<T> = Result<T, ClaimError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum ClaimError {
    /// Invalid configuration, geometry or other caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Submission was blocked because one or more form fields failed validation.
    #[error("Please fix validation errors before submitting.")]
    InvalidFields(FieldErrors),

    /// Problems with the PDF attachment in upload mode.
    #[error("upload error: {0}")]
    Upload(String),

    /// Errors while encoding or decoding signature images.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClaimError {
    /// Build a [`ClaimError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ClaimError::Upload`] value.
    pub fn upload(msg: impl Into<String>) -> Self {
        Self::Upload(msg.into())
    }

    /// Build a [`ClaimError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ClaimError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Field errors carried by [`ClaimError::InvalidFields`], if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::InvalidFields(errs) => Some(errs),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
