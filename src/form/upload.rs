use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{ClaimError, ClaimResult};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A PDF claim form attached in upload mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdfAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PdfAttachment {
    /// Accept a file only if its declared content type is `application/pdf`.
    pub fn new(
        file_name: impl Into<String>,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ClaimResult<Self> {
        if content_type != PDF_CONTENT_TYPE {
            return Err(ClaimError::upload("Please upload a PDF file only."));
        }
        Ok(Self {
            file_name: file_name.into(),
            bytes,
        })
    }

    /// Read a file from disk; the content type is inferred from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> ClaimResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(file_name, content_type_for(path), bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => PDF_CONTENT_TYPE,
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/form/upload.rs"]
mod tests;
