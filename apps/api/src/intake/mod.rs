//! Input capture: résumé file intake and job-description measurement.
//!
//! A résumé is accepted only when its declared media type is PDF. Accepted
//! bytes are base64-encoded once, here, into the form the optimization client
//! sends inline to the model.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

use crate::llm_client::InlineDocument;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
const DEFAULT_FILE_NAME: &str = "resume.pdf";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("Please upload a PDF file.")]
    NotPdf { declared: Option<String> },

    #[error("The uploaded file is empty.")]
    Empty,

    #[error("The uploaded file is {size} bytes; the limit is {limit} bytes.")]
    TooLarge { size: usize, limit: usize },
}

/// A captured résumé, ready for transport.
///
/// `file_name` is for UI feedback only and never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDocument {
    file_name: String,
    encoded: String,
    size_bytes: usize,
}

impl ResumeDocument {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    pub fn as_inline(&self) -> InlineDocument<'_> {
        InlineDocument {
            mime_type: PDF_MEDIA_TYPE,
            data: &self.encoded,
        }
    }
}

/// Compares the essence of a declared media type (parameters dropped) with PDF.
pub fn is_pdf_media_type(declared: &str) -> bool {
    declared
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case(PDF_MEDIA_TYPE))
        .unwrap_or(false)
}

/// Validates one uploaded file and encodes it.
pub fn accept_resume(
    declared_type: Option<&str>,
    file_name: Option<&str>,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<ResumeDocument, IntakeError> {
    if !declared_type.map(is_pdf_media_type).unwrap_or(false) {
        return Err(IntakeError::NotPdf {
            declared: declared_type.map(str::to_string),
        });
    }
    if bytes.is_empty() {
        return Err(IntakeError::Empty);
    }
    if bytes.len() > max_bytes {
        return Err(IntakeError::TooLarge {
            size: bytes.len(),
            limit: max_bytes,
        });
    }

    let file_name = file_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_FILE_NAME)
        .to_string();

    Ok(ResumeDocument {
        file_name,
        encoded: STANDARD.encode(bytes),
        size_bytes: bytes.len(),
    })
}

/// Character count shown by the live counter. Counts Unicode scalar values.
pub fn job_description_length(text: &str) -> usize {
    text.chars().count()
}
