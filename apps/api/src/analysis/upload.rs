//! PDF resume upload: pulls the `file` and `role` parts out of a multipart body and
//! extracts plain text from the PDF.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;

/// The two parts an upload must carry.
#[derive(Debug)]
pub struct ResumeUpload {
    pub file: Bytes,
    pub role: String,
}

/// Reads the whole multipart body. Unknown parts are skipped; a repeated part keeps the last value.
pub async fn read_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut file = None;
    let mut role = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Malformed multipart body", e))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("Could not read file part", e))?;
                file = Some(bytes);
            }
            Some("role") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error("Could not read role part", e))?;
                role = Some(text);
            }
            other => debug!("Ignoring multipart field {other:?}"),
        }
    }

    let file = file
        .filter(|f| !f.is_empty())
        .ok_or_else(|| AppError::Validation("A non-empty 'file' part is required".to_string()))?;
    let role = role.ok_or_else(|| AppError::Validation("A 'role' part is required".to_string()))?;

    Ok(ResumeUpload { file, role })
}

/// Body-limit overruns keep their 413; everything else is a malformed request.
fn multipart_error(context: &str, e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{context}: {e}"))
    } else {
        AppError::Validation(format!("{context}: {e}"))
    }
}

/// Extracts the text layer of a PDF held in memory.
pub fn extract_pdf_text(pdf: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(pdf).map_err(|e| {
        warn!("PDF extraction failed: {e}");
        AppError::UnprocessableEntity("Could not read the uploaded PDF".to_string())
    })?;

    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract any text from the PDF.".to_string(),
        ));
    }
    Ok(text)
}

/// Runs extraction off the async worker threads. A panic inside the PDF parser
/// is reported the same way as a parse error.
pub async fn extract_pdf_text_blocking(pdf: Bytes) -> Result<String, AppError> {
    match tokio::task::spawn_blocking(move || extract_pdf_text(&pdf)).await {
        Ok(result) => result,
        Err(e) if e.is_panic() => {
            warn!("PDF extraction panicked");
            Err(AppError::UnprocessableEntity(
                "Could not read the uploaded PDF".to_string(),
            ))
        }
        Err(e) => Err(AppError::Internal(e.into())),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readable_pdf_yields_text() {
        let text = extract_pdf_text(&test_pdf::single_page("Python Docker")).unwrap();
        assert!(text.contains("Python Docker"), "extracted {text:?}");
    }

    #[test]
    fn test_blank_pdf_is_validation_error() {
        let err = extract_pdf_text(&test_pdf::single_page(" ")).unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert_eq!(msg, "Could not extract any text from the PDF.")
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_bytes_are_unprocessable() {
        let err = extract_pdf_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn test_blocking_extraction_reports_unprocessable() {
        let err = extract_pdf_text_blocking(Bytes::from_static(b"%PDF-garbage"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
