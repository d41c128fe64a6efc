//! Error types for template variable extraction

use thiserror::Error;

/// Errors that can occur while extracting variables from a template document
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The input bytes could not be opened as a document archive
    #[error("Invalid or corrupt document: {0}")]
    InvalidArchive(String),

    /// The archive has no main body part
    #[error("Document has no body part - this does not look like a word-processing document")]
    MissingBody,

    /// The archive was valid but contained no placeholder tokens
    #[error("No template variables found. Add placeholders of the form {{{{variable_name}}}} to the document text")]
    NoVariablesFound,

    /// Async extraction exceeded the caller-supplied deadline
    #[error("Extraction timeout after {0}ms")]
    Timeout(u64),

    /// The blocking extraction task failed to complete
    #[error("Extraction task failed: {0}")]
    Task(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_variables_message_names_the_syntax() {
        let message = ExtractError::NoVariablesFound.to_string();
        assert!(message.contains("{{variable_name}}"));
    }

    #[test]
    fn test_invalid_archive_carries_cause() {
        let err = ExtractError::InvalidArchive("invalid Zip archive".to_string());
        assert!(err.to_string().contains("invalid Zip archive"));
    }
}
