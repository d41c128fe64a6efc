//! Letter-template variable extraction engine
//!
//! This crate takes a word-processing document (a zip archive of XML
//! parts), reconstructs the plain text of its body and header/footer
//! slots, discovers `{{placeholder}}` tokens in that text, and classifies
//! them to drive downstream letter generation:
//! - required vs. optional variables (date-keyword heuristic)
//! - a suggested template display name and category
//!
//! The engine holds no state between calls and performs no I/O of its own;
//! callers own file acquisition and persistence of the resulting template.
//!
//! # Feature Flags
//!
//! - `server` (default): enables async [`extract_variables_async`] with
//!   timeout (requires tokio)
//!
//! # Example
//! ```no_run
//! use letter_engine::extract_variables;
//!
//! # fn example(docx_bytes: &[u8]) -> Result<(), letter_engine::ExtractError> {
//! let result = extract_variables(docx_bytes)?;
//! println!("{} variables, {} required", result.variables.len(), result.required.len());
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod classify;
pub mod error;
pub mod text;
pub mod variables;

use std::collections::BTreeMap;

pub use archive::{TemplateArchive, BODY_PART, FOOTER_PARTS, HEADER_PARTS};
pub use classify::{Classification, ClassificationPolicy, KeywordPolicy, Suggestion};
pub use error::ExtractError;
pub use template_types::{ExtractionResult, TemplateCategory, VariableInfo};

/// Extract and classify template variables with the default keyword policy
pub fn extract_variables(bytes: &[u8]) -> Result<ExtractionResult, ExtractError> {
    extract_variables_with_policy(bytes, &KeywordPolicy)
}

/// Extract template variables, classifying with a caller-supplied policy
///
/// Pipeline: open the archive, reconstruct and scan the body (required)
/// and every present header/footer slot, merge per-part counts by name,
/// then classify the merged name set.
///
/// # Errors
/// - `ExtractError::InvalidArchive` - the bytes are not a valid archive
/// - `ExtractError::MissingBody` - the body part is absent
/// - `ExtractError::NoVariablesFound` - no placeholder token in any part
pub fn extract_variables_with_policy(
    bytes: &[u8],
    policy: &dyn ClassificationPolicy,
) -> Result<ExtractionResult, ExtractError> {
    let mut template = TemplateArchive::open(bytes)?;

    let body = template.part(BODY_PART)?.ok_or(ExtractError::MissingBody)?;
    let mut counts = scan_part(&body);

    // Header/footer slots are optional; absence is expected and common
    for path in HEADER_PARTS.iter().chain(FOOTER_PARTS.iter()) {
        if let Some(part) = template.part(path)? {
            counts = variables::merge_counts(counts, scan_part(&part));
        }
    }

    if counts.is_empty() {
        return Err(ExtractError::NoVariablesFound);
    }
    tracing::debug!("merged {} template variables across parts", counts.len());

    let names: Vec<String> = counts.keys().cloned().collect();
    let classification = policy.classify(&names);
    let suggestion = policy.suggest(&names);

    let variables = counts
        .into_iter()
        .map(|(name, count)| VariableInfo { name, count })
        .collect();

    Ok(ExtractionResult {
        variables,
        required: classification.required,
        optional: classification.optional,
        suggested_name: suggestion.name,
        suggested_category: suggestion.category,
    })
}

/// One part's contribution to the document-wide variable map
fn scan_part(bytes: &[u8]) -> BTreeMap<String, u32> {
    let xml = String::from_utf8_lossy(bytes);
    variables::count_placeholders(&text::reconstruct_text(&xml))
}

/// Extract with a deadline, running the blocking pipeline off the async
/// runtime
///
/// # Errors
/// All [`extract_variables`] errors, plus `ExtractError::Timeout` when the
/// deadline elapses first.
#[cfg(feature = "server")]
pub async fn extract_variables_async(
    bytes: Vec<u8>,
    timeout_ms: u64,
) -> Result<ExtractionResult, ExtractError> {
    let result = tokio::time::timeout(
        std::time::Duration::from_millis(timeout_ms),
        tokio::task::spawn_blocking(move || extract_variables(&bytes)),
    )
    .await;

    match result {
        Ok(Ok(extraction)) => extraction,
        Ok(Err(join_error)) => Err(ExtractError::Task(join_error.to_string())),
        Err(_elapsed) => Err(ExtractError::Timeout(timeout_ms)),
    }
}
