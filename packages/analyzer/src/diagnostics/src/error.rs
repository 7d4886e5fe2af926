// Analysis Errors
//
// Hard failures that abort an analysis run, as opposed to findings.

use thiserror::Error;

/// Fatal analysis failures.
///
/// Ordinary findings are reported as [`Diagnostic`](super::diagnostic::Diagnostic)
/// values and never abort a run. These errors indicate the analyzed code's
/// annotations are in a state the analyzer refuses to reason about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A property carries more than one AutowireLocator attribute, so the
    /// allow-list for that container reference is ambiguous.
    #[error("Only one AutowireLocator attribute is allowed on \"{class_name}::{property}\".")]
    DuplicateAutowireLocator {
        class_name: String,
        property: String,
    },
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
