// Diagnostics
//
// Finding records produced by container access analysis.

use serde::{Deserialize, Serialize};

/// Rule identifier attached to private-service findings.
pub const PRIVATE_SERVICE: &str = "symfonyContainer.privateService";

/// A single finding, tied to the source line of the offending call.
///
/// Formatting and output are the embedder's concern; the analyzer only
/// produces these records and hands them to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Human-readable message.
    pub message: String,
    /// Stable rule identifier (e.g. `symfonyContainer.privateService`).
    pub code: String,
    /// Line number (1-indexed).
    pub line: u32,
}

impl Diagnostic {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            line: 0,
        }
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }
}
