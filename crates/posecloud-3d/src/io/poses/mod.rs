mod parser;
mod types;
mod writer;

pub use parser::*;
pub use types::*;
pub use writer::*;

/// Error types for the pose log module.
#[derive(Debug, thiserror::Error)]
pub enum PoseLogError {
    /// Error reading or writing file
    #[error("error reading or writing pose log: {0}")]
    IoError(#[from] std::io::Error),

    /// A data line does not have the expected number of fields
    #[error("line {line_number}: expected {expected} fields, found {found}: {line:?}")]
    InvalidFieldCount {
        /// 1-based line number in the pose log
        line_number: usize,
        /// Number of fields a data line must have
        expected: usize,
        /// Number of fields found on the line
        found: usize,
        /// Raw line content
        line: String,
    },

    /// A numeric field could not be parsed
    #[error("line {line_number}: {reason}: {line:?}")]
    ParseError {
        /// 1-based line number in the pose log
        line_number: usize,
        /// What went wrong while parsing the field
        reason: String,
        /// Raw line content
        line: String,
    },
}

impl PoseLogError {
    /// The 1-based line number the error refers to, if any.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            PoseLogError::IoError(_) => None,
            PoseLogError::InvalidFieldCount { line_number, .. }
            | PoseLogError::ParseError { line_number, .. } => Some(*line_number),
        }
    }
}
