//! Tree construction errors.

use hc_core::PathId;

pub type GraphResult<T> = Result<T, GraphError>;

/// Structural problems in a labelled segment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No segments at all.
    Empty,

    /// No segment starts at the source label.
    NoSource { label: String },

    /// More than one segment starts at the source label.
    MultipleSources { label: String, count: usize },

    /// A segment ends at its own start label.
    SelfLoop { path: PathId, label: String },

    /// Two segments end at the same node, so a predecessor would be ambiguous.
    DuplicateEndLabel {
        label: String,
        first: PathId,
        second: PathId,
    },

    /// A segment whose start is not the end of any other segment.
    DanglingPath { path: PathId, start: String },

    /// Segments that form a loop instead of hanging off the source.
    Cycle { path: PathId },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::Empty => write!(f, "No segments given"),
            GraphError::NoSource { label } => {
                write!(f, "No segment starts at source '{}'", label)
            }
            GraphError::MultipleSources { label, count } => {
                write!(f, "{} segments start at source '{}' (expected 1)", count, label)
            }
            GraphError::SelfLoop { path, label } => {
                write!(f, "Segment {} starts and ends at '{}'", path, label)
            }
            GraphError::DuplicateEndLabel {
                label,
                first,
                second,
            } => write!(
                f,
                "Segments {} and {} both end at '{}'",
                first, second, label
            ),
            GraphError::DanglingPath { path, start } => write!(
                f,
                "Segment {} starting at '{}' does not lead to the source",
                path, start
            ),
            GraphError::Cycle { path } => {
                write!(f, "Segment {} is part of a loop", path)
            }
        }
    }
}

impl std::error::Error for GraphError {}
