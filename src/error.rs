use thiserror::Error;

/// Fatal validation failures raised while walking the plan tree. Everything
/// else (unknown operators, malformed property text) degrades instead of
/// erroring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("{operator} expects exactly {expected} child node(s), got {actual}")]
    Cardinality {
        operator: String,
        expected: usize,
        actual: usize,
    },

    #[error("{operator} requires a single input stream, got {actual}")]
    SingleStreamRequired { operator: String, actual: usize },

    #[error("SortMergeJoinExec stream counts differ: left {left}, right {right}")]
    StreamCountMismatch { left: usize, right: usize },
}
