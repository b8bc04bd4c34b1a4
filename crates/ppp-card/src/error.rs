//! Error types for passcard rendering.

/// Errors that can occur when laying out a passcard.
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    /// The card must have at least one column.
    #[error("a passcard needs at least one column")]
    NoColumns,

    /// Column letters run from `A` to `Z`.
    #[error("a passcard supports at most {max} columns, got {got}")]
    TooManyColumns {
        /// The largest supported column count.
        max: usize,
        /// The requested column count.
        got: usize,
    },
}
