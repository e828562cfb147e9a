use thiserror::Error;

/// Error returned when converting a slice of the wrong length into a [`Vector`] or [`Matrix`].
///
/// [`Vector`]: crate::Vector
/// [`Matrix`]: crate::Matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} elements, got {actual}")]
pub struct DimensionError {
    /// Number of elements the target type holds.
    pub expected: usize,
    /// Length of the slice that was passed in.
    pub actual: usize,
}

impl DimensionError {
    pub(crate) fn check(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            log::trace!("rejecting slice of length {actual} (expected {expected})");
            Err(Self { expected, actual })
        }
    }
}
