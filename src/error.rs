use thiserror::Error;

/// Structural misuse of a curve, segment or algebra element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("index {index} is out of range, expected a value below {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot convert a degree {degree} curve into a representation of degree {max_degree}")]
    InvalidConversion { degree: usize, max_degree: usize },

    #[error("expected {expected} axes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, GeometryError>;

/// Returns an `IndexOutOfRange` error unless `index < len`.
pub(crate) fn ensure_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(GeometryError::IndexOutOfRange { index, len })
    }
}
