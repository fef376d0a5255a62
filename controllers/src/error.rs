use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerError {
    #[error("index {index} is out of range for {len} items")]
    InvalidIndex { index: usize, len: usize },
    #[error("controller needs at least one item")]
    EmptyItems,
}

/// Checks `index` against `len`, returning the index back on success.
pub(crate) fn check_index(index: usize, len: usize) -> Result<usize, ControllerError> {
    if index < len {
        Ok(index)
    } else {
        Err(ControllerError::InvalidIndex { index, len })
    }
}
