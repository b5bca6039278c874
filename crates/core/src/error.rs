//! Error types for grid access.

use crate::types::CELL_COUNT;

/// Errors raised by grid lookups.
///
/// These signal a caller bug (an index that was never derived from the grid),
/// not a condition a running game can recover from.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell index {index} out of range 0..{}", CELL_COUNT)]
    OutOfRange { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_the_index() {
        let err = GridError::OutOfRange { index: 16 };
        assert_eq!(err.to_string(), "cell index 16 out of range 0..16");
    }
}
