//! Error types for mosaic generation.

use thiserror::Error;

/// Errors raised while subdividing a mosaic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MosaicError {
    /// A polygon reached the subdivision policy with a vertex count other
    /// than 3 or 4. Only a defect in the splitting math can produce this.
    #[error("structural violation: polygon has {vertex_count} vertices (expected 3 or 4)")]
    StructuralViolation { vertex_count: usize },
}

/// Result type for mosaic operations.
pub type MosaicResult<T> = std::result::Result<T, MosaicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MosaicError::StructuralViolation { vertex_count: 5 };
        let message = format!("{err}");
        assert!(message.contains("structural violation"));
        assert!(message.contains('5'));
    }
}
