//! Error types for template construction, scaling and instantiation

use thiserror::Error;

/// Main error type for template operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A template or scale function was built from invalid parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The requested scale is not usable by the template
    #[error("Invalid scale {k}: {reason}")]
    InvalidScale {
        /// Requested scale parameter
        k: i64,
        /// Why the scale was rejected
        reason: String,
    },

    /// Wrong number of plaquette indices supplied to `instantiate`
    #[error("Template expects {expected} plaquette indices, got {got}")]
    ArityMismatch {
        /// Number of plaquette indices the template requires
        expected: usize,
        /// Number of plaquette indices supplied
        got: usize,
    },

    /// A supplied plaquette index collides with the empty-cell sentinel
    #[error("Plaquette index at position {position} is 0, which is reserved for empty cells")]
    ReservedPlaquetteIndex {
        /// Position of the offending entry in the supplied indices
        position: usize,
    },

    /// The instantiated array would exceed the configured cell budget
    #[error("Array of shape {width}x{height} exceeds the budget of {max_cells} cells")]
    GeometryOverflow {
        /// Array width
        width: usize,
        /// Array height
        height: usize,
        /// Configured cell budget
        max_cells: usize,
    },
}

impl TemplateError {
    /// Build an `InvalidScale` error.
    pub fn invalid_scale(k: i64, reason: impl Into<String>) -> Self {
        TemplateError::InvalidScale {
            k,
            reason: reason.into(),
        }
    }

    /// Build an `InvalidConfiguration` error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        TemplateError::InvalidConfiguration(message.into())
    }
}

/// Result type alias for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
