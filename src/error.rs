//! Error handling for layerpaint
//!
//! Only genuine capacity violations and caller mistakes are errors.
//! Empty-structure queries (nothing to undo, nothing to replay, erasing an
//! inactive layer) report "nothing happened" through their return values.

use thiserror::Error;

/// Result type alias for layerpaint operations
pub type Result<T> = std::result::Result<T, PaintError>;

/// Main error type for layerpaint operations
#[derive(Error, Debug)]
pub enum PaintError {
    // Capacity Errors
    #[error("Capacity exceeded: {container} is full ({capacity} entries)")]
    CapacityExceeded {
        container: &'static str,
        capacity: usize,
    },

    // Layer Errors
    #[error("Layer index {index} out of range (expected < {limit})")]
    LayerIndexOutOfRange { index: usize, limit: usize },

    #[error("Unknown layer: {name}")]
    UnknownLayer { name: String },

    // Grid Errors
    #[error("Invalid draw style: {style}")]
    InvalidDrawStyle { style: String },

    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    CellOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    // Session Errors
    #[error("Invalid session script: {reason}")]
    InvalidScript { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PaintError {
    /// Shorthand for a capacity failure on the named container
    pub fn capacity(container: &'static str, capacity: usize) -> Self {
        PaintError::CapacityExceeded {
            container,
            capacity,
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            PaintError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            PaintError::LayerIndexOutOfRange { .. } => "LAYER_INDEX_OUT_OF_RANGE",
            PaintError::UnknownLayer { .. } => "UNKNOWN_LAYER",
            PaintError::InvalidDrawStyle { .. } => "INVALID_DRAW_STYLE",
            PaintError::CellOutOfBounds { .. } => "CELL_OUT_OF_BOUNDS",
            PaintError::InvalidScript { .. } => "INVALID_SCRIPT",
            PaintError::Io(_) => "IO_ERROR",
            PaintError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable
    ///
    /// Recoverable errors leave the store, tracker or grid untouched, so the
    /// caller may simply carry on with the next operation.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaintError::CapacityExceeded { .. }
                | PaintError::LayerIndexOutOfRange { .. }
                | PaintError::UnknownLayer { .. }
                | PaintError::CellOutOfBounds { .. }
        )
    }
}
