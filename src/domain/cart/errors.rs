//! Cart domain errors

use thiserror::Error;

/// Cart-specific domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Quantity must be at least 1, got {quantity}")]
    InvalidQuantity { quantity: u32 },
}
