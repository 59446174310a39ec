use std::result;

use thiserror::Error;

/// A type alias for results produced by the metrics tables.
pub type Result<T> = result::Result<T, MetricsError>;

/// Errors the aggregation layer can surface to a caller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MetricsError {
    /// A lookup reached an empty slot or exhausted a chain without a match.
    #[error("key not present in table")]
    KeyNotFound,
    /// An insert probed every slot of a full table without finding the key.
    #[error("table full ({capacity} slots), entry dropped")]
    CapacityExceeded { capacity: usize },
    /// A percentage was requested against a zero total.
    #[error("total is zero, percentage undefined")]
    DivideByZero,
}
