use serde::Serialize;

use super::error::{MetricsError, Result};

/// One capacity reading: memory, swap, or a mounted filesystem.
///
/// Memory, swap, and disk reporting all share this shape, so the
/// used/percent arithmetic lives in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UsageSnapshot {
    pub total_bytes: u64,
    pub free_bytes: u64,
    pub used_bytes: u64,
    pub used_percent: f64,
}

impl UsageSnapshot {
    /// Derive used bytes and the used percentage from raw totals.
    ///
    /// `free > total` is malformed input from the sampler; used saturates
    /// to 0 rather than wrapping. A zero total is `DivideByZero`.
    pub fn from_total_free(total_bytes: u64, free_bytes: u64) -> Result<Self> {
        let used_bytes = total_bytes.saturating_sub(free_bytes);
        let used_percent = share_percent(used_bytes, total_bytes)?;
        Ok(UsageSnapshot {
            total_bytes,
            free_bytes,
            used_bytes,
            used_percent,
        })
    }
}

/// `part` as a percentage of `total`, in [0,100] whenever `part <= total`.
pub fn share_percent(part: u64, total: u64) -> Result<f64> {
    if total == 0 {
        return Err(MetricsError::DivideByZero);
    }
    Ok(part as f64 * 100.0 / total as f64)
}
