use serde::Serialize;

use super::error::{MetricsError, Result};

/// Aggregate CPU tick counters since boot, as exposed by the OS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CpuTicks {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
}

impl CpuTicks {
    pub fn busy(&self) -> u64 {
        self.user + self.nice + self.system
    }

    pub fn total(&self) -> u64 {
        self.busy() + self.idle
    }

    /// Busy ticks as a percentage of all ticks. All-zero counters are
    /// `DivideByZero`.
    pub fn usage_percent(&self) -> Result<f64> {
        let total = self.total();
        if total == 0 {
            return Err(MetricsError::DivideByZero);
        }
        Ok(self.busy() as f64 * 100.0 / total as f64)
    }
}
