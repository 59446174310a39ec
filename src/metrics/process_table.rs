use serde::Serialize;

use super::error::{MetricsError, Result};
use super::rank::Ranked;
use super::usage::share_percent;

/// One process's resident memory for the current sampling pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessEntry {
    pub pid: u32,
    pub resident_bytes: u64,
    pub share_percent: f64,
}

/// Fixed-capacity open-addressing table keyed by pid, linear probing.
///
/// Capacity never changes after construction; a pass that enumerates more
/// distinct pids than slots gets `CapacityExceeded` back instead of a probe
/// loop that never terminates. Re-inserting a pid overwrites its value, so
/// re-sampling the same process within a pass stays idempotent.
pub struct ProcessTable {
    slots: Vec<Option<ProcessEntry>>,
    len: usize,
}

impl ProcessTable {
    pub fn with_capacity(capacity: usize) -> Self {
        ProcessTable {
            slots: vec![None; capacity],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    // pid % capacity clusters on dense pid ranges but is bit-stable, and
    // nothing outside the table depends on slot placement.
    fn home_slot(&self, pid: u32) -> usize {
        pid as usize % self.slots.len()
    }

    pub fn insert(&mut self, pid: u32, resident_bytes: u64) -> Result<()> {
        if self.slots.is_empty() {
            return Err(MetricsError::CapacityExceeded { capacity: 0 });
        }
        let mut index = self.home_slot(pid);
        for _ in 0..self.slots.len() {
            match &mut self.slots[index] {
                Some(entry) if entry.pid == pid => {
                    entry.resident_bytes = resident_bytes;
                    return Ok(());
                }
                Some(_) => index = (index + 1) % self.slots.len(),
                slot @ None => {
                    *slot = Some(ProcessEntry {
                        pid,
                        resident_bytes,
                        share_percent: 0.0,
                    });
                    self.len += 1;
                    return Ok(());
                }
            }
        }
        Err(MetricsError::CapacityExceeded {
            capacity: self.slots.len(),
        })
    }

    /// Probes the same sequence as `insert`, stopping at the first empty
    /// slot. A fully occupied table gives up after one sweep.
    pub fn get(&self, pid: u32) -> Result<&ProcessEntry> {
        if self.slots.is_empty() {
            return Err(MetricsError::KeyNotFound);
        }
        let mut index = self.home_slot(pid);
        for _ in 0..self.slots.len() {
            match &self.slots[index] {
                Some(entry) if entry.pid == pid => return Ok(entry),
                Some(_) => index = (index + 1) % self.slots.len(),
                None => return Err(MetricsError::KeyNotFound),
            }
        }
        Err(MetricsError::KeyNotFound)
    }

    /// Fill in every live entry's share of total memory.
    pub fn assign_shares(&mut self, total_memory_bytes: u64) -> Result<()> {
        if total_memory_bytes == 0 {
            return Err(MetricsError::DivideByZero);
        }
        for entry in self.slots.iter_mut().flatten() {
            entry.share_percent = share_percent(entry.resident_bytes, total_memory_bytes)?;
        }
        Ok(())
    }

    /// Live entries in slot order. Slot order is the ranker's tie-break.
    pub fn into_entries(self) -> Vec<ProcessEntry> {
        self.slots.into_iter().flatten().collect()
    }
}

impl Ranked for ProcessEntry {
    fn usage(&self) -> u64 {
        self.resident_bytes
    }
}
