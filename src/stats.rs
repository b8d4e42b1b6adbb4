//! # Opcode Statistics
//!
//! Optional per-opcode execution counters. Enabled through
//! [`crate::Config::collect_stats`] or [`crate::Cpu::enable_stats`].

use crate::opcodes::decode;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Execution counts for each of the 256 opcodes.
///
/// Counts are cumulative; `checkpoint` starts a new interval while keeping the
/// running totals, like a profiler's "since last report" column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpcodeStats {
    counts: Vec<u64>,
    totals: Vec<u64>,
}

impl OpcodeStats {
    pub fn new() -> Self {
        Self {
            counts: vec![0; 256],
            totals: vec![0; 256],
        }
    }

    /// Records one execution of `opcode`.
    pub fn record(&mut self, opcode: u8) {
        self.counts[opcode as usize] += 1;
    }

    /// Executions of `opcode` since the last checkpoint.
    pub fn count(&self, opcode: u8) -> u64 {
        self.counts[opcode as usize]
    }

    /// Executions of `opcode` since the counters were created or reset.
    pub fn total_for(&self, opcode: u8) -> u64 {
        self.totals[opcode as usize] + self.counts[opcode as usize]
    }

    /// Instructions executed since the last checkpoint.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Folds the current interval into the running totals.
    pub fn checkpoint(&mut self) {
        for (total, count) in self.totals.iter_mut().zip(self.counts.iter_mut()) {
            *total += *count;
            *count = 0;
        }
    }

    /// Clears every counter.
    pub fn reset(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
        self.totals.iter_mut().for_each(|c| *c = 0);
    }

    /// Renders a table of every opcode that has executed at least once.
    ///
    /// ```
    /// use mc6800::OpcodeStats;
    ///
    /// let mut stats = OpcodeStats::new();
    /// stats.record(0x01);
    /// stats.record(0x01);
    /// stats.record(0x86);
    ///
    /// let report = stats.report();
    /// assert!(report.contains("$01  NOP"));
    /// assert!(report.contains("$86  LDAA"));
    /// assert!(report.lines().last().unwrap().ends_with("total"));
    /// ```
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "       count          total   opcode");
        for opcode in 0..=255u8 {
            let total = self.total_for(opcode);
            if total == 0 {
                continue;
            }
            let _ = writeln!(
                out,
                "{:>12},  {:>12},  ${:02X}  {}",
                self.count(opcode),
                total,
                opcode,
                decode(opcode).mnemonic
            );
        }
        let grand_total: u64 = (0..=255u8).map(|op| self.total_for(op)).sum();
        let _ = writeln!(out, "------------   ------------   ------");
        let _ = write!(out, "{:>12},  {:>12},  total", self.total(), grand_total);
        out
    }
}

impl Default for OpcodeStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_checkpoint() {
        let mut stats = OpcodeStats::new();
        stats.record(0x08);
        stats.record(0x08);
        stats.record(0x26);
        assert_eq!(stats.count(0x08), 2);
        assert_eq!(stats.total(), 3);

        stats.checkpoint();
        assert_eq!(stats.count(0x08), 0);
        assert_eq!(stats.total_for(0x08), 2);

        stats.record(0x08);
        assert_eq!(stats.total_for(0x08), 3);

        stats.reset();
        assert_eq!(stats.total_for(0x08), 0);
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_report_skips_unused_opcodes() {
        let mut stats = OpcodeStats::new();
        stats.record(0x39);
        let report = stats.report();
        // header, one row, separator, total
        assert_eq!(report.lines().count(), 4);
        assert!(report.contains("$39  RTS"));
    }
}
