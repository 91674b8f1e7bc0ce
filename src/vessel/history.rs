//! Rolling reading history
//!
//! Fixed-capacity window of recent snapshots. The oldest reading drops
//! off once the window is full.

use std::collections::VecDeque;

use crate::models::Snapshot;

/// Readings kept per vessel.
pub const MAX_HISTORY: usize = 100;

pub struct HistoryWindow {
    readings: VecDeque<Snapshot>,
    capacity: usize,
}

impl HistoryWindow {
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            readings: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a reading, evicting the oldest once the window is full.
    pub fn push(&mut self, reading: Snapshot) {
        if self.readings.len() == self.capacity {
            self.readings.pop_front();
        }
        self.readings.push_back(reading);
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.readings.iter()
    }
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vessel::baseline::Baseline;
    use crate::vessel::simulator::ReadingSimulator;

    fn reading_with_timestamp(ts: i64) -> Snapshot {
        let mut simulator = ReadingSimulator::with_seed(Baseline::default(), 0);
        let mut reading = simulator.next_reading();
        reading.timestamp = ts;
        reading
    }

    #[test]
    fn window_never_exceeds_max_history() {
        let mut window = HistoryWindow::new();
        for ts in 0..(MAX_HISTORY as i64 + 5) {
            window.push(reading_with_timestamp(ts));
        }
        assert_eq!(window.len(), MAX_HISTORY);
        assert_eq!(window.iter().next().map(|r| r.timestamp), Some(5));
        assert_eq!(
            window.iter().last().map(|r| r.timestamp),
            Some(MAX_HISTORY as i64 + 4)
        );
    }

    #[test]
    fn eviction_is_strictly_oldest_first() {
        let mut window = HistoryWindow::with_capacity(3);
        for ts in 0..5 {
            window.push(reading_with_timestamp(ts));
        }
        let kept: Vec<i64> = window.iter().map(|r| r.timestamp).collect();
        assert_eq!(kept, vec![2, 3, 4]);
    }

    #[test]
    fn empty_window_reports_empty() {
        let window = HistoryWindow::new();
        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
    }
}
