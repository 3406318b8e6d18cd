//! Activation History - Recent Button Activations
//!
//! Fixed-capacity record of the buttons a user activated, oldest evicted
//! first.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// One activation of a button
#[derive(Debug, Clone)]
pub struct ActivationRecord {
    pub id: u64,
    pub title: String,
    pub timestamp: DateTime<Local>,
}

/// Bounded activation log with FIFO eviction
#[derive(Debug, Clone)]
pub struct ActivationHistory {
    cap: usize,
    next_id: u64,
    entries: VecDeque<ActivationRecord>,
}

impl ActivationHistory {
    /// Create a history keeping at most `cap` records. With 0, nothing is kept.
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            next_id: 1,
            entries: VecDeque::with_capacity(cap.min(1024)),
        }
    }

    /// Record an activation of `title` at `timestamp`
    pub fn push(&mut self, title: impl Into<String>, timestamp: DateTime<Local>) {
        let id = self.next_id;
        self.next_id += 1;

        if self.cap == 0 {
            return;
        }
        if self.entries.len() == self.cap {
            self.entries.pop_front();
        }
        self.entries.push_back(ActivationRecord {
            id,
            title: title.into(),
            timestamp,
        });
    }

    /// Record an activation with the current timestamp
    pub fn push_now(&mut self, title: impl Into<String>) {
        self.push(title, Local::now());
    }

    /// Records from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &ActivationRecord> {
        self.entries.iter()
    }

    /// Most recent record
    pub fn last(&self) -> Option<&ActivationRecord> {
        self.entries.back()
    }

    /// Total activations ever recorded, including evicted ones
    pub fn total(&self) -> u64 {
        self.next_id - 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ActivationHistory {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(history: &ActivationHistory) -> Vec<&str> {
        history.iter().map(|record| record.title.as_str()).collect()
    }

    #[test]
    fn keeps_order() {
        let mut history = ActivationHistory::new(3);
        history.push_now("Enviar");
        history.push_now("Deshabilitar");
        assert_eq!(titles(&history), vec!["Enviar", "Deshabilitar"]);
        assert_eq!(history.last().map(|r| r.id), Some(2));
    }

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut history = ActivationHistory::new(2);
        history.push_now("a");
        history.push_now("b");
        history.push_now("c");
        assert_eq!(titles(&history), vec!["b", "c"]);
        assert_eq!(history.total(), 3);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut history = ActivationHistory::new(0);
        history.push_now("a");
        assert!(history.is_empty());
        assert_eq!(history.total(), 1);
    }
}
