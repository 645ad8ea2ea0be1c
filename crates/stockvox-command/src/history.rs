// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only conversation log with a read window.

use stockvox_core::ConversationEntry;

/// Default number of entries surfaced on read.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Conversation log. Everything is kept; reads return the most recent
/// `limit` entries, oldest first.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    entries: Vec<ConversationEntry>,
    limit: usize,
}

impl ConversationHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, entry: ConversationEntry) {
        self.entries.push(entry);
    }

    /// The most recent entries, in chronological order.
    pub fn recent(&self) -> &[ConversationEntry] {
        let start = self.entries.len().saturating_sub(self.limit);
        &self.entries[start..]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Total entries recorded, including those outside the read window.
    pub fn total_len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn recent_returns_last_window_in_order() {
        let mut h = ConversationHistory::default();
        for i in 0..15 {
            h.push(ConversationEntry::assistant(format!("m{i}")));
        }
        let texts: Vec<&str> = h.recent().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts.len(), 10);
        assert_eq!(texts.first(), Some(&"m5"));
        assert_eq!(texts.last(), Some(&"m14"));
        assert_eq!(h.total_len(), 15);
    }

    #[test]
    fn clear_empties_log() {
        let mut h = ConversationHistory::new(3);
        h.push(ConversationEntry::user("hi", Some(0.9)));
        h.clear();
        assert!(h.recent().is_empty());
        assert_eq!(h.total_len(), 0);
    }

    #[test]
    fn zero_limit_is_raised_to_one() {
        let mut h = ConversationHistory::new(0);
        h.push(ConversationEntry::assistant("a"));
        h.push(ConversationEntry::assistant("b"));
        assert_eq!(h.recent().len(), 1);
        assert_eq!(h.recent()[0].text, "b");
    }

    proptest! {
        #[test]
        fn read_window_never_exceeds_limit(count in 0usize..60, limit in 1usize..20) {
            let mut h = ConversationHistory::new(limit);
            for i in 0..count {
                h.push(ConversationEntry::assistant(i.to_string()));
            }
            let recent = h.recent();
            prop_assert_eq!(recent.len(), count.min(limit));
            let indices: Vec<usize> = recent.iter().map(|e| e.text.parse().unwrap()).collect();
            prop_assert!(indices.windows(2).all(|w| w[0] + 1 == w[1]));
            if let Some(last) = indices.last() {
                prop_assert_eq!(*last, count - 1);
            }
        }
    }
}
