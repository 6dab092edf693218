use serde::{Deserialize, Serialize};

/// Thresholds used by the classification rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    /// Longest average item length (chars) that still fits on a card.
    pub short_item_max_len: usize,
    /// Longest paragraph (chars) a title slide accepts as its subtitle.
    pub title_paragraph_max_len: usize,
    /// Fewest numbered items that make a timeline.
    pub timeline_min_items: usize,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            short_item_max_len: 80,
            title_paragraph_max_len: 160,
            timeline_min_items: 3,
        }
    }
}
