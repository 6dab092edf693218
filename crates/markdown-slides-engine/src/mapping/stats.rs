use std::collections::BTreeMap;

use serde::Serialize;

use super::types::{SlideMappingResult, SlideType};

/// Aggregate counts over a set of mapping results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingStatistics {
    /// Only types that occur are present.
    pub counts_by_type: BTreeMap<SlideType, usize>,
    pub total: usize,
    /// Results classified by the catch-all rule.
    pub fallback_count: usize,
}

pub fn get_mapping_statistics(results: &[SlideMappingResult]) -> MappingStatistics {
    let mut stats = MappingStatistics::default();
    for r in results {
        *stats.counts_by_type.entry(r.slide_type).or_default() += 1;
        if r.fallback {
            stats.fallback_count += 1;
        }
    }
    stats.total = results.len();
    stats
}
