use std::cmp::Reverse;

use crate::tally::FrequencyTally;

/// Number of entries reported per ranking.
pub const TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub key: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

pub type Ranking = Vec<RankedEntry>;

/// The `n` highest counts, descending. Equal counts keep the tally's
/// first-seen order because the sort is stable and keyed on count alone.
pub fn top_n(tally: &FrequencyTally, n: usize) -> Ranking {
    let mut entries: Vec<(&str, u64)> = tally.iter().collect();
    entries.sort_by_key(|&(_, count)| Reverse(count));

    entries
        .into_iter()
        .take(n)
        .map(|(key, count)| RankedEntry::new(key, count))
        .collect()
}

pub fn top_three(tally: &FrequencyTally) -> Ranking {
    top_n(tally, TOP_N)
}
