use std::collections::HashMap;

/// Occurrence counts keyed by string, iterated in first-seen order.
///
/// The iteration order is what breaks ties when ranking, so keys live in a
/// `Vec` and the map only points into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTally {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    /// Adds `count` occurrences of `key`. A zero count never creates an entry.
    pub fn add(&mut self, key: &str, count: u64) {
        if count == 0 {
            return;
        }

        match self.index.get(key) {
            Some(&position) => self.entries[position].1 += count,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), count));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.index.get(key).map(|&position| self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
    }
}

impl<K: AsRef<str>> FromIterator<(K, u64)> for FrequencyTally {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut tally = Self::new();
        for (key, count) in iter {
            tally.add(key.as_ref(), count);
        }
        tally
    }
}
