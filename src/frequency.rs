use std::collections::BTreeMap;

/// Occurrence count of every distinct symbol in an input.
///
/// Backed by an ordered map so that iteration is always in ascending symbol
/// order, which is the order leaves enter the tree builder's queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<Symbol> {
    counts: BTreeMap<Symbol, u64>,
}

impl<Symbol: Ord> FrequencyTable<Symbol> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    pub fn analyze(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut table = Self::new();
        for s in symbols {
            *table.counts.entry(s).or_default() += 1;
        }

        table
    }

    /// Adds the counts of `other` into `self`, e.g. when counting was split
    /// across shards of the same input.
    pub fn merge(&mut self, other: FrequencyTable<Symbol>) {
        for (s, count) in other.counts {
            *self.counts.entry(s).or_default() += count;
        }
    }

    pub fn get(&self, symbol: &Symbol) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    /// Total number of symbols counted, i.e. the input length.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, u64)> {
        self.counts.iter().map(|(s, count)| (s, *count))
    }
}

impl<Symbol: Ord> Default for FrequencyTable<Symbol> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Symbol: Ord> FromIterator<Symbol> for FrequencyTable<Symbol> {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self::analyze(iter)
    }
}
