use std::cmp::{Ordering, Reverse};

use tracing::{debug, trace};

use crate::{config::TopKConfig, counter::FrequencyTable, heap::BoundedMinHeap};

/// How words with equal counts are ranked against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Count only. Which tied word survives depends on table iteration order.
    Arbitrary,
    /// The lexicographically smaller word ranks higher.
    #[default]
    Lexicographic,
    /// The word that appeared earlier in the input ranks higher.
    FirstSeen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum TieKey<'a> {
    CountOnly,
    Word(Reverse<&'a str>),
    Position(Reverse<usize>),
}

/// A word and its count, ordered by count and then by the tie-break key.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub word: &'a str,
    pub count: usize,
    tie: TieKey<'a>,
}

impl<'a> Candidate<'a> {
    fn new(word: &'a str, count: usize, first_seen: usize, tie_break: TieBreak) -> Self {
        let tie = match tie_break {
            TieBreak::Arbitrary => TieKey::CountOnly,
            TieBreak::Lexicographic => TieKey::Word(Reverse(word)),
            TieBreak::FirstSeen => TieKey::Position(Reverse(first_seen)),
        };

        Self { word, count, tie }
    }
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count.cmp(&other.count).then_with(|| self.tie.cmp(&other.tie))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

pub struct Selector {
    config: TopKConfig,
}

impl Selector {
    pub fn new(config: TopKConfig) -> Self {
        Self { config }
    }

    /// Picks the `k` most frequent words of `table`, most frequent first.
    pub fn select<'a>(&self, table: &FrequencyTable<'a>) -> Vec<Candidate<'a>> {
        let k = self.config.k();
        let tie_break = self.config.tie_break();
        let mut heap = BoundedMinHeap::new(k.min(table.len()));

        for (word, freq) in table.iter() {
            let candidate = Candidate::new(word, freq.count, freq.first_seen, tie_break);
            if let Some(displaced) = heap.push(candidate) {
                trace!(word = displaced.word, count = displaced.count, "candidate displaced");
            }
        }

        let result = heap.into_descending_vec();
        debug!(k, selected = result.len(), ?tie_break, "selected top words");
        result
    }
}
