use rustc_hash::FxHashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frequency {
    pub count: usize,
    /// Index of the word's first occurrence in the input
    pub first_seen: usize,
}

/// Occurrence count per distinct word, borrowed from the input.
///
/// Counts always sum to the input length and no entry is ever zero.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable<'a> {
    entries: FxHashMap<&'a str, Frequency>,
    total: usize,
}

impl<'a> FrequencyTable<'a> {
    pub fn from_words<S: AsRef<str>>(words: &'a [S]) -> Self {
        let mut entries = FxHashMap::default();

        for (i, word) in words.iter().enumerate() {
            let entry = entries.entry(word.as_ref()).or_insert(Frequency {
                count: 0,
                first_seen: i,
            });
            entry.count += 1;
        }

        debug!(distinct = entries.len(), total = words.len(), "built frequency table");

        Self {
            entries,
            total: words.len(),
        }
    }

    pub fn count(&self, word: &str) -> Option<usize> {
        self.entries.get(word).map(|f| f.count)
    }

    pub fn get(&self, word: &str) -> Option<Frequency> {
        self.entries.get(word).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of words counted, duplicates included
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Frequency)> + '_ {
        self.entries.iter().map(|(&w, &f)| (w, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let words: [&str; 0] = [];
        let table = FrequencyTable::from_words(&words);
        assert!(table.is_empty());
        assert_eq!(0, table.total());
        assert_eq!(None, table.count("a"));
    }

    #[test]
    fn counts_every_word_once() {
        let words = ["a", "a", "b", "b", "b", "b", "c", "c", "c", "d"];
        let table = FrequencyTable::from_words(&words);

        assert_eq!(4, table.len());
        assert_eq!(Some(2), table.count("a"));
        assert_eq!(Some(4), table.count("b"));
        assert_eq!(Some(3), table.count("c"));
        assert_eq!(Some(1), table.count("d"));
        assert_eq!(None, table.count("e"));

        let sum: usize = table.iter().map(|(_, f)| f.count).sum();
        assert_eq!(words.len(), sum);
        assert_eq!(words.len(), table.total());
        assert!(table.iter().all(|(_, f)| f.count > 0));
    }

    #[test]
    fn case_sensitive() {
        let words = vec!["Word".to_string(), "word".to_string(), "word".to_string()];
        let table = FrequencyTable::from_words(&words);

        assert_eq!(Some(1), table.count("Word"));
        assert_eq!(Some(2), table.count("word"));
    }

    #[test]
    fn first_seen_is_first_occurrence() {
        let words = ["x", "y", "x", "z", "y"];
        let table = FrequencyTable::from_words(&words);

        assert_eq!(0, table.get("x").unwrap().first_seen);
        assert_eq!(1, table.get("y").unwrap().first_seen);
        assert_eq!(3, table.get("z").unwrap().first_seen);
    }
}
