//! The `k` most frequent words of a composition, most frequent first.
//!
//! Words are counted into a [`FrequencyTable`], then a [`BoundedMinHeap`]
//! of capacity `k` keeps the highest counts seen so far.
//!
//! ```
//! let composition = ["a", "a", "b", "b", "b", "b", "c", "c", "c", "d"];
//!
//! let top = top_k_frequent::top_k_frequent(&composition, 2).unwrap();
//! assert_eq!(vec!["b", "c"], top);
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod heap;
pub mod select;

pub use config::TopKConfig;
pub use counter::FrequencyTable;
pub use error::{Result, TopKError};
pub use heap::BoundedMinHeap;
pub use select::{Candidate, Selector, TieBreak};

/// Top `k` words of `words` using the default tie-break.
///
/// Fails with [`TopKError::InvalidArgument`] when `k` is 0, even for empty input.
pub fn top_k_frequent<S: AsRef<str>>(words: &[S], k: usize) -> Result<Vec<&str>> {
    let config = TopKConfig::new(k)?;
    Ok(top_k_frequent_with(words, &config))
}

pub fn top_k_frequent_with<'a, S: AsRef<str>>(words: &'a [S], config: &TopKConfig) -> Vec<&'a str> {
    ranked(words, config).into_iter().map(|(word, _)| word).collect()
}

/// Same selection as [`top_k_frequent_with`], paired with each word's count.
pub fn ranked<'a, S: AsRef<str>>(words: &'a [S], config: &TopKConfig) -> Vec<(&'a str, usize)> {
    if words.is_empty() {
        return Vec::new();
    }

    let table = FrequencyTable::from_words(words);
    Selector::new(*config)
        .select(&table)
        .into_iter()
        .map(|c| (c.word, c.count))
        .collect()
}
