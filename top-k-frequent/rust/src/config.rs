use std::num::NonZeroUsize;

use crate::error::{Result, TopKError};
use crate::select::TieBreak;

/// Parameters for a single top-k query.
///
/// ```
/// use top_k_frequent::{TieBreak, TopKConfig};
///
/// let config = TopKConfig::new(3).unwrap().with_tie_break(TieBreak::FirstSeen);
/// assert_eq!(3, config.k());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopKConfig {
    k: NonZeroUsize,
    tie_break: TieBreak,
}

impl TopKConfig {
    pub fn new(k: usize) -> Result<Self> {
        let k = NonZeroUsize::new(k).ok_or(TopKError::InvalidArgument { k })?;

        Ok(Self {
            k,
            tie_break: TieBreak::default(),
        })
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn k(&self) -> usize {
        self.k.get()
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}
