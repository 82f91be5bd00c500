use std::collections::HashSet;

use log::debug;

use super::{ActiveNameSet, Category, Picker, WordPool};
use crate::{error::*, words};

/// Random draws tried before falling back to a sweep of the whole space
pub const DEFAULT_RETRIES: usize = 16;
/// Largest numeric suffix tried once every combination is taken
pub const DEFAULT_MAX_SUFFIX: u32 = 9999;

/// Composes display names such as `CrimsonFox` from a list of word pools.
///
/// One word is drawn from each pool and the words are joined in pool order.
/// `allocate` never touches the active set; the caller inserts the returned
/// name under the same lock it held while allocating.
#[derive(Clone, Debug)]
pub struct NameGenerator {
    pools: Vec<WordPool>,
    /// Index of the first occurrence of each word, per pool. Sweeps walk these
    /// so a repeated word is only looked up once.
    distinct: Vec<Vec<usize>>,
    retries: usize,
    max_suffix: u32,
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::from_pools(vec![
            WordPool::builtin(Category::Adjective, words::ADJECTIVES),
            WordPool::builtin(Category::Noun, words::NOUNS),
        ])
    }
}

impl NameGenerator {
    pub fn new(pools: Vec<WordPool>) -> Result<Self> {
        if pools.is_empty() {
            return Err(Error::InvalidPool("no word pools configured".to_owned()));
        }

        Ok(Self::from_pools(pools))
    }

    fn from_pools(pools: Vec<WordPool>) -> Self {
        let distinct = pools
            .iter()
            .map(|pool| {
                let mut seen = HashSet::new();
                (0..pool.len())
                    .filter(|&index| seen.insert(pool.get(index)))
                    .collect()
            })
            .collect();

        Self {
            pools,
            distinct,
            retries: DEFAULT_RETRIES,
            max_suffix: DEFAULT_MAX_SUFFIX,
        }
    }

    pub fn with_retries(mut self, retries: usize) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_max_suffix(mut self, max_suffix: u32) -> Self {
        self.max_suffix = max_suffix;
        self
    }

    pub fn pools(&self) -> &[WordPool] {
        &self.pools
    }

    /// Number of distinct unsuffixed combinations, saturating at `usize::MAX`
    pub fn capacity(&self) -> usize {
        self.distinct
            .iter()
            .fold(1usize, |acc, words| acc.saturating_mul(words.len()))
    }

    /// Produce a name that is not in `active`.
    ///
    /// Tries `retries` random draws, then sweeps every combination in order,
    /// then appends `2..=max_suffix` to one random draw, then to every
    /// combination in sweep order. Fails with `NamePoolExhausted` only when
    /// all of that is taken.
    ///
    /// Sweeps stop at the first free name and never repeat a candidate, so the
    /// number of lookups stays within `retries + max_suffix + active.len() + 1`.
    /// The full suffixed space is only walked when it is really exhausted.
    pub fn allocate<A, P>(&self, active: &A, picker: &mut P) -> Result<String>
    where
        A: ActiveNameSet + ?Sized,
        P: Picker + ?Sized,
    {
        for _ in 0..self.retries {
            let candidate = self.draw(picker);
            if !active.contains(&candidate) {
                return Ok(candidate);
            }
        }

        if let Some(name) = self.sweep(active) {
            debug!("{} draws collided, swept to `{}`", self.retries, name);
            return Ok(name);
        }

        let base = self.draw(picker);
        let suffixed = (2..=self.max_suffix)
            .map(|suffix| format!("{}{}", base, suffix))
            .find(|candidate| !active.contains(candidate))
            .or_else(|| self.sweep_suffixed(active));
        match suffixed {
            Some(name) => {
                debug!(
                    "all {} combinations taken, suffixed to `{}`",
                    self.capacity(),
                    name
                );
                Ok(name)
            }
            None => Err(Error::NamePoolExhausted {
                retries: self.retries,
                max_suffix: self.max_suffix,
            }),
        }
    }

    /// Give `name` back. Releasing a name that is not active is a no-op.
    pub fn release<A>(&self, active: &mut A, name: &str)
    where
        A: ActiveNameSet + ?Sized,
    {
        active.remove(name);
    }

    fn draw<P: Picker + ?Sized>(&self, picker: &mut P) -> String {
        self.pools
            .iter()
            .map(|pool| pool.get(picker.pick(pool.len())))
            .collect()
    }

    /// Size of the space a sweep walks, `None` if it does not fit in a `usize`
    fn sweep_len(&self) -> Option<usize> {
        self.distinct
            .iter()
            .try_fold(1usize, |acc, words| acc.checked_mul(words.len()))
    }

    /// First free combination in index order, last pool varying fastest
    fn sweep<A: ActiveNameSet + ?Sized>(&self, active: &A) -> Option<String> {
        (0..self.sweep_len()?)
            .map(|index| self.compose(index))
            .find(|candidate| !active.contains(candidate))
    }

    /// First free suffixed combination, lowest suffix first
    fn sweep_suffixed<A: ActiveNameSet + ?Sized>(&self, active: &A) -> Option<String> {
        let total = self.sweep_len()?;
        (2..=self.max_suffix)
            .flat_map(|suffix| (0..total).map(move |index| (index, suffix)))
            .map(|(index, suffix)| format!("{}{}", self.compose(index), suffix))
            .find(|candidate| !active.contains(candidate))
    }

    fn compose(&self, mut index: usize) -> String {
        let mut parts = vec![""; self.pools.len()];
        let slots = parts.iter_mut().zip(&self.pools).zip(&self.distinct);
        for ((part, pool), words) in slots.rev() {
            *part = pool.get(words[index % words.len()]);
            index /= words.len();
        }
        parts.concat()
    }
}
