mod generator;
mod picker;
mod pool;

pub use generator::{NameGenerator, DEFAULT_MAX_SUFFIX, DEFAULT_RETRIES};
pub use picker::{Picker, RandomPicker};
pub use pool::{Category, WordPool};

#[cfg(test)]
pub(crate) use picker::ScriptedPicker;

use std::collections::HashSet;

/// The names currently bound to live connections, as seen by the generator.
///
/// The generator only reads it; whoever owns the set does the insert, and must
/// do it in the same critical section as the `allocate` call.
pub trait ActiveNameSet {
    fn contains(&self, name: &str) -> bool;

    /// Insert `name` unless it is present. Returns `false` if it was.
    fn insert_if_absent(&mut self, name: &str) -> bool;

    /// Returns `false` if `name` was not present.
    fn remove(&mut self, name: &str) -> bool;
}

impl ActiveNameSet for HashSet<String> {
    fn contains(&self, name: &str) -> bool {
        HashSet::contains(self, name)
    }

    fn insert_if_absent(&mut self, name: &str) -> bool {
        if HashSet::contains(self, name) {
            false
        } else {
            self.insert(name.to_owned())
        }
    }

    fn remove(&mut self, name: &str) -> bool {
        HashSet::remove(self, name)
    }
}
