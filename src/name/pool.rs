use std::{borrow::Cow, fmt};

use crate::error::*;

/// What a pool contributes to a composed name
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Category {
    Adjective,
    Noun,
    Custom(String),
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Adjective => write!(f, "adjective"),
            Category::Noun => write!(f, "noun"),
            Category::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// An ordered, immutable list of words forming one segment of a name.
///
/// Repeats are kept as they are, so a word listed twice is drawn twice as often.
#[derive(Clone, Debug)]
pub struct WordPool {
    category: Category,
    items: Vec<Cow<'static, str>>,
}

impl WordPool {
    /// Build a pool, rejecting empty pools and empty words
    pub fn new<I, S>(category: Category, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        let items: Vec<Cow<'static, str>> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return Err(Error::InvalidPool(format!("{} pool is empty", category)));
        }
        if let Some(pos) = items.iter().position(|word| word.is_empty()) {
            return Err(Error::InvalidPool(format!(
                "{} pool has an empty word at index {}",
                category, pos
            )));
        }

        Ok(Self { category, items })
    }

    /// Wrap one of the compiled-in lists in `crate::words`.
    pub(crate) fn builtin(category: Category, words: &'static [&'static str]) -> Self {
        debug_assert!(!words.is_empty() && words.iter().all(|w| !w.is_empty()));
        Self {
            category,
            items: words.iter().map(|&w| Cow::Borrowed(w)).collect(),
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn get(&self, index: usize) -> &str {
        &self.items[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|w| w.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words;

    #[test]
    fn rejects_empty_pool() {
        let err = WordPool::new(Category::Noun, Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidPool(_)));
    }

    #[test]
    fn rejects_empty_word() {
        let err = WordPool::new(Category::Adjective, vec!["Red", "", "Blue"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid word pool: adjective pool has an empty word at index 1"
        );
    }

    #[test]
    fn keeps_order_and_repeats() {
        let pool = WordPool::new(Category::Adjective, vec!["Rose", "Sand", "Rose"]).unwrap();
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec!["Rose", "Sand", "Rose"]);
        assert_eq!(pool.get(2), "Rose");
    }

    #[test]
    fn accepts_owned_words() {
        let pool =
            WordPool::new(Category::Custom("color".into()), vec!["Teal".to_owned()]).unwrap();
        assert_eq!(pool.category().to_string(), "color");
        assert_eq!(pool.get(0), "Teal");
    }

    #[test]
    fn builtin_lists_are_valid_pools() {
        for list in &[words::ADJECTIVES, words::NOUNS] {
            assert!(WordPool::new(Category::Noun, list.iter().copied()).is_ok());
        }
        // the adjective list carries repeats, e.g. "Rose"
        let roses = words::ADJECTIVES.iter().filter(|&&w| w == "Rose").count();
        assert!(roses > 1);
    }
}
