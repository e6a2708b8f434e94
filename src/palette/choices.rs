//! Non-empty static choice lists

/// A list that always holds at least one entry
///
/// The first entry is stored apart from the rest, so a pick can never miss
/// even when the index arrives out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choices<T: 'static> {
    first: T,
    rest: &'static [T],
}

impl<T: Copy + 'static> Choices<T> {
    /// Build a list from its first entry and any further entries
    pub const fn new(first: T, rest: &'static [T]) -> Self {
        Self { first, rest }
    }

    /// Number of entries, never zero
    pub const fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Always false; present for API symmetry with slices
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Entry at `index`, clamped to the last entry
    pub fn get(&self, index: usize) -> T {
        match index.checked_sub(1) {
            None => self.first,
            Some(offset) => self
                .rest
                .get(offset)
                .or_else(|| self.rest.last())
                .copied()
                .unwrap_or(self.first),
        }
    }

    /// First entry
    pub const fn first(&self) -> T {
        self.first
    }

    /// Second entry, or the first for single-entry lists
    pub fn second(&self) -> T {
        self.get(1)
    }

    /// Whether `value` is one of the entries
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.first == *value || self.rest.contains(value)
    }

    /// Iterate over all entries in order
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        std::iter::once(self.first).chain(self.rest.iter().copied())
    }
}

/// Build a [`Choices`] list from one or more expressions
#[macro_export]
macro_rules! choices {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::palette::Choices::new($first, &[$($rest),*])
    };
}
