use core::ops::Index;
use serde::{Deserialize, Serialize};

/// Ordered target sequence the player has to reproduce.
///
/// Patterns only ever grow: extending one produces a new pattern and leaves the original untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern<S> {
    symbols: Vec<S>,
}

impl<S> Pattern<S> {
    pub const fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    pub fn from_symbols(symbols: Vec<S>) -> Self {
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.symbols.get(index)
    }

    pub fn as_slice(&self) -> &[S] {
        &self.symbols
    }

    pub fn iter(&self) -> core::slice::Iter<'_, S> {
        self.symbols.iter()
    }

    /// Copy of this pattern with `symbol` added at the end.
    pub fn appended(&self, symbol: S) -> Self
    where
        S: Clone,
    {
        let mut symbols = Vec::with_capacity(self.symbols.len() + 1);
        symbols.extend_from_slice(&self.symbols);
        symbols.push(symbol);
        Self { symbols }
    }
}

impl<S> Default for Pattern<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Index<usize> for Pattern<S> {
    type Output = S;

    fn index(&self, index: usize) -> &Self::Output {
        &self.symbols[index]
    }
}

impl<S> From<Vec<S>> for Pattern<S> {
    fn from(symbols: Vec<S>) -> Self {
        Self::from_symbols(symbols)
    }
}

impl<'a, S> IntoIterator for &'a Pattern<S> {
    type Item = &'a S;
    type IntoIter = core::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tile::*;

    #[test]
    fn appended_leaves_source_untouched() {
        let pattern = Pattern::from_symbols(vec![Red, Blue]);

        let longer = pattern.appended(Yellow);

        assert_eq!(pattern.as_slice(), &[Red, Blue]);
        assert_eq!(longer.as_slice(), &[Red, Blue, Yellow]);
        assert_eq!(longer[2], Yellow);
    }

    #[test]
    fn empty_pattern_has_no_symbols() {
        let pattern: Pattern<crate::Tile> = Pattern::default();
        assert!(pattern.is_empty());
        assert_eq!(pattern.get(0), None);
    }
}
