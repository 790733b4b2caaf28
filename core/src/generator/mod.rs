use crate::*;
pub use random::*;

#[cfg(test)]
pub(crate) use scripted::*;

mod random;
#[cfg(test)]
mod scripted;

/// Source of the symbols a game asks the player to repeat.
pub trait PatternGenerator<S: Clone> {
    /// Every symbol this generator can produce.
    fn alphabet(&self) -> &[S];

    /// Draws one symbol from the alphabet.
    fn next_symbol(&mut self) -> S;

    /// Fresh pattern of `length` independent symbols.
    ///
    /// # Panics
    ///
    /// When `length` is zero.
    fn initial_pattern(&mut self, length: usize) -> Pattern<S> {
        assert!(length > 0, "initial pattern length must be at least 1");
        Pattern::from_symbols((0..length).map(|_| self.next_symbol()).collect())
    }

    /// Copy of `pattern` with one more symbol at the end.
    fn extend(&mut self, pattern: &Pattern<S>) -> Pattern<S> {
        let symbol = self.next_symbol();
        pattern.appended(symbol)
    }
}
