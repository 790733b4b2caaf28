use std::collections::VecDeque;

use super::*;

/// Test generator that hands out a fixed list of symbols in order.
#[derive(Clone, Debug)]
pub(crate) struct ScriptedGenerator<S> {
    alphabet: Vec<S>,
    script: VecDeque<S>,
}

impl<S: Clone> ScriptedGenerator<S> {
    pub(crate) fn new(alphabet: Vec<S>, script: impl IntoIterator<Item = S>) -> Self {
        Self {
            alphabet,
            script: script.into_iter().collect(),
        }
    }
}

impl ScriptedGenerator<Tile> {
    pub(crate) fn tiles(script: impl IntoIterator<Item = Tile>) -> Self {
        Self::new(Tile::ALL.to_vec(), script)
    }
}

impl<S: Clone> PatternGenerator<S> for ScriptedGenerator<S> {
    fn alphabet(&self) -> &[S] {
        &self.alphabet
    }

    fn next_symbol(&mut self) -> S {
        self.script.pop_front().expect("script ran out of symbols")
    }
}
