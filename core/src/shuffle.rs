use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::*;

/// Every symbol in `0..symbol_count` repeated [`PAIR_SIZE`] times, in ascending order.
pub fn pair_deck(symbol_count: SymbolId) -> Vec<SymbolId> {
    (0..symbol_count)
        .flat_map(|value| core::iter::repeat_n(value, PAIR_SIZE))
        .collect()
}

/// A freshly shuffled deck for `symbol_count` pairs.
pub fn shuffled_deck<R: Rng>(symbol_count: SymbolId, rng: &mut R) -> Vec<SymbolId> {
    let mut deck = pair_deck(symbol_count);
    deck.shuffle(rng);
    deck
}
