use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of cards, each symbol held by exactly [`PAIR_SIZE`] cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridState {
    cards: Array2<Card>,
    side: Coord,
}

impl GridState {
    /// Face-down grid in deck order, call [`GridState::shuffle_and_reset`] before play.
    pub fn new(side: Coord) -> Result<Self> {
        let total = mult(side, side);
        if total % PAIR_SIZE as CellIndex != 0 {
            return Err(GameError::OddCellCount);
        }

        let deck = pair_deck(total / PAIR_SIZE as CellIndex);
        let cards = Array2::from_shape_fn((side, side).to_nd_index(), |(row, col)| {
            Card::new(deck[row * usize::from(side) + col])
        });
        Ok(Self { cards, side })
    }

    /// Reassigns every symbol from a fresh uniform permutation and turns all cards face-down.
    pub fn shuffle_and_reset<R: Rng>(&mut self, rng: &mut R) {
        let deck = shuffled_deck(self.symbol_count(), rng);
        for (card, value) in self.cards.iter_mut().zip(deck) {
            *card = Card::new(value);
        }
        log::trace!("Shuffled {} cards", self.len());
    }

    pub fn side(&self) -> Coord {
        self.side
    }

    pub fn len(&self) -> CellIndex {
        mult(self.side, self.side)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn symbol_count(&self) -> SymbolId {
        self.len() / PAIR_SIZE as CellIndex
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < self.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn card(&self, index: CellIndex) -> Option<Card> {
        let index = self.validate_index(index).ok()?;
        Some(self.cards[self.nd_index(index)])
    }

    pub fn value(&self, index: CellIndex) -> Option<SymbolId> {
        self.card(index).map(|card| card.value)
    }

    pub fn view(&self, index: CellIndex) -> Option<CellView> {
        self.card(index).map(Card::view)
    }

    /// Cards in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    pub fn matched_count(&self) -> CellIndex {
        self.cards
            .iter()
            .filter(|card| card.matched)
            .count()
            .try_into()
            .unwrap_or(CellIndex::MAX)
    }

    pub fn flip(&mut self, index: CellIndex) -> Result<()> {
        let card = self.card_mut(index)?;
        if !card.is_selectable() {
            return Err(GameError::InvalidTransition);
        }
        card.flipped = true;
        Ok(())
    }

    pub fn unflip(&mut self, index: CellIndex) -> Result<()> {
        let card = self.card_mut(index)?;
        if card.matched {
            return Err(GameError::InvalidTransition);
        }
        card.flipped = false;
        Ok(())
    }

    pub fn mark_matched(&mut self, index: CellIndex) -> Result<()> {
        let card = self.card_mut(index)?;
        card.flipped = true;
        card.matched = true;
        Ok(())
    }

    /// Whether every card is matched, vacuously true for an empty grid.
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|card| card.matched)
    }

    fn card_mut(&mut self, index: CellIndex) -> Result<&mut Card> {
        let index = self.validate_index(index)?;
        let nd_index = self.nd_index(index);
        Ok(&mut self.cards[nd_index])
    }

    fn nd_index(&self, index: CellIndex) -> [usize; 2] {
        index_to_coords(index, self.side).to_nd_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn shuffled(side: Coord, seed: u64) -> GridState {
        let mut grid = GridState::new(side).unwrap();
        grid.shuffle_and_reset(&mut SmallRng::seed_from_u64(seed));
        grid
    }

    fn sorted_values(grid: &GridState) -> Vec<SymbolId> {
        let mut values: Vec<_> = grid.iter().map(|card| card.value).collect();
        values.sort_unstable();
        values
    }

    #[test]
    fn rejects_odd_cell_count() {
        assert_eq!(GridState::new(3), Err(GameError::OddCellCount));
        assert_eq!(GridState::new(5), Err(GameError::OddCellCount));
    }

    #[test]
    fn shuffle_places_each_symbol_twice_for_even_sizes() {
        for side in [2, 4, 6, 8, 10] {
            let grid = shuffled(side, u64::from(side));
            assert_eq!(sorted_values(&grid), pair_deck(grid.symbol_count()));
            assert!(grid.iter().all(|card| !card.flipped && !card.matched));
        }
    }

    #[test]
    fn default_grid_has_eight_pairs() {
        let grid = shuffled(4, 1);
        assert_eq!(grid.len(), 16);
        assert_eq!(grid.symbol_count(), 8);
    }

    #[test]
    fn shuffle_and_reset_clears_flags() {
        let mut grid = shuffled(4, 3);
        grid.flip(0).unwrap();
        grid.mark_matched(1).unwrap();

        grid.shuffle_and_reset(&mut SmallRng::seed_from_u64(4));

        assert_eq!(grid.matched_count(), 0);
        assert!(grid.iter().all(|card| card.view() == CellView::FaceDown));
    }

    #[test]
    fn flip_rejects_face_up_and_matched_cards() {
        let mut grid = shuffled(2, 9);
        grid.flip(0).unwrap();
        assert_eq!(grid.flip(0), Err(GameError::InvalidTransition));

        grid.mark_matched(1).unwrap();
        assert_eq!(grid.flip(1), Err(GameError::InvalidTransition));
        assert_eq!(grid.unflip(1), Err(GameError::InvalidTransition));
        assert_eq!(grid.view(1).map(CellView::is_face_down), Some(false));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut grid = shuffled(2, 0);
        assert_eq!(grid.flip(4), Err(GameError::InvalidIndex));
        assert_eq!(grid.card(4), None);
        assert!(grid.iter().all(Card::is_selectable));
    }

    #[test]
    fn unflip_turns_card_face_down() {
        let mut grid = shuffled(2, 5);
        grid.flip(2).unwrap();
        grid.unflip(2).unwrap();
        assert_eq!(grid.view(2), Some(CellView::FaceDown));
    }

    #[test]
    fn mark_matched_keeps_card_face_up() {
        let mut grid = shuffled(2, 6);
        let value = grid.value(3).unwrap();
        grid.flip(3).unwrap();
        grid.mark_matched(3).unwrap();
        let card = grid.card(3).unwrap();
        assert!(card.flipped && card.matched);
        assert_eq!(grid.view(3), Some(CellView::Matched(value)));
    }

    #[test]
    fn all_matched_only_when_every_card_is() {
        let mut grid = shuffled(2, 8);
        for index in 0..3 {
            grid.mark_matched(index).unwrap();
            assert!(!grid.all_matched());
        }
        grid.mark_matched(3).unwrap();
        assert!(grid.all_matched());
    }

    #[test]
    fn empty_grid_is_trivially_matched() {
        let grid = shuffled(0, 0);
        assert!(grid.is_empty());
        assert!(grid.all_matched());
    }
}
