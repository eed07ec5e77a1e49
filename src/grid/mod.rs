//! The 3×3 grid of face-up cards.
//!
//! Slots are addressed by `SlotPos` (row, col). Positions are plain values,
//! so presentation code carries them around instead of holding references
//! into the grid.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::error::GameError;

/// Rows and columns in the grid.
pub const GRID_DIM: usize = 3;

/// Number of slots in the grid.
pub const SLOT_COUNT: usize = GRID_DIM * GRID_DIM;

/// Position of a slot in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotPos {
    pub row: u8,
    pub col: u8,
}

impl SlotPos {
    /// Create a position. Bounds are checked when the position is used.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Validated position from untrusted coordinates.
    pub fn checked(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= GRID_DIM || col >= GRID_DIM {
            return Err(GameError::SlotOutOfBounds { row, col });
        }
        Ok(Self::new(row as u8, col as u8))
    }

    /// Position of the `index`-th slot in row-major order.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new((index / GRID_DIM) as u8, (index % GRID_DIM) as u8)
    }

    /// Row-major index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * GRID_DIM + self.col as usize
    }

    /// All positions in row-major order.
    pub fn all() -> impl Iterator<Item = SlotPos> {
        (0..SLOT_COUNT).map(SlotPos::from_index)
    }

    fn in_bounds(self) -> bool {
        (self.row as usize) < GRID_DIM && (self.col as usize) < GRID_DIM
    }
}

impl std::fmt::Display for SlotPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One grid position: its current card and whether it can still be played.
///
/// `active` only ever goes from true to false.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSlot {
    pub pos: SlotPos,
    card: Card,
    active: bool,
}

impl GridSlot {
    fn new(pos: SlotPos, card: Card) -> Self {
        Self {
            pos,
            card,
            active: true,
        }
    }

    /// The face-up card.
    #[must_use]
    pub fn card(&self) -> Card {
        self.card
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// The nine slots, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    slots: [GridSlot; SLOT_COUNT],
}

impl Grid {
    /// Build a grid from nine dealt cards, row-major. All slots start active.
    #[must_use]
    pub fn deal(cards: [Card; SLOT_COUNT]) -> Self {
        let mut index = 0;
        let slots = cards.map(|card| {
            let slot = GridSlot::new(SlotPos::from_index(index), card);
            index += 1;
            slot
        });
        Self { slots }
    }

    /// Slot at a position, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, pos: SlotPos) -> Option<&GridSlot> {
        if !pos.in_bounds() {
            return None;
        }
        self.slots.get(pos.index())
    }

    /// Slot at a position, failing for out-of-bounds positions.
    pub fn slot(&self, pos: SlotPos) -> Result<&GridSlot, GameError> {
        self.get(pos).ok_or(GameError::SlotOutOfBounds {
            row: pos.row as usize,
            col: pos.col as usize,
        })
    }

    /// Put a new card in a slot; deactivate it when `keep_active` is false.
    ///
    /// Returns the card that was replaced.
    pub fn replace(
        &mut self,
        pos: SlotPos,
        card: Card,
        keep_active: bool,
    ) -> Result<Card, GameError> {
        self.slot(pos)?;
        let slot = &mut self.slots[pos.index()];
        let previous = std::mem::replace(&mut slot.card, card);
        if !keep_active {
            slot.active = false;
        }
        Ok(previous)
    }

    /// All slots, row-major.
    pub fn iter(&self) -> impl Iterator<Item = &GridSlot> {
        self.slots.iter()
    }

    /// Slots that can still be selected.
    pub fn active_slots(&self) -> impl Iterator<Item = &GridSlot> {
        self.slots.iter().filter(|s| s.active)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_slots().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn sample_cards() -> [Card; SLOT_COUNT] {
        let mut i = 0;
        [(); SLOT_COUNT].map(|_| {
            i += 1;
            Card::new(Rank::ALL[i], Suit::Hearts)
        })
    }

    #[test]
    fn test_slot_pos_index_roundtrip() {
        for (i, pos) in SlotPos::all().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(SlotPos::from_index(i), pos);
        }
        assert_eq!(SlotPos::from_index(5), SlotPos::new(1, 2));
    }

    #[test]
    fn test_slot_pos_checked() {
        assert_eq!(SlotPos::checked(2, 2), Ok(SlotPos::new(2, 2)));
        assert_eq!(
            SlotPos::checked(3, 0),
            Err(GameError::SlotOutOfBounds { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_deal_row_major() {
        let cards = sample_cards();
        let grid = Grid::deal(cards);

        for (i, slot) in grid.iter().enumerate() {
            assert_eq!(slot.pos, SlotPos::from_index(i));
            assert_eq!(slot.card(), cards[i]);
            assert!(slot.is_active());
        }
        assert_eq!(grid.active_count(), SLOT_COUNT);
    }

    #[test]
    fn test_replace_and_deactivate() {
        let mut grid = Grid::deal(sample_cards());
        let pos = SlotPos::new(1, 1);
        let new_card = Card::new(Rank::Ace, Suit::Spades);

        let old = grid.replace(pos, new_card, true).unwrap();
        assert_eq!(old, sample_cards()[4]);
        assert!(grid.slot(pos).unwrap().is_active());

        grid.replace(pos, Card::new(Rank::Two, Suit::Spades), false).unwrap();
        assert!(!grid.slot(pos).unwrap().is_active());
        assert_eq!(grid.active_count(), SLOT_COUNT - 1);

        // Correct result on an inactive slot never reactivates it
        grid.replace(pos, new_card, true).unwrap();
        assert!(!grid.slot(pos).unwrap().is_active());
    }

    #[test]
    fn test_out_of_bounds_lookup() {
        let grid = Grid::deal(sample_cards());
        assert!(grid.get(SlotPos::new(0, 3)).is_none());
        assert!(grid.slot(SlotPos::new(3, 0)).is_err());
    }
}
