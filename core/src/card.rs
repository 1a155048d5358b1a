use serde::{Deserialize, Serialize};

use crate::SymbolId;

/// Domain state of a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub value: SymbolId,
    pub flipped: bool,
    pub matched: bool,
}

impl Card {
    pub const fn new(value: SymbolId) -> Self {
        Self {
            value,
            flipped: false,
            matched: false,
        }
    }

    /// Face-down and still in play.
    pub const fn is_selectable(self) -> bool {
        !self.flipped && !self.matched
    }

    pub const fn view(self) -> CellView {
        if self.matched {
            CellView::Matched(self.value)
        } else if self.flipped {
            CellView::FaceUp(self.value)
        } else {
            CellView::FaceDown
        }
    }
}

/// Player-visible state of a cell, the symbol is only exposed once the card is up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    FaceDown,
    FaceUp(SymbolId),
    Matched(SymbolId),
}

impl CellView {
    pub const fn symbol(self) -> Option<SymbolId> {
        match self {
            Self::FaceDown => None,
            Self::FaceUp(value) | Self::Matched(value) => Some(value),
        }
    }

    pub const fn is_face_down(self) -> bool {
        matches!(self, Self::FaceDown)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::FaceDown
    }
}
