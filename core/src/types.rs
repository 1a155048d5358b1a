use core::time::Duration;

/// Single coordinate axis used for the grid side and row/column positions.
pub type Coord = u8;

/// Flat, row-major cell index into the grid.
pub type CellIndex = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Identifier of the symbol printed on a card.
pub type SymbolId = u16;

/// Host-supplied clock reading, measured from an arbitrary epoch chosen by the host.
pub type Timestamp = Duration;

/// How many cards share a symbol.
pub const PAIR_SIZE: usize = 2;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellIndex {
    let a = a as CellIndex;
    let b = b as CellIndex;
    a.saturating_mul(b)
}

/// Splits a flat index into `(row, col)` for a square grid of the given side.
pub const fn index_to_coords(index: CellIndex, side: Coord) -> Coord2 {
    let side = side as CellIndex;
    ((index / side) as Coord, (index % side) as Coord)
}

/// Inverse of [`index_to_coords`].
pub const fn coords_to_index((row, col): Coord2, side: Coord) -> CellIndex {
    (row as CellIndex) * (side as CellIndex) + (col as CellIndex)
}
