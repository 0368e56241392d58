use ndarray::Array2;
use smallvec::SmallVec;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Up to eight neighbor positions, stored inline.
pub type Neighbors = SmallVec<[Coord2; 8]>;

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

/// Number of cells in a `rows x cols` grid.
pub const fn area(size: Coord2) -> CellCount {
    (size.0 as CellCount).saturating_mul(size.1 as CellCount)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        // dimensions always originate from a `Coord2`
        NeighborIter::new(index, (rows as Coord, cols as Coord))
    }
}

/// Row-major reading order of the 3x3 window around a cell, center excluded.
///
/// Chord verification blames the first mismatching neighbor in this order, so it is part of the public contract.
static DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Lazily walks the in-bounds neighbors of a cell in [`DISPLACEMENTS`] order.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    deltas: core::slice::Iter<'static, (i8, i8)>,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            deltas: DISPLACEMENTS.iter(),
        }
    }

    /// `center + delta`, or `None` when that leaves the grid.
    fn shifted(center: Coord2, bounds: Coord2, (dr, dc): (i8, i8)) -> Option<Coord2> {
        let row = center.0.checked_add_signed(dr).filter(|&row| row < bounds.0)?;
        let col = center.1.checked_add_signed(dc).filter(|&col| col < bounds.1)?;
        Some((row, col))
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let (center, bounds) = (self.center, self.bounds);
        self.deltas.find_map(|&delta| Self::shifted(center, bounds, delta))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.deltas.size_hint().1)
    }
}

/// The up to 8 orthogonal and diagonal positions around `(row, col)` that lie inside a `rows x cols` grid.
///
/// Out-of-bounds positions are dropped, there is no wrap-around.
pub fn neighbors_of(coords: Coord2, size: Coord2) -> Neighbors {
    NeighborIter::new(coords, size).collect()
}
