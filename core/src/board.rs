use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::generator::classify;
use crate::*;

/// The grid of cells for one game. Dimensions and mine positions never change after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_safe: CellCount,
}

impl Board {
    /// Classifies a mine mask into a fresh, fully hidden board.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let size = (
            Coord::try_from(rows)
                .map_err(|_| GameError::InvalidConfiguration("too many rows"))?,
            Coord::try_from(cols)
                .map_err(|_| GameError::InvalidConfiguration("too many columns"))?,
        );
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        GameConfig::new(size, mine_count)?;

        Ok(Self {
            cells: classify(mine_mask),
            mine_count,
            revealed_safe: 0,
        })
    }

    /// Builds a board with mines at exactly the given positions, duplicates collapse.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(&mine_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mine_count)
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe
    }

    /// Every non-mine cell is revealed.
    pub fn all_safe_revealed(&self) -> bool {
        self.revealed_safe == self.safe_cell_count()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        neighbors_of(coords, self.size())
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub(crate) fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        self.cells
            .iter_neighbors(coords)
            .filter(|&pos| self[pos].is_flagged())
            .count() as u8
    }

    pub(crate) fn toggle_flag(&mut self, coords: Coord2) -> Option<bool> {
        self.cells[coords.to_nd_index()].toggle_flag()
    }

    /// Reveals a hidden, unflagged, safe cell. Returns whether anything changed.
    pub(crate) fn reveal_safe(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if !cell.is_hidden() || cell.value().is_mine() {
            return false;
        }
        cell.reveal();
        self.revealed_safe += 1;
        true
    }

    /// Uncovers the whole board for display once the game is lost, flags included.
    pub(crate) fn reveal_all(&mut self) {
        let mut revealed_safe = 0;
        for cell in self.cells.iter_mut() {
            cell.reveal();
            if !cell.value().is_mine() {
                revealed_safe += 1;
            }
        }
        self.revealed_safe = revealed_safe;
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// Dumps the latent values, `*` for mines.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let mut first = true;
            for cell in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                match cell.value() {
                    CellValue::Mine => f.write_str("*")?,
                    CellValue::Count(count) => write!(f, "{count}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn from_mine_coords_classifies_neighbors() {
        let board = Board::from_mine_coords((3, 3), &[(1, 1)]).unwrap();

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board[(1, 1)].value(), CellValue::Mine);
        for (coords, cell) in board.iter_cells() {
            if coords != (1, 1) {
                assert_eq!(cell.value(), CellValue::Count(1));
            }
        }
    }

    #[test]
    fn from_mine_coords_rejects_out_of_bounds() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::OutOfBounds)
        );
    }

    #[test]
    fn from_mine_coords_rejects_full_board() {
        assert!(matches!(
            Board::from_mine_coords((1, 2), &[(0, 0), (0, 1)]),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn duplicate_mines_collapse() {
        let board = Board::from_mine_coords((2, 2), &[(0, 0), (0, 0)]).unwrap();
        assert_eq!(board.mine_count(), 1);
        assert_eq!(board.safe_cell_count(), 3);
    }

    #[test]
    fn cell_lookup_checks_bounds() {
        let board = Board::from_mine_coords((2, 3), &[]).unwrap();
        assert!(board.cell((1, 2)).is_ok());
        assert_eq!(board.cell((2, 0)), Err(GameError::OutOfBounds));
        assert_eq!(board.cell((0, 3)), Err(GameError::OutOfBounds));
    }

    #[test]
    fn reveal_safe_counts_once_and_skips_mines() {
        let mut board = Board::from_mine_coords((1, 3), &[(0, 0)]).unwrap();

        assert!(!board.reveal_safe((0, 0)));
        assert!(board.reveal_safe((0, 1)));
        assert!(!board.reveal_safe((0, 1)));
        assert_eq!(board.revealed_safe_count(), 1);
        assert!(!board.all_safe_revealed());

        board.toggle_flag((0, 2));
        assert!(!board.reveal_safe((0, 2)));
    }

    #[test]
    fn reveal_all_uncovers_flags_and_mines() {
        let mut board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        board.toggle_flag((0, 1));

        board.reveal_all();

        assert!(board.iter_cells().all(|(_, cell)| cell.is_revealed()));
        assert!(board.iter_cells().all(|(_, cell)| !cell.is_flagged()));
        assert!(board.all_safe_revealed());
    }

    #[test]
    fn oversized_mine_count_does_not_underflow() {
        let board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let mut snapshot = serde_json::to_value(&board).unwrap();
        snapshot["mine_count"] = serde_json::json!(9);

        let board: Board = serde_json::from_value(snapshot).unwrap();

        assert_eq!(board.safe_cell_count(), 0);
        assert!(board.all_safe_revealed());
    }

    #[test]
    fn display_dumps_latent_values() {
        let board = Board::from_mine_coords((2, 3), &[(0, 0)]).unwrap();
        assert_eq!(board.to_string(), "* 1 0\n1 1 0\n");
    }
}
