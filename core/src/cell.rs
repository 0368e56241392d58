use serde::{Deserialize, Serialize};

/// Latent content of a cell, fixed once the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Mine,
    /// Number of mines among the neighbors, `0..=8`.
    Count(u8),
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Count(0))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum Cover {
    Hidden,
    Flagged,
    Revealed,
}

/// One grid position: its latent value plus what the player has done to it.
///
/// A cell is never revealed and flagged at the same time, and a revealed cell stays revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    value: CellValue,
    cover: Cover,
}

impl Cell {
    pub const fn new(value: CellValue) -> Self {
        Self {
            value,
            cover: Cover::Hidden,
        }
    }

    pub const fn value(self) -> CellValue {
        self.value
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self.cover, Cover::Revealed)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self.cover, Cover::Flagged)
    }

    /// Neither revealed nor flagged.
    pub const fn is_hidden(self) -> bool {
        matches!(self.cover, Cover::Hidden)
    }

    /// Flips the flag on an unrevealed cell, returns the new flag state or `None` if the cell is revealed.
    pub(crate) fn toggle_flag(&mut self) -> Option<bool> {
        match self.cover {
            Cover::Hidden => {
                self.cover = Cover::Flagged;
                Some(true)
            }
            Cover::Flagged => {
                self.cover = Cover::Hidden;
                Some(false)
            }
            Cover::Revealed => None,
        }
    }

    /// Returns whether the cell changed.
    pub(crate) fn reveal(&mut self) -> bool {
        let changed = !self.is_revealed();
        self.cover = Cover::Revealed;
        changed
    }
}

/// What a presentation layer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayValue {
    Hidden,
    Flag,
    /// Revealed safe cell, `0` is drawn blank.
    Number(u8),
    Mine,
    /// The mine, or wrongly flagged cell, that ended the game.
    Exploded,
}

/// Read-only snapshot of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub revealed: bool,
    pub flagged: bool,
    pub display: DisplayValue,
}

impl CellView {
    pub(crate) fn new(cell: Cell, exploded: bool) -> Self {
        let display = match (cell.cover, cell.value) {
            (Cover::Hidden, _) => DisplayValue::Hidden,
            (Cover::Flagged, _) => DisplayValue::Flag,
            (Cover::Revealed, _) if exploded => DisplayValue::Exploded,
            (Cover::Revealed, CellValue::Mine) => DisplayValue::Mine,
            (Cover::Revealed, CellValue::Count(count)) => DisplayValue::Number(count),
        };
        Self {
            revealed: cell.is_revealed(),
            flagged: cell.is_flagged(),
            display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_toggles_only_while_unrevealed() {
        let mut cell = Cell::new(CellValue::Count(2));

        assert_eq!(cell.toggle_flag(), Some(true));
        assert!(cell.is_flagged());
        assert_eq!(cell.toggle_flag(), Some(false));
        assert!(cell.is_hidden());

        assert!(cell.reveal());
        assert_eq!(cell.toggle_flag(), None);
        assert!(cell.is_revealed());
        assert!(!cell.is_flagged());
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut cell = Cell::new(CellValue::Count(0));

        assert!(cell.reveal());
        assert!(!cell.reveal());
        assert!(cell.is_revealed());
    }

    #[test]
    fn view_reports_display_value() {
        let mut mine = Cell::new(CellValue::Mine);
        assert_eq!(CellView::new(mine, false).display, DisplayValue::Hidden);
        mine.toggle_flag();
        assert_eq!(CellView::new(mine, false).display, DisplayValue::Flag);
        mine.toggle_flag();
        mine.reveal();
        assert_eq!(CellView::new(mine, false).display, DisplayValue::Mine);
        assert_eq!(CellView::new(mine, true).display, DisplayValue::Exploded);

        let mut three = Cell::new(CellValue::Count(3));
        three.reveal();
        let view = CellView::new(three, false);
        assert!(view.revealed);
        assert!(!view.flagged);
        assert_eq!(view.display, DisplayValue::Number(3));
    }
}
