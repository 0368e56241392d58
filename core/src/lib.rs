#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use alloc::collections::BTreeSet;
use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod chord;
mod engine;
mod error;
mod generator;
mod reveal;
mod types;

/// Board dimensions `(rows, cols)` and the number of mines to place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    /// Rejects empty boards and boards that would have no safe cell.
    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            log::warn!("Rejected board size {:?}", self.size);
            return Err(GameError::InvalidConfiguration(
                "rows and columns must be positive",
            ));
        }
        if self.mines >= self.total_cells() {
            log::warn!(
                "Rejected {} mines on a board of {} cells",
                self.mines,
                self.total_cells()
            );
            return Err(GameError::InvalidConfiguration(
                "mine count must be less than the number of cells",
            ));
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    /// 16 rows by 30 columns with 99 mines.
    fn default() -> Self {
        Self::new_unchecked((16, 30), 99)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Placed,
    Removed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Placed => true,
            Self::Removed => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoOp,
    /// Newly revealed cells.
    Cleared(BTreeSet<Coord2>),
    /// The game is lost, the position is the mine (or wrong flag) responsible.
    Mine(Coord2),
}

impl RevealOutcome {
    pub const fn has_update(&self) -> bool {
        use RevealOutcome::*;
        match self {
            NoOp => false,
            Cleared(_) => true,
            Mine(_) => true,
        }
    }

    pub(crate) fn cleared(cells: BTreeSet<Coord2>) -> Self {
        if cells.is_empty() {
            Self::NoOp
        } else {
            Self::Cleared(cells)
        }
    }
}

/// Used to merge outcomes when revealing several cells in one move
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            // the first mine wins
            (Mine(pos), _) => Mine(pos),
            (_, Mine(pos)) => Mine(pos),
            (Cleared(mut lhs), Cleared(mut rhs)) => {
                lhs.append(&mut rhs);
                Cleared(lhs)
            }
            (Cleared(cells), NoOp) => Cleared(cells),
            (NoOp, Cleared(cells)) => Cleared(cells),
            (NoOp, NoOp) => NoOp,
        }
    }
}
