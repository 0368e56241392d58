use alloc::collections::BTreeSet;

use crate::*;

impl Board {
    /// Re-click on a revealed number.
    ///
    /// Does nothing unless the number of flagged neighbors equals the cell's count. When it does, every neighbor is
    /// checked in [`neighbors_of`] order and the first unflagged mine or flagged safe cell is reported as
    /// [`RevealOutcome::Mine`]. Otherwise all unflagged safe neighbors are revealed, zeros cascade like a flood fill.
    pub fn chord(&mut self, coords: Coord2) -> RevealOutcome {
        let cell = self[coords];
        let count = match cell.value() {
            CellValue::Count(count) if cell.is_revealed() && count > 0 => count,
            _ => return RevealOutcome::NoOp,
        };

        let flagged = self.count_flagged_neighbors(coords);
        if flagged != count {
            log::debug!(
                "Chord at {:?} ignored, {} flags around a {}",
                coords,
                flagged,
                count
            );
            return RevealOutcome::NoOp;
        }

        if let Some(blamed) = self.first_misflagged_neighbor(coords) {
            log::debug!("Chord at {:?} failed on {:?}", coords, blamed);
            return RevealOutcome::Mine(blamed);
        }

        let mut revealed = BTreeSet::new();
        for pos in self.neighbors(coords) {
            let neighbor = self[pos];
            if !neighbor.is_hidden() {
                continue;
            }
            match neighbor.value() {
                CellValue::Mine => {}
                CellValue::Count(0) => revealed.append(&mut self.flood_fill(pos)),
                CellValue::Count(_) => {
                    if self.reveal_safe(pos) {
                        revealed.insert(pos);
                    }
                }
            }
        }

        log::debug!("Chord at {:?} revealed {} cells", coords, revealed.len());
        RevealOutcome::cleared(revealed)
    }

    fn first_misflagged_neighbor(&self, coords: Coord2) -> Option<Coord2> {
        self.neighbors(coords).into_iter().find(|&pos| {
            let neighbor = self[pos];
            neighbor.value().is_mine() != neighbor.is_flagged()
        })
    }
}
