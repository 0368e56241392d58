use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use hashbrown::HashSet;

use crate::*;

impl Board {
    /// Left-click semantics on a single cell.
    ///
    /// - flagged: no effect
    /// - hidden mine: [`RevealOutcome::Mine`]
    /// - hidden zero: flood fill
    /// - hidden number: reveals just that cell
    /// - revealed number: chord
    /// - revealed zero: no effect
    ///
    /// Does not touch game status, the caller decides what a mine means.
    pub fn reveal_cell(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = self[coords];

        Ok(if cell.is_flagged() {
            RevealOutcome::NoOp
        } else if cell.is_revealed() {
            self.chord(coords)
        } else {
            match cell.value() {
                CellValue::Mine => RevealOutcome::Mine(coords),
                CellValue::Count(0) => RevealOutcome::cleared(self.flood_fill(coords)),
                CellValue::Count(count) => {
                    self.reveal_safe(coords);
                    log::debug!("Revealed {:?} showing {}", coords, count);
                    RevealOutcome::cleared(BTreeSet::from([coords]))
                }
            }
        })
    }

    /// Reveals the connected zero region containing `origin` plus every cell bordering it.
    ///
    /// The region is collected first with an explicit work list, each cell is queued at most once. Zeros revealed by
    /// earlier moves still belong to the region. Flagged cells are neither revealed nor expanded through. Returns the
    /// newly revealed cells.
    pub(crate) fn flood_fill(&mut self, origin: Coord2) -> BTreeSet<Coord2> {
        let mut revealed = BTreeSet::new();
        if !self[origin].is_hidden() || !self[origin].value().is_zero() {
            return revealed;
        }

        let mut visited = HashSet::new();
        visited.insert(origin);
        let mut to_visit = VecDeque::from([origin]);
        let mut region = Vec::new();

        while let Some(visit_coords) = to_visit.pop_front() {
            region.push(visit_coords);
            for pos in self.neighbors(visit_coords) {
                let cell = self[pos];
                if !cell.is_flagged() && cell.value().is_zero() && visited.insert(pos) {
                    to_visit.push_back(pos);
                }
            }
        }
        log::trace!("Flood fill from {:?} found {} zero cells", origin, region.len());

        for zero_coords in region {
            if self.reveal_safe(zero_coords) {
                revealed.insert(zero_coords);
            }
            // neighbors of a zero are never mines
            for pos in self.neighbors(zero_coords) {
                if self.reveal_safe(pos) {
                    log::trace!("Flood revealed border {:?}", pos);
                    revealed.insert(pos);
                }
            }
        }

        log::debug!("Flood fill from {:?} revealed {} cells", origin, revealed.len());
        revealed
    }
}
