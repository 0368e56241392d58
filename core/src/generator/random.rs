use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Purely random generation, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        Board::generate(config, &mut rng)
    }
}

impl Board {
    /// Places `config.mines` mines uniformly at random, redrawing whenever a draw lands on an existing mine.
    ///
    /// Terminates because a valid config always leaves at least one safe cell.
    pub fn generate<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let (rows, cols) = config.size;
        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut mines_placed: CellCount = 0;
        let mut redraws: usize = 0;

        while mines_placed < config.mines {
            let coords: Coord2 = (rng.random_range(0..rows), rng.random_range(0..cols));
            let slot = &mut mine_mask[coords.to_nd_index()];
            if *slot {
                redraws += 1;
                continue;
            }
            *slot = true;
            mines_placed += 1;
        }

        let board = Self::from_mine_mask(&mine_mask)?;
        log::debug!(
            "Generated {}x{} board with {} mines ({} redraws)",
            rows,
            cols,
            board.mine_count(),
            redraws
        );
        log::trace!("Layout:\n{}", board);
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::default();
        let a = RandomMinefieldGenerator::new(7).generate(config).unwrap();
        let b = RandomMinefieldGenerator::new(7).generate(config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let config = GameConfig::default();
        let a = RandomMinefieldGenerator::new(1).generate(config).unwrap();
        let b = RandomMinefieldGenerator::new(2).generate(config).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn places_exact_mine_count() {
        let config = GameConfig::new((9, 9), 10).unwrap();
        let board = RandomMinefieldGenerator::new(42).generate(config).unwrap();
        let mines = board
            .iter_cells()
            .filter(|(_, cell)| cell.value().is_mine())
            .count();
        assert_eq!(mines, 10);
        assert_eq!(board.game_config(), config);
    }

    #[test]
    fn dense_board_leaves_one_safe_cell() {
        let config = GameConfig::new((3, 3), 8).unwrap();
        let board = RandomMinefieldGenerator::new(3).generate(config).unwrap();
        assert_eq!(board.safe_cell_count(), 1);
        let (_, safe) = board
            .iter_cells()
            .find(|(_, cell)| !cell.value().is_mine())
            .unwrap();
        assert!(matches!(safe.value(), CellValue::Count(3..=8)));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = GameConfig::new_unchecked((1, 1), 1);
        assert!(matches!(
            RandomMinefieldGenerator::new(0).generate(config),
            Err(GameError::InvalidConfiguration(_))
        ));
        let config = GameConfig::new_unchecked((0, 4), 0);
        assert!(matches!(
            RandomMinefieldGenerator::new(0).generate(config),
            Err(GameError::InvalidConfiguration(_))
        ));
    }
}
