use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game session from start to finish.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    status: GameStatus,
    flagged_count: CellCount,
    triggered_mine: Option<Coord2>,
    seed: Option<u64>,
}

impl Game {
    /// Starts a game, drawing a fresh seed when none is given.
    #[cfg(feature = "std")]
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let seed = seed.unwrap_or_else(rand::random);
        Self::with_seed(config, seed)
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        let board = RandomMinefieldGenerator::new(seed).generate(config)?;
        log::debug!("New game with seed {}", seed);
        Ok(Self {
            seed: Some(seed),
            ..Self::from_board(board)
        })
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            status: Default::default(),
            flagged_count: 0,
            triggered_mine: None,
            seed: None,
        }
    }

    /// Throws the current session away and starts over with the same configuration.
    #[cfg(feature = "std")]
    pub fn restart(&mut self, seed: Option<u64>) -> Result<()> {
        *self = Self::new(self.config(), seed)?;
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn config(&self) -> GameConfig {
        self.board.game_config()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seed the board was generated from, if it was generated.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The mine (or wrong flag) that lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Mines minus placed flags, negative when over-flagged.
    pub fn remaining_flags(&self) -> i32 {
        i32::from(self.board.mine_count()) - i32::from(self.flagged_count)
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let cell = self.board.cell(coords)?;
        Ok(CellView::new(cell, self.triggered_mine == Some(coords)))
    }

    /// Primary click: reveal a hidden cell or chord a revealed number.
    pub fn left_click(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_in_progress()?;

        let outcome = self.board.reveal_cell(coords)?;
        match &outcome {
            RevealOutcome::NoOp => {}
            RevealOutcome::Mine(blamed) => self.lose(*blamed),
            RevealOutcome::Cleared(_) => {
                if self.board.all_safe_revealed() {
                    self.win();
                }
            }
        }
        Ok(outcome)
    }

    /// Secondary click, same as [`Game::toggle_flag`].
    pub fn right_click(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        self.toggle_flag(coords)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_in_progress()?;

        Ok(match self.board.toggle_flag(coords) {
            Some(true) => {
                self.flagged_count += 1;
                FlagOutcome::Placed
            }
            Some(false) => {
                self.flagged_count -= 1;
                FlagOutcome::Removed
            }
            None => FlagOutcome::NoChange,
        })
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::TerminalStateViolation)
        } else {
            Ok(())
        }
    }

    fn win(&mut self) {
        self.status = GameStatus::Won;
        log::debug!("Game won");
    }

    fn lose(&mut self, blamed: Coord2) {
        self.status = GameStatus::Lost;
        self.triggered_mine = Some(blamed);
        self.board.reveal_all();
        log::debug!("Game lost at {:?}", blamed);
    }
}
