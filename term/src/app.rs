use std::io::{BufRead, Write};

use sweeper_core::{Game, GameError, GameStatus, RevealOutcome};

use crate::command::{Command, HELP};
use crate::render::render;

/// Line-driven game loop over any reader and writer.
pub struct App<R, W> {
    game: Game,
    input: R,
    output: W,
}

enum Flow {
    Continue,
    Quit,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{HELP}")?;
        loop {
            write!(self.output, "{}", render(&self.game))?;

            if self.game.is_finished() {
                if self.ask_play_again()? {
                    self.new_game()?;
                    continue;
                }
                return Ok(());
            }

            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            match line.parse::<Command>() {
                Ok(command) => {
                    if let Flow::Quit = self.update(command)? {
                        return Ok(());
                    }
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn update(&mut self, command: Command) -> anyhow::Result<Flow> {
        log::debug!("{:?}", command);
        let result = match command {
            Command::Open(coords) => self.game.left_click(coords).map(|outcome| {
                if let RevealOutcome::Cleared(cells) = &outcome {
                    log::debug!("{} cells revealed", cells.len());
                }
            }),
            Command::Flag(coords) => self.game.right_click(coords).map(|_| ()),
            Command::NewGame => {
                self.new_game()?;
                Ok(())
            }
            Command::Help => {
                writeln!(self.output, "{HELP}")?;
                Ok(())
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        if let Err(err) = result {
            self.report(err)?;
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, err: GameError) -> anyhow::Result<()> {
        log::warn!("Move rejected: {}", err);
        writeln!(self.output, "{err}")?;
        Ok(())
    }

    fn new_game(&mut self) -> anyhow::Result<()> {
        self.game.restart(None)?;
        if let Some(seed) = self.game.seed() {
            log::info!("Started new game, seed {}", seed);
        }
        Ok(())
    }

    fn ask_play_again(&mut self) -> anyhow::Result<bool> {
        let prompt = match self.game.status() {
            GameStatus::Won => "You win! Play again? [y/n] ",
            _ => "You lost, play again? [y/n] ",
        };
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let Some(answer) = self.read_line()? else {
                return Ok(false);
            };
            match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => continue,
            }
        }
    }

    /// `None` on end of input.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use sweeper_core::{Board, GameConfig};

    fn play(game: Game, script: &str) -> (Game, String) {
        let mut output = Vec::new();
        let mut app = App::new(game, Cursor::new(script.to_string()), &mut output);
        app.run().unwrap();
        let game = app.game().clone();
        (game, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winning_game_offers_replay() {
        let game = Game::with_seed(GameConfig::new((3, 3), 0).unwrap(), 1).unwrap();

        let (game, output) = play(game, "o 0 0\nn\n");

        assert_eq!(game.status(), GameStatus::Won);
        assert!(output.contains("You win! Play again?"));
    }

    #[test]
    fn losing_game_reports_loss() {
        let game = Game::from_board(Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap());

        let (game, output) = play(game, "o 0 0\nno\n");

        assert_eq!(game.status(), GameStatus::Lost);
        assert!(output.contains("You lost, play again?"));
    }

    #[test]
    fn replay_starts_a_fresh_game() {
        let game = Game::from_board(Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap());

        let (game, _) = play(game, "o 0 0\ny\nq\n");

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.config(), GameConfig::new((2, 2), 1).unwrap());
        assert!(game.seed().is_some());
    }

    #[test]
    fn errors_are_printed_and_play_continues() {
        let game = Game::from_board(Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap());

        let (game, output) = play(game, "o 5 5\nzap\nf 0 0\n");

        assert!(output.contains("Coordinates are outside the board"));
        assert!(output.contains("unknown command `zap`"));
        assert_eq!(game.remaining_flags(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
    }
}
