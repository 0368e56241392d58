//! Board settings, layered as: built-in defaults, then the TOML file, then CLI flags.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use sweeper_core::{CellCount, Coord, GameConfig};

/// Every field is optional so the same shape works for sparse TOML files and for flags.
#[derive(clap::Args, Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardOptions {
    /// Number of rows [default: 16]
    #[arg(long)]
    pub rows: Option<Coord>,

    /// Number of columns [default: 30]
    #[arg(long)]
    pub cols: Option<Coord>,

    /// Number of mines [default: 99]
    #[arg(short, long)]
    pub mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub game: GameConfig,
    pub seed: Option<u64>,
}

impl BoardOptions {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let options: Self = toml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        log::debug!("Loaded {:?} from {}", options, path.display());
        Ok(options)
    }

    /// Field-wise override, values set in `self` win.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            rows: self.rows.or(fallback.rows),
            cols: self.cols.or(fallback.cols),
            mines: self.mines.or(fallback.mines),
            seed: self.seed.or(fallback.seed),
        }
    }

    pub fn resolve(self) -> sweeper_core::Result<Settings> {
        let defaults = GameConfig::default();
        let size = (
            self.rows.unwrap_or(defaults.size.0),
            self.cols.unwrap_or(defaults.size.1),
        );
        let game = GameConfig::new(size, self.mines.unwrap_or(defaults.mines))?;
        Ok(Settings {
            game,
            seed: self.seed,
        })
    }
}
