use anyhow::Context;
use clap::{Parser, ValueEnum};
use minedig_core::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Cells per side of the square board [default: 10]
    #[arg(short, long)]
    pub size: Option<Coord>,

    /// How many mines to hide [default: 10]
    #[arg(short, long)]
    pub mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(long)]
    pub seed: Option<u64>,

    /// How mines are spread over the board [default: rejection]
    #[arg(short, long, value_enum)]
    pub placement: Option<PlacementArg>,

    /// TOML file with defaults for the options above
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlacementArg {
    Rejection,
    Shuffle,
}

impl From<PlacementArg> for Placement {
    fn from(other: PlacementArg) -> Self {
        match other {
            PlacementArg::Rejection => Placement::Rejection,
            PlacementArg::Shuffle => Placement::Shuffle,
        }
    }
}

/// Contents of the optional config file, every key may be left out.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub size: Option<Coord>,
    pub mines: Option<CellCount>,
    pub seed: Option<u64>,
    pub placement: Option<Placement>,
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Everything needed to start a game, after merging flags over the config file.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    pub game: GameConfig,
    pub seed: Option<u64>,
    pub placement: Placement,
}

impl Settings {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file)
    }

    /// Command line flags win over file values, which win over the defaults.
    pub fn merge(args: &Args, file: FileConfig) -> anyhow::Result<Self> {
        let defaults = GameConfig::default();
        let size = args.size.or(file.size).unwrap_or(defaults.dim_size());
        let mines = args.mines.or(file.mines).unwrap_or(defaults.mines());
        let game = GameConfig::new(size, mines)
            .with_context(|| format!("Cannot place {mines} mines on a {size}x{size} board"))?;

        Ok(Self {
            game,
            seed: args.seed.or(file.seed),
            placement: args
                .placement
                .map(Placement::from)
                .or(file.placement)
                .unwrap_or_default(),
        })
    }

    pub fn generator(&self) -> RandomMineGenerator {
        let seed = self.seed.unwrap_or_else(rand::random);
        log::debug!("seed: {}", seed);
        RandomMineGenerator::new(seed, self.placement)
    }
}
