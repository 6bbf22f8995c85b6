use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

use crate::error::{Error, Result};

/// Largest board side we accept; keeps the board drawable in a terminal.
const MAX_SIDE: i32 = 200;

#[derive(Debug, Clone, Parser)]
#[command(name = "linked_snake", about = "Snake in the terminal")]
pub struct Config {
    /// Board width in cells
    #[arg(long, default_value_t = 20)]
    pub width: i32,

    /// Board length (height) in cells
    #[arg(long, default_value_t = 20)]
    pub length: i32,

    /// Milliseconds between game ticks
    #[arg(long, default_value_t = 120)]
    pub tick_ms: u64,

    /// Number of segments the snake starts with
    #[arg(long, default_value_t = 2)]
    pub initial_length: usize,

    /// Seed for food placement
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "snake.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 20,
            length: 20,
            tick_ms: 120,
            initial_length: 2,
            seed: None,
            log_file: PathBuf::from("snake.log"),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn with_board(width: i32, length: i32) -> Self {
        Config { width, length, ..Config::default() }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < 2 || self.length < 2 {
            return Err(Error::InvalidConfig(format!(
                "board must be at least 2x2, got {}x{}", self.width, self.length
            )));
        }

        if self.width > MAX_SIDE || self.length > MAX_SIDE {
            return Err(Error::InvalidConfig(format!(
                "board sides are capped at {}, got {}x{}", MAX_SIDE, self.width, self.length
            )));
        }

        if self.tick_ms == 0 {
            return Err(Error::InvalidConfig("tick interval must be positive".into()));
        }

        // The snake is laid out downwards from the center
        let room = (self.length - self.length / 2) as usize;
        if self.initial_length == 0 || self.initial_length > room {
            return Err(Error::InvalidConfig(format!(
                "initial length must be between 1 and {} on this board, got {}",
                room, self.initial_length
            )));
        }

        Ok(())
    }
}
