pub mod app;
pub mod chain;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod snake;
pub mod term;

pub use config::Config;
pub use error::{Error, Result};

pub type TermInt = u16;

/// Grid coordinates `(x, y)`. Signed so a head that just left the board can
/// still be represented.
pub type Coords = (i32, i32);
