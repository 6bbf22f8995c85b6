use std::{thread::sleep, time::{Duration, Instant}};

use log::{error, info};

use crate::config::Config;
use crate::error::Result;
use crate::game::{GameState, TickOutcome};
use crate::input::{command_for, is_ctrl_c, Command};
use crate::snake::{Collision, Direction::{self, *}};
use crate::term::TermManager;

const POLL_INTERVAL_MS: u64 = 5;

/// Terminal cells are taller than wide, so vertical steps wait a bit longer.
const VERTICAL_SLOWDOWN_PCT: u64 = 135;

pub struct SnakeApp {
    config: Config,
    term: TermManager,
    paused: bool,
}

impl SnakeApp {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let term = TermManager::new(config.width, config.length)?;
        Ok(SnakeApp { config, term, paused: false })
    }

    /// Runs games until the player quits. The terminal is restored even if
    /// a game fails.
    pub fn run(&mut self) -> Result<()> {
        self.term.setup()?;
        let res = self.run_games();
        keep_first_error(res, self.term.restore())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn run_games(&mut self) -> Result<()> {
        if !self.show_intro()? {
            return Ok(());
        }

        while self.play()? {}

        info!("Player quit");
        Ok(())
    }

    fn show_intro(&mut self) -> Result<bool> {
        self.term.clear()?;
        self.term.draw_borders()?;
        self.term.show_message(&[
            "Arrow keys or WASD to move",
            "Esc to pause",
            "q or CTRL+C to quit",
            "",
            "Press any key to begin"
        ])?;

        let key = self.term.read_key_blocking()?;
        self.term.hide_message()?;
        Ok(command_for(&key) != Some(Command::Quit))
    }

    /// Plays one game. Returns whether the player wants another.
    fn play(&mut self) -> Result<bool> {
        let mut game = GameState::new(&self.config)?;
        self.paused = false;

        self.term.clear()?;
        self.term.draw_borders()?;
        self.term.draw_snapshot(&game.snapshot(), false)?;

        let mut last_step = Instant::now();

        let outcome = loop {
            sleep(Duration::from_millis(POLL_INTERVAL_MS));

            for key_ev in self.term.read_key_events_queue()? {
                match command_for(&key_ev) {
                    Some(Command::Quit) => return Ok(false),
                    Some(Command::Pause) => self.toggle_pause()?,
                    Some(Command::Move(dir)) if !self.paused => game.steer(dir),
                    _ => {}
                }
            }

            if self.paused || last_step.elapsed() < step_interval(self.config.tick_ms, game.heading()) {
                continue;
            }
            last_step = Instant::now();

            let outcome = game.tick();
            self.term.draw_snapshot(&game.snapshot(), matches!(outcome, TickOutcome::Crashed(_)))?;

            if outcome.is_over() {
                break outcome;
            }
        };

        self.game_over(outcome, game.score())?;

        // Any key but quit starts the next game
        let key = self.term.read_key_blocking()?;
        Ok(!is_ctrl_c(&key) && command_for(&key) != Some(Command::Quit))
    }

    fn game_over(&mut self, outcome: TickOutcome, score: u32) -> Result<()> {
        let s = match outcome {
            TickOutcome::Won => "You won!",
            TickOutcome::Crashed(Collision::Wall) => "You hit a wall!",
            TickOutcome::Crashed(Collision::Body) => "You hit yourself!",
            _ => "Game over!",
        };

        info!("Game over: {:?}, score {}", outcome, score);

        self.term.show_message(&[
            s,
            &*format!("Score: {}", score),
            "",
            "Press any key to play again,",
            "or q to quit."
        ])
    }

    fn toggle_pause(&mut self) -> Result<()> {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or q to quit"])?;
        } else {
            self.term.hide_message()?;
        }

        self.paused = !self.paused;
        Ok(())
    }
}

/// A failed restore is only reported when the game itself went fine.
fn keep_first_error(game: Result<()>, restore: Result<()>) -> Result<()> {
    if let Err(err) = restore {
        error!("Failed to restore the terminal: {}", err);
        game?;
        return Err(err);
    }
    game
}

/// Delay before the next step, going by the direction the snake last moved in.
fn step_interval(tick_ms: u64, heading: Direction) -> Duration {
    let ms = match heading {
        Up | Down => (tick_ms * VERTICAL_SLOWDOWN_PCT + 99) / 100,
        Left | Right => tick_ms,
    };
    Duration::from_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn game_error_wins_over_restore_error() {
        let game = Err(Error::InvalidConfig("game".into()));
        let restore = Err(Error::InvalidConfig("restore".into()));

        match keep_first_error(game, restore) {
            Err(Error::InvalidConfig(msg)) => assert_eq!(msg, "game"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn restore_error_surfaces_after_a_clean_game() {
        let restore = Err(Error::InvalidConfig("restore".into()));
        assert!(matches!(keep_first_error(Ok(()), restore), Err(Error::InvalidConfig(_))));
        assert!(keep_first_error(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn vertical_steps_are_slower() {
        assert_eq!(step_interval(100, Left), Duration::from_millis(100));
        assert_eq!(step_interval(100, Right), Duration::from_millis(100));
        assert_eq!(step_interval(100, Up), Duration::from_millis(135));
        assert_eq!(step_interval(100, Down), Duration::from_millis(135));
    }

    #[test]
    fn pending_turn_does_not_change_the_pace() {
        let mut game = GameState::new(&Config::with_board(10, 10)).unwrap();
        game.steer(Left);

        // Still moving down until the next tick
        assert_eq!(step_interval(100, game.heading()), Duration::from_millis(135));
        game.tick();
        assert_eq!(step_interval(100, game.heading()), Duration::from_millis(100));
    }
}
