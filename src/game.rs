use log::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::food::FoodSpawner;
use crate::snake::{Collision, Direction, Snake};
use crate::Coords;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    Crashed(Collision),
    Won,
}

impl TickOutcome {
    pub fn is_over(self) -> bool {
        matches!(self, TickOutcome::Crashed(_) | TickOutcome::Won)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellKind {
    Head,
    Body,
    Food,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub width: i32,
    pub length: i32,
    pub cells: Vec<(Coords, CellKind)>,
    pub score: u32,
    pub direction: Direction,
}

pub struct GameState {
    width: i32,
    length: i32,
    snake: Snake,
    food: Option<Coords>,
    spawner: FoodSpawner,
    direction: Direction, // requested for the next tick
    heading: Direction,   // direction of the last completed move
    score: u32,
    over: Option<TickOutcome>,
}

impl GameState {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let (width, length) = (config.width, config.length);
        let direction = Direction::Down;

        let mut snake = Snake::new((width / 2, length / 2));
        for _ in 1..config.initial_length {
            snake.grow(direction.delta());
        }

        let mut spawner = FoodSpawner::new(config.seed);
        let food = spawner.spawn(width, length, &snake);

        let over = if food.is_none() { Some(TickOutcome::Won) } else { None };
        info!("New {}x{} game, snake of length {}", width, length, snake.len());

        Ok(GameState { width, length, snake, food, spawner, direction, heading: direction, score: 0, over })
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Coords> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn board(&self) -> (i32, i32) {
        (self.width, self.length)
    }

    pub fn outcome(&self) -> Option<TickOutcome> {
        self.over
    }

    /// Requests a direction for the next tick. Turning straight back against
    /// the last move is ignored, however many keys came in since.
    pub fn steer(&mut self, direction: Direction) {
        if direction != self.heading.opposite() {
            self.direction = direction;
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if let Some(outcome) = self.over {
            return outcome;
        }

        let delta = self.direction.delta();
        let head = self.snake.head();
        let next = (head.0 + delta.0, head.1 + delta.1);

        let ate = self.food == Some(next);
        if ate {
            self.snake.grow(delta);
        } else {
            self.snake.advance(self.direction);
        }
        self.heading = self.direction;

        if let Some(collision) = self.snake.collision(self.width, self.length) {
            info!("Crashed into {:?} at {:?} with score {}", collision, self.snake.head(), self.score);
            return self.finish(TickOutcome::Crashed(collision));
        }

        if !ate {
            return TickOutcome::Moved;
        }

        self.score += 1;
        debug!("Ate food at {:?}, score {}", next, self.score);

        self.food = self.spawner.spawn(self.width, self.length, &self.snake);
        if self.food.is_none() {
            info!("Board filled, won with score {}", self.score);
            return self.finish(TickOutcome::Won);
        }

        TickOutcome::Ate
    }

    pub fn snapshot(&self) -> Snapshot {
        let in_bounds = |(x, y): Coords| x >= 0 && y >= 0 && x < self.width && y < self.length;
        let mut cells = Vec::with_capacity(self.snake.len() + 1);

        if let Some(food) = self.food {
            cells.push((food, CellKind::Food));
        }

        for (i, pos) in self.snake.body().enumerate() {
            let kind = if i == 0 { CellKind::Head } else { CellKind::Body };
            if in_bounds(pos) {
                cells.push((pos, kind));
            }
        }

        Snapshot {
            width: self.width,
            length: self.length,
            cells,
            score: self.score,
            direction: self.heading,
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn finish(&mut self, outcome: TickOutcome) -> TickOutcome {
        self.over = Some(outcome);
        outcome
    }

    #[cfg(test)]
    fn place_food(&mut self, pos: Coords) {
        self.food = Some(pos);
    }
}
