use std::collections::{HashMap, HashSet};

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::snake::Snake;
use crate::Coords;

/// Random draws tried before falling back to listing the free cells.
const MAX_RANDOM_DRAWS: usize = 64;

/// A set of cells food must not be placed on.
pub trait Occupancy {
    fn is_occupied(&self, pos: Coords) -> bool;
    fn occupied_count(&self) -> usize;
}

impl Occupancy for Snake {
    fn is_occupied(&self, pos: Coords) -> bool {
        Snake::is_occupied(self, pos)
    }

    fn occupied_count(&self) -> usize {
        self.occupancy().len()
    }
}

impl Occupancy for HashSet<Coords> {
    fn is_occupied(&self, pos: Coords) -> bool {
        self.contains(&pos)
    }

    fn occupied_count(&self) -> usize {
        self.len()
    }
}

impl<V> Occupancy for HashMap<Coords, V> {
    fn is_occupied(&self, pos: Coords) -> bool {
        self.contains_key(&pos)
    }

    fn occupied_count(&self) -> usize {
        self.len()
    }
}

pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    /// Seeded spawners place food identically across runs.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        FoodSpawner { rng }
    }

    /// Picks a uniformly random free cell of the board, or `None` if every
    /// cell is taken.
    pub fn spawn<O>(&mut self, board_width: i32, board_length: i32, occupied: &O) -> Option<Coords>
    where
        O: Occupancy + ?Sized,
    {
        if board_width <= 0 || board_length <= 0 {
            return None;
        }

        let cells = board_width as usize * board_length as usize;
        if occupied.occupied_count() < cells {
            for _ in 0..MAX_RANDOM_DRAWS {
                let pos = (self.rng.gen_range(0..board_width), self.rng.gen_range(0..board_length));
                if !occupied.is_occupied(pos) {
                    debug!("Food spawned at {:?}", pos);
                    return Some(pos);
                }
            }
            warn!("No free cell after {} draws, scanning the board", MAX_RANDOM_DRAWS);
        }

        // Occupied cells may lie off the board, so the count alone can't prove it's full
        let free: Vec<Coords> = (0..board_length)
            .flat_map(|y| (0..board_width).map(move |x| (x, y)))
            .filter(|&pos| !occupied.is_occupied(pos))
            .collect();

        let res = free.choose(&mut self.rng).copied();
        match res {
            Some(pos) => debug!("Food spawned at {:?}", pos),
            None => debug!("Board is full, no food to spawn"),
        }
        res
    }
}
