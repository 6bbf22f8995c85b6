use std::collections::HashMap;

use crate::chain::{SegmentChain, SegmentId};
use crate::Coords;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Grid step for this direction. `y` grows downwards.
    pub fn delta(self) -> Coords {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn head_char(self) -> char {
        match self {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

/// The snake: a segment chain plus an index from occupied cell to the
/// segment sitting there.
#[derive(Clone, Debug)]
pub struct Snake {
    chain: SegmentChain,
    occupancy: HashMap<Coords, SegmentId>,
}

impl Snake {
    pub fn new(head: Coords) -> Self {
        let chain = SegmentChain::new(head);
        let mut snake = Snake { chain, occupancy: HashMap::new() };
        snake.rebuild_occupancy();
        snake
    }

    pub fn head(&self) -> Coords {
        self.chain.position(self.chain.head())
    }

    pub fn tail(&self) -> Coords {
        self.chain.position(self.chain.tail())
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn chain(&self) -> &SegmentChain {
        &self.chain
    }

    /// Segment positions from head to tail.
    pub fn body(&self) -> impl Iterator<Item = Coords> + '_ {
        self.chain.iter()
    }

    pub fn occupancy(&self) -> &HashMap<Coords, SegmentId> {
        &self.occupancy
    }

    pub fn is_occupied(&self, pos: Coords) -> bool {
        self.occupancy.contains_key(&pos)
    }

    /// Moves the head by `delta` and fills the cell it left with a new
    /// segment, so the rest of the body stays where it is.
    pub fn grow(&mut self, delta: Coords) {
        let head_id = self.chain.head();
        let old_head = self.head();
        let new_head = (old_head.0 + delta.0, old_head.1 + delta.1);

        self.chain.set_position(head_id, new_head);
        let new_id = self.chain.insert_after_head(old_head);

        // The vacated cell now belongs to the new segment
        self.occupancy.insert(old_head, new_id);
        self.occupancy.entry(new_head).or_insert(head_id);
    }

    /// Follow-the-leader step: the head moves one cell towards `direction`
    /// and every other segment takes the cell its predecessor just left.
    pub fn advance(&mut self, direction: Direction) {
        let delta = direction.delta();
        let ids: Vec<SegmentId> = self.chain.ids().collect();

        let mut vacated = self.head();
        self.chain.set_position(ids[0], (vacated.0 + delta.0, vacated.1 + delta.1));

        for &id in &ids[1..] {
            let current = self.chain.position(id);
            self.chain.set_position(id, vacated);
            vacated = current;
        }

        self.rebuild_occupancy();
    }

    pub fn check_collision(&self, board_width: i32, board_length: i32) -> bool {
        self.collision(board_width, board_length).is_some()
    }

    pub fn collision(&self, board_width: i32, board_length: i32) -> Option<Collision> {
        let (x, y) = self.head();

        if x < 0 || y < 0 || x >= board_width || y >= board_length {
            return Some(Collision::Wall);
        }

        // The head only owns its cell in the index when no other segment is there
        match self.occupancy.get(&(x, y)) {
            Some(&id) if id != self.chain.head() => Some(Collision::Body),
            _ => None,
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn rebuild_occupancy(&mut self) {
        self.occupancy.clear();

        for id in self.chain.ids().skip(1) {
            self.occupancy.insert(self.chain.position(id), id);
        }

        let head_id = self.chain.head();
        self.occupancy.entry(self.chain.position(head_id)).or_insert(head_id);
    }
}
