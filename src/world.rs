use crate::grid::{Grid, Position};
use crate::progression::level_for_score;
use crate::snake::{Direction, Snake};

/// What the actor ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
    Hazard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver(Collision),
    /// The player ended the round from the keyboard.
    Forfeited,
}

/// Complete state of one round. Built fresh at start and on every restart.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub snake: Snake,
    /// `None` only after a re-placement ran out of attempts.
    pub food: Option<Position>,
    pub hazards: Vec<Position>,
    pub score: u32,
    pub level: u32,
    pub status: Status,
    pub grid: Grid,
}

impl World {
    /// An empty board with the actor seeded just left of and above center,
    /// heading right. Food and hazards are placed by the engine.
    pub fn new(width: u16, height: u16) -> Self {
        let grid = Grid::new(width, height);
        let start = Position::new(grid.width() / 2 - 1, grid.height() / 2 - 1);

        World {
            snake: Snake::new(start, Direction::Right),
            food: None,
            hazards: Vec::new(),
            score: 0,
            level: level_for_score(0),
            status: Status::Running,
            grid,
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self.status, Status::Running)
    }

    pub fn is_on_hazard(&self, pos: Position) -> bool {
        self.hazards.contains(&pos)
    }

    /// Free means: not on the actor (tail included), not on a hazard, and
    /// inside the frame. Food cells count as free.
    pub fn is_free(&self, pos: Position) -> bool {
        !self.snake.occupies(pos) && !self.is_on_hazard(pos) && !self.grid.is_out_of_bounds(pos)
    }

    /// Classifies what the actor would hit at `pos`, if anything.
    pub fn collision_at(&self, pos: Position) -> Option<Collision> {
        if self.grid.is_out_of_bounds(pos) {
            Some(Collision::Wall)
        } else if self.snake.occupies(pos) {
            Some(Collision::SelfCollision)
        } else if self.is_on_hazard(pos) {
            Some(Collision::Hazard)
        } else {
            None
        }
    }

    /// Changes heading while running; reversals are ignored.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.is_over() {
            return false;
        }
        self.snake.set_direction(direction)
    }
}
