use rand::{rngs::StdRng, SeedableRng};

use crate::config::{ConfigError, GameConfig};
use crate::grid::Position;
use crate::placement::{place_food, place_hazard, PlacementError};
use crate::progression::{hazard_quota, level_for_score};
use crate::world::{Collision, Status, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { new_head: Position, old_tail: Option<Position> },
    Ate { new_head: Position },
    Crashed(Collision),
    /// The world was already over; nothing happened.
    Idle,
}

/// What one call to `advance` did.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub outcome: MoveOutcome,
    pub level_changed: bool,
    /// Placements that ran out of attempts this tick. Not fatal.
    pub failures: Vec<PlacementError>,
}

/// Advances worlds one tick at a time. Holds the configuration and the RNG
/// used for placement; the world itself is plain data.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Rejects boards too small to hold an interior cell.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(GameEngine { config, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A fresh round: seeded actor, one food item and one hazard. Placement
    /// failures are returned alongside the world.
    pub fn new_world(&mut self) -> (World, Vec<PlacementError>) {
        let mut world = World::new(self.config.width, self.config.height);
        let mut failures = vec![];

        if let Err(e) = place_food(&mut world, &mut self.rng) {
            failures.push(e);
        }
        if let Err(e) = place_hazard(&mut world, &mut self.rng) {
            failures.push(e);
        }

        (world, failures)
    }

    /// One tick of play. Collisions are checked against the body before it
    /// moves, so stepping onto the current tail is fatal.
    pub fn advance(&mut self, world: &mut World) -> TickReport {
        let mut failures = vec![];

        if world.is_over() {
            return TickReport { outcome: MoveOutcome::Idle, level_changed: false, failures };
        }

        let level = level_for_score(world.score);
        let level_changed = level != world.level;
        world.level = level;

        if world.food.is_none() {
            if let Err(e) = place_food(world, &mut self.rng) {
                failures.push(e);
            }
        }

        if let Some(quota) = hazard_quota(level) {
            if world.hazards.len() < quota {
                if let Err(e) = place_hazard(world, &mut self.rng) {
                    failures.push(e);
                }
            }
        }

        let new_head = world.snake.next_head();

        if let Some(collision) = world.collision_at(new_head) {
            world.status = Status::GameOver(collision);
            return TickReport { outcome: MoveOutcome::Crashed(collision), level_changed, failures };
        }

        world.snake.push_head(new_head);

        let outcome = if world.food == Some(new_head) {
            world.score += 1;
            if let Err(e) = place_food(world, &mut self.rng) {
                world.food = None;
                failures.push(e);
            }
            MoveOutcome::Ate { new_head }
        } else {
            let old_tail = world.snake.drop_tail();
            MoveOutcome::Moved { new_head, old_tail }
        };

        TickReport { outcome, level_changed, failures }
    }
}
