use crate::config::{ConfigError, GameConfig};
use crate::engine::{GameEngine, TickReport};
use crate::placement::PlacementError;
use crate::snake::Direction;
use crate::world::{Collision, Status, World};

/// Discrete player requests, already decoded from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Restart,
    /// Ends the round while playing, leaves the game from the end screen.
    Quit,
    /// Leaves the game from any state.
    Interrupt,
}

/// What the host loop should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Continue,
    /// A new round started; carries placement failures from building it.
    Restarted(Vec<PlacementError>),
    Exit,
}

/// RUNNING <-> GAME_OVER lifecycle around a single world.
pub struct SnakeGame {
    engine: GameEngine,
    world: World,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Result<(Self, Vec<PlacementError>), ConfigError> {
        let mut engine = GameEngine::new(config)?;
        let (world, failures) = engine.new_world();
        Ok((SnakeGame { engine, world }, failures))
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub fn is_over(&self) -> bool {
        self.world.is_over()
    }

    pub fn tick(&mut self) -> TickReport {
        self.engine.advance(&mut self.world)
    }

    pub fn apply(&mut self, command: Command) -> Flow {
        match (self.world.status, command) {
            (_, Command::Interrupt) => Flow::Exit,

            (Status::Running, Command::Turn(dir)) => {
                self.world.set_direction(dir);
                Flow::Continue
            }
            (Status::Running, Command::Quit) => {
                self.world.status = Status::Forfeited;
                Flow::Continue
            }
            (Status::Running, Command::Restart) => Flow::Continue,

            (Status::GameOver(_) | Status::Forfeited, Command::Restart) => Flow::Restarted(self.restart()),
            (Status::GameOver(_) | Status::Forfeited, Command::Quit) => Flow::Exit,
            (Status::GameOver(_) | Status::Forfeited, Command::Turn(_)) => Flow::Continue,
        }
    }

    /// Throws the current world away and builds a fresh one with the same
    /// dimensions.
    fn restart(&mut self) -> Vec<PlacementError> {
        let (world, failures) = self.engine.new_world();
        self.world = world;
        failures
    }
}
