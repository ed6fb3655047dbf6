use std::fmt;

use rand::Rng;
use thiserror::Error;

use crate::grid::Position;
use crate::world::World;

pub const MAX_PLACEMENT_ATTEMPTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Food,
    Hazard,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Food => write!(f, "food"),
            Item::Hazard => write!(f, "hazard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no free cell for {item} after {attempts} attempts")]
    NoFreeCell { item: Item, attempts: usize },
}

/// Samples interior cells until one is free and differs from the current
/// food, giving up after `MAX_PLACEMENT_ATTEMPTS`.
fn find_free_cell<R: Rng + ?Sized>(world: &World, rng: &mut R, item: Item) -> Result<Position, PlacementError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let candidate = world.grid.random_interior_point(rng);

        if world.is_free(candidate) && world.food != Some(candidate) {
            return Ok(candidate);
        }
    }

    Err(PlacementError::NoFreeCell { item, attempts: MAX_PLACEMENT_ATTEMPTS })
}

/// Moves the food to a new free cell. On failure the food is left where it
/// was; callers that consumed it should clear it first.
pub fn place_food<R: Rng + ?Sized>(world: &mut World, rng: &mut R) -> Result<Position, PlacementError> {
    let pos = find_free_cell(world, rng, Item::Food)?;
    world.food = Some(pos);
    Ok(pos)
}

pub fn place_hazard<R: Rng + ?Sized>(world: &mut World, rng: &mut R) -> Result<Position, PlacementError> {
    let pos = find_free_cell(world, rng, Item::Hazard)?;
    world.hazards.push(pos);
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::{Direction, Snake};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_food_lands_on_free_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut world = World::new(40, 18);
        world.hazards.push(Position::new(3, 3));

        for _ in 0..200 {
            let previous = world.food;
            let food = place_food(&mut world, &mut rng).unwrap();

            assert_eq!(world.food, Some(food));
            assert_ne!(previous, Some(food));
            assert!(world.is_free(food));
        }
    }

    #[test]
    fn test_hazards_are_distinct() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut world = World::new(40, 18);
        place_food(&mut world, &mut rng).unwrap();

        for _ in 0..20 {
            place_hazard(&mut world, &mut rng).unwrap();
        }

        let food = world.food.unwrap();
        for (i, hazard) in world.hazards.iter().enumerate() {
            assert_ne!(*hazard, food);
            assert!(!world.snake.occupies(*hazard));
            assert!(!world.hazards[i + 1..].contains(hazard));
        }
    }

    #[test]
    fn test_full_board_gives_up() {
        let mut rng = StdRng::seed_from_u64(3);
        // 4x4 board: the interior sampling range is the 2x2 block at (1..=2, 1..=2).
        let mut world = World::new(4, 4);
        world.snake = Snake::from_segments(
            vec![Position::new(1, 1), Position::new(2, 1), Position::new(2, 2), Position::new(1, 2)],
            Direction::Up,
        )
        .unwrap();

        let err = place_hazard(&mut world, &mut rng).unwrap_err();
        assert_eq!(err, PlacementError::NoFreeCell { item: Item::Hazard, attempts: MAX_PLACEMENT_ATTEMPTS });
        assert!(world.hazards.is_empty());

        assert!(place_food(&mut world, &mut rng).is_err());
        assert_eq!(world.food, None);
    }

    #[test]
    fn test_error_message() {
        let err = PlacementError::NoFreeCell { item: Item::Food, attempts: 10 };
        assert_eq!(err.to_string(), "no free cell for food after 10 attempts");
    }
}
