use std::collections::VecDeque;

use crate::grid::Position;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    /// True if turning from `self` to `other` would be a 180-degree turn.
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!((self, other), (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right))
    }

    pub fn head_char(&self) -> char {
        match self {
            Up => '↑',
            Down => '↓',
            Left => '←',
            Right => '→',
        }
    }
}

/// The player's actor. Head at the front of `body`, tail at the back.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    pub fn new(head: Position, direction: Direction) -> Self {
        Snake { body: VecDeque::from([head]), direction }
    }

    /// Build a snake from explicit segments, head first. Returns `None` for an
    /// empty body.
    pub fn from_segments<I>(segments: I, direction: Direction) -> Option<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Snake { body, direction })
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Includes the tail, even though it may be vacated on the next step.
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn next_head(&self) -> Position {
        self.head().moved_by(self.direction.delta())
    }

    pub fn push_head(&mut self, new_head: Position) {
        self.body.push_front(new_head);
    }

    pub fn drop_tail(&mut self) -> Option<Position> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }

    /// Reversals are ignored; returns whether the heading was accepted.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if self.direction.is_opposite(new_direction) {
            return false;
        }
        self.direction = new_direction;
        true
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Up.is_opposite(Down));
        assert!(Down.is_opposite(Up));
        assert!(Left.is_opposite(Right));
        assert!(Right.is_opposite(Left));

        assert!(!Up.is_opposite(Left));
        assert!(!Right.is_opposite(Right));
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut snake = Snake::new(Position::new(5, 5), Right);

        assert!(!snake.set_direction(Left));
        assert_eq!(snake.direction(), Right);

        assert!(snake.set_direction(Up));
        assert_eq!(snake.direction(), Up);

        assert!(snake.set_direction(Up));
        assert_eq!(snake.direction(), Up);
    }

    #[test]
    fn test_move_and_grow() {
        let mut snake = Snake::new(Position::new(5, 5), Right);

        let next = snake.next_head();
        assert_eq!(next, Position::new(6, 5));

        snake.push_head(next);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.segments().last(), Some(&Position::new(5, 5)));

        snake.push_head(snake.next_head());
        assert_eq!(snake.drop_tail(), Some(Position::new(5, 5)));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position::new(7, 5));
    }

    #[test]
    fn test_single_segment_keeps_its_body() {
        let mut snake = Snake::new(Position::new(2, 2), Down);
        assert_eq!(snake.drop_tail(), None);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_from_segments() {
        assert!(Snake::from_segments(Vec::new(), Up).is_none());

        let snake = Snake::from_segments(
            vec![Position::new(5, 5), Position::new(5, 6), Position::new(6, 6)],
            Up,
        )
        .unwrap();
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.segments().last(), Some(&Position::new(6, 6)));
        assert!(snake.occupies(Position::new(5, 6)));
        assert!(!snake.occupies(Position::new(7, 7)));
    }
}
