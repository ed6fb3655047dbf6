use rand::Rng;

/// A cell on the board, in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn moved_by(&self, (dx, dy): (i32, i32)) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Board bounds. Row 0, row `height`, column 0 and column `width` belong to
/// the frame; everything strictly between them is playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        Grid { width: width as i32, height: height as i32 }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_out_of_bounds(&self, p: Position) -> bool {
        p.y <= 0 || p.y >= self.height || p.x <= 0 || p.x >= self.width
    }

    /// Uniform sample with x in [1, width-2] and y in [1, height-2].
    pub fn random_interior_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position {
            x: rng.gen_range(1..=self.width - 2),
            y: rng.gen_range(1..=self.height - 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_frame_cells_are_out_of_bounds() {
        let grid = Grid::new(40, 18);

        assert!(grid.is_out_of_bounds(Position::new(0, 5)));
        assert!(grid.is_out_of_bounds(Position::new(5, 0)));
        assert!(grid.is_out_of_bounds(Position::new(40, 5)));
        assert!(grid.is_out_of_bounds(Position::new(5, 18)));
        assert!(grid.is_out_of_bounds(Position::new(-1, -1)));
    }

    #[test]
    fn test_interior_cells_are_in_bounds() {
        let grid = Grid::new(40, 18);

        assert!(!grid.is_out_of_bounds(Position::new(1, 1)));
        assert!(!grid.is_out_of_bounds(Position::new(39, 17)));
        assert!(!grid.is_out_of_bounds(Position::new(19, 8)));
    }

    #[test]
    fn test_random_points_stay_in_sampling_range() {
        let grid = Grid::new(6, 5);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let p = grid.random_interior_point(&mut rng);
            assert!((1..=4).contains(&p.x), "x out of range: {:?}", p);
            assert!((1..=3).contains(&p.y), "y out of range: {:?}", p);
            assert!(!grid.is_out_of_bounds(p));
        }
    }

    #[test]
    fn test_moved_by() {
        let p = Position::new(3, 3);
        assert_eq!(p.moved_by((1, 0)), Position::new(4, 3));
        assert_eq!(p.moved_by((0, -1)), Position::new(3, 2));
    }
}
