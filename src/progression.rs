use std::time::Duration;

const POINTS_PER_LEVEL: u32 = 5;
const SPEEDUP_PER_LEVEL: f64 = 0.1;
const MIN_SPEED_FACTOR: f64 = 0.2;

pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// How many hazards the board should hold at `level`, if the level asks for
/// more than it started with. Only levels 2 and 3 raise the count.
pub fn hazard_quota(level: u32) -> Option<usize> {
    match level {
        2 => Some(2),
        3 => Some(3),
        _ => None,
    }
}

/// `base * max(1 - (level-1)*0.1, 0.2)`
pub fn tick_interval(base: Duration, level: u32) -> Duration {
    let factor = 1.0 - level.saturating_sub(1) as f64 * SPEEDUP_PER_LEVEL;
    base.mul_f64(factor.max(MIN_SPEED_FACTOR))
}
