use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::engine::MoveOutcome;
use crate::game::{Flow, SnakeGame};
use crate::input::command_for_key;
use crate::placement::PlacementError;
use crate::progression::tick_interval;
use crate::render::Renderer;
use crate::term::TermManager;
use crate::world::Status;

/// Owns the single game instance and serializes the two event sources
/// (ticks and key presses) onto it.
pub struct App {
    game: SnakeGame,
    renderer: Renderer,
    interval: Duration,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate().context("Invalid game configuration")?;

        let (needed_w, needed_h) = config.required_terminal_size();
        let (term_w, term_h) = TermManager::size().context("Failed to read terminal size")?;
        if term_w < needed_w || term_h < needed_h {
            bail!("terminal is {}x{}, the board needs at least {}x{}", term_w, term_h, needed_w, needed_h);
        }

        let (game, failures) = SnakeGame::new(config).context("Invalid game configuration")?;
        log_failures(&failures);

        Ok(App {
            game,
            renderer: Renderer::new(TermManager::new()),
            interval: config.base_interval,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        self.renderer.setup().context("Failed to set up terminal")?;

        let result = self.run_game_loop().await;

        self.renderer.restore().context("Failed to restore terminal")?;

        result
    }

    async fn run_game_loop(&mut self) -> Result<()> {
        let config = *self.game.config();
        info!(width = config.width, height = config.height, interval_ms = self.interval.as_millis() as u64, "game started");

        let mut events = EventStream::new();
        let mut ticker = new_ticker(self.interval);

        self.repaint()?;

        loop {
            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) => {
                            let Some(command) = command_for_key(&key) else { continue };
                            let was_over = self.game.is_over();

                            match self.game.apply(command) {
                                Flow::Exit => {
                                    info!(score = self.game.world().score, "quit");
                                    return Ok(());
                                }
                                Flow::Restarted(failures) => {
                                    info!("restarted");
                                    log_failures(&failures);
                                    self.set_interval(config.base_interval, &mut ticker);
                                    self.repaint()?;
                                }
                                Flow::Continue => {
                                    if !was_over && self.game.is_over() {
                                        self.log_game_over();
                                        self.repaint()?;
                                    }
                                }
                            }
                        }
                        Some(Ok(Event::Resize(_, _))) => self.repaint()?,
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => return Ok(()),
                    }
                }

                _ = ticker.tick() => {
                    if !self.game.is_over() {
                        self.step(&mut ticker);
                    }
                    self.repaint()?;
                }
            }
        }
    }

    fn step(&mut self, ticker: &mut Interval) {
        let report = self.game.tick();
        log_failures(&report.failures);

        let level = self.game.world().level;
        if report.level_changed {
            info!(level, "level up");
            let base = self.game.config().base_interval;
            self.set_interval(tick_interval(base, level), ticker);
        }

        match report.outcome {
            MoveOutcome::Ate { new_head } => {
                debug!(x = new_head.x, y = new_head.y, score = self.game.world().score, "ate food");
            }
            MoveOutcome::Crashed(_) => self.log_game_over(),
            MoveOutcome::Moved { .. } | MoveOutcome::Idle => {}
        }
    }

    fn set_interval(&mut self, period: Duration, ticker: &mut Interval) {
        if period == self.interval {
            return;
        }
        debug!(from_ms = self.interval.as_millis() as u64, to_ms = period.as_millis() as u64, "tick interval changed");
        self.interval = period;
        *ticker = new_ticker(period);
    }

    fn repaint(&mut self) -> Result<()> {
        self.renderer.render(self.game.world()).context("Failed to draw frame")
    }

    fn log_game_over(&self) {
        let world = self.game.world();
        match world.status {
            Status::GameOver(cause) => info!(score = world.score, level = world.level, ?cause, "game over"),
            Status::Forfeited => info!(score = world.score, level = world.level, "round abandoned"),
            Status::Running => {}
        }
    }
}

/// First tick lands one full `period` from now, so swapping tickers
/// mid-game never fires two steps back to back.
fn new_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

fn log_failures(failures: &[PlacementError]) {
    for failure in failures {
        warn!(%failure, "placement skipped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fresh_ticker_waits_a_full_period() {
        let mut ticker = new_ticker(Duration::from_millis(200));
        let start = Instant::now();
        ticker.tick().await;
        let waited = start.elapsed();
        assert!(waited >= Duration::from_millis(200), "waited {:?}", waited);
        assert!(waited < Duration::from_millis(210), "waited {:?}", waited);
    }

    #[tokio::test(start_paused = true)]
    async fn test_swapped_ticker_keeps_spacing() {
        let mut ticker = new_ticker(Duration::from_millis(200));
        ticker.tick().await;
        ticker.tick().await;

        let last_tick = Instant::now();
        ticker = new_ticker(Duration::from_millis(180));
        ticker.tick().await;

        assert!(last_tick.elapsed() >= Duration::from_millis(180));
    }
}
