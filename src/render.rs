use std::io;

use crossterm::style::Color;

use crate::grid::Position;
use crate::term::{TermInt, TermManager};
use crate::world::{Collision, Status, World};

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = '●';
const HAZARD_CHAR: char = '✗';

const FRAME_COLOR: Color = Color::DarkGrey;
const SNAKE_COLOR: Color = Color::Red;
const FOOD_COLOR: Color = Color::Blue;
const HAZARD_COLOR: Color = Color::Magenta;
const TEXT_COLOR: Color = Color::White;

/// Paints a `World` onto the terminal. Never mutates the world.
pub struct Renderer {
    term: TermManager,
}

impl Renderer {
    pub fn new(term: TermManager) -> Self {
        Renderer { term }
    }

    pub fn setup(&mut self) -> io::Result<()> {
        self.term.setup()
    }

    pub fn restore(&mut self) -> io::Result<()> {
        self.term.restore()
    }

    pub fn render(&mut self, world: &World) -> io::Result<()> {
        match world.status {
            Status::Running => self.draw_board(world),
            ended => self.draw_game_over(world, ending_text(ended)),
        }
    }

    fn draw_board(&mut self, world: &World) -> io::Result<()> {
        let (right, bottom) = (world.grid.width() as TermInt, world.grid.height() as TermInt);

        self.term.clear()?;
        self.term.draw_borders(right, bottom, FRAME_COLOR)?;

        if let Some(food) = world.food {
            self.term.print_at(cell(food), FOOD_CHAR, FOOD_COLOR)?;
        }

        for hazard in &world.hazards {
            self.term.print_at(cell(*hazard), HAZARD_CHAR, HAZARD_COLOR)?;
        }

        for (i, segment) in world.snake.segments().enumerate() {
            let ch = if i == 0 { world.snake.direction().head_char() } else { SNAKE_BODY_CHAR };
            self.term.print_at(cell(*segment), ch, SNAKE_COLOR)?;
        }

        let status = format!("Score: {}  Level: {}", world.score, world.level);
        self.term.print_str_at((1, bottom + 1), &status, TEXT_COLOR)?;

        self.term.flush()
    }

    fn draw_game_over(&mut self, world: &World, reason: &str) -> io::Result<()> {
        let center_x = world.grid.width() as TermInt / 2;
        let center_y = world.grid.height() as TermInt / 2;

        let lines = [
            ("GAME OVER".to_string(), Color::Red),
            (reason.to_string(), Color::DarkGrey),
            (format!("Your score: {}", world.score), TEXT_COLOR),
            (format!("Your level: {}", world.level), TEXT_COLOR),
            (String::new(), TEXT_COLOR),
            ("Press R to restart".to_string(), Color::Green),
            ("Q or Esc to quit".to_string(), Color::DarkGrey),
        ];

        self.term.clear()?;
        self.term.show_message(&lines, center_x, center_y.saturating_sub(3))?;
        self.term.flush()
    }
}

fn cell(pos: Position) -> (TermInt, TermInt) {
    (pos.x.max(0) as TermInt, pos.y.max(0) as TermInt)
}

fn ending_text(status: Status) -> &'static str {
    match status {
        Status::Running => "",
        Status::GameOver(Collision::Wall) => "You hit the wall",
        Status::GameOver(Collision::SelfCollision) => "You bit yourself",
        Status::GameOver(Collision::Hazard) => "You ate malware",
        Status::Forfeited => "You gave up",
    }
}
