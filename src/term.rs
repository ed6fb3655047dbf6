use std::io::{self, Stdout, Write, stdout};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

/// Owns stdout while the game is on screen. Drawing calls are queued and only
/// reach the terminal on `flush`.
pub struct TermManager {
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout(), active: false }
    }

    pub fn size() -> io::Result<Coords> {
        terminal::size()
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        self.active = true;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
    }

    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.stdout, style::ResetColor, terminal::Clear(ClearType::All))
    }

    pub fn print_at(&mut self, pos: Coords, ch: char, color: Color) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(color),
            style::Print(ch)
        )
    }

    pub fn print_str_at(&mut self, pos: Coords, text: &str, color: Color) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(color),
            style::Print(text)
        )
    }

    /// Box frame whose corners sit at (0, 0) and (`right`, `bottom`).
    pub fn draw_borders(&mut self, right: TermInt, bottom: TermInt, color: Color) -> io::Result<()> {
        for x in 1..right {
            self.print_at((x, 0), '─', color)?;
            self.print_at((x, bottom), '─', color)?;
        }

        for y in 1..bottom {
            self.print_at((0, y), '│', color)?;
            self.print_at((right, y), '│', color)?;
        }

        self.print_at((0, 0), '┌', color)?;
        self.print_at((right, 0), '┐', color)?;
        self.print_at((0, bottom), '└', color)?;
        self.print_at((right, bottom), '┘', color)
    }

    /// Prints `lines` centered horizontally on `center_x`, starting at row `top`.
    pub fn show_message(&mut self, lines: &[(String, Color)], center_x: TermInt, top: TermInt) -> io::Result<()> {
        for (i, (line, color)) in lines.iter().enumerate() {
            let half = (line.chars().count() / 2) as TermInt;
            let x = center_x.saturating_sub(half);
            self.print_str_at((x, top + i as TermInt), line, *color)?;
        }

        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        queue!(self.stdout, style::ResetColor)?;
        self.stdout.flush()
    }
}

impl Default for TermManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
