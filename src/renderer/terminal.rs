//! Terminal output via crossterm

use std::io::{self, Stdout, Write, stdout};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{self, Color},
    terminal,
};

use super::canvas::{Canvas, Glyph};
use super::scene::draw_scene;
use crate::sim::GameState;

fn glyph_color(glyph: Glyph) -> Color {
    match glyph {
        Glyph::Empty => Color::Reset,
        Glyph::Water => Color::DarkBlue,
        Glyph::Tile => Color::DarkYellow,
        Glyph::Obstacle => Color::Red,
        Glyph::Player => Color::Green,
    }
}

/// Status line shown under the board
pub fn hud_line(state: &GameState) -> String {
    format!(
        "lives {}  level {}  steps {}  camera {}  |  arrows move, space jump, q quit",
        state.player.life,
        state.player.level,
        state.player.step_count,
        state.camera.mode.as_str()
    )
}

/// Undoes terminal setup on drop
///
/// Created as soon as raw mode is on, so a failure later in setup still
/// leaves the terminal usable.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            DisableMouseCapture,
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen,
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Owns the terminal while the game runs; restores it on drop
pub struct TerminalRenderer {
    guard: TerminalGuard<Stdout>,
    canvas: Canvas,
}

impl TerminalRenderer {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = TerminalGuard { out: stdout() };
        execute!(
            guard.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            EnableMouseCapture,
        )?;
        let (cols, rows) = terminal::size()?;
        log::debug!("Terminal {}x{}", cols, rows);
        Ok(Self {
            guard,
            canvas: Canvas::new(cols as usize, rows.saturating_sub(1) as usize),
        })
    }

    pub fn render(&mut self, state: &GameState) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let (w, h) = (cols as usize, rows.saturating_sub(1) as usize);
        if w != self.canvas.width() || h != self.canvas.height() {
            self.canvas.resize(w, h);
            queue!(self.guard.out, terminal::Clear(terminal::ClearType::All))?;
        } else {
            self.canvas.clear();
        }
        draw_scene(&mut self.canvas, state);

        let mut line = String::with_capacity(w);
        for row in 0..h {
            queue!(self.guard.out, cursor::MoveTo(0, row as u16))?;
            let mut current = Glyph::Empty;
            for &glyph in self.canvas.row(row) {
                if glyph != current && glyph != Glyph::Empty {
                    if !line.is_empty() {
                        queue!(self.guard.out, style::Print(&line))?;
                        line.clear();
                    }
                    queue!(self.guard.out, style::SetForegroundColor(glyph_color(glyph)))?;
                    current = glyph;
                }
                line.push(glyph.ch());
            }
            queue!(self.guard.out, style::Print(&line), style::ResetColor)?;
            line.clear();
        }

        let mut hud = hud_line(state);
        hud.truncate(w);
        queue!(
            self.guard.out,
            cursor::MoveTo(0, h as u16),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(hud)
        )?;
        self.guard.out.flush()
    }
}
