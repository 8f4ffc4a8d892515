/// Terminal rendering layer — all terminal I/O lives here.
///
/// `TerminalSink` implements `RenderSink` with crossterm.  Arena
/// coordinates are scaled onto the play area between the HUD row and the
/// controls hint; no game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::{Arena, GameState, MovePattern, Rgb};
use crate::render::{Hud, RenderSink, Screen, Sprite};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::White;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::Rgb { r: 50, g: 150, b: 255 };
const C_BULLET: Color = Color::Rgb { r: 150, g: 230, b: 255 };
const C_TITLE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;
const C_HIGH_SCORE: Color = Color::Yellow;

/// Rows above the play area (HUD + top border).
const TOP_ROWS: u16 = 2;
/// Rows below the play area (bottom border + controls hint).
const BOTTOM_ROWS: u16 = 2;

fn rgb(c: Rgb) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

/// Scale a colour towards black by `alpha / 255`.
fn faded(c: Rgb, alpha: u8) -> Color {
    let f = |v: u8| ((v as u16 * alpha as u16) / 255) as u8;
    Color::Rgb { r: f(c.r), g: f(c.g), b: f(c.b) }
}

pub struct TerminalSink<'a, W: Write> {
    out: &'a mut W,
    width: u16,
    height: u16,
    arena: Arena,
}

impl<'a, W: Write> TerminalSink<'a, W> {
    /// `width` × `height` is the terminal size in cells.
    pub fn new(out: &'a mut W, width: u16, height: u16) -> Self {
        Self {
            out,
            width,
            height,
            arena: Arena::default(),
        }
    }

    fn play_rows(&self) -> u16 {
        self.height.saturating_sub(TOP_ROWS + BOTTOM_ROWS)
    }

    fn play_cols(&self) -> u16 {
        self.width.saturating_sub(2)
    }

    /// Terminal cell for an arena point, or `None` when it falls outside
    /// the visible play area.
    pub fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 || x >= self.arena.width || y >= self.arena.height {
            return None;
        }
        let col = (x / self.arena.width * self.play_cols() as f32) as u16;
        let row = (y / self.arena.height * self.play_rows() as f32) as u16;
        if col >= self.play_cols() || row >= self.play_rows() {
            return None;
        }
        Some((col + 1, row + TOP_ROWS))
    }

    fn put(&mut self, x: f32, y: f32, glyph: &str, color: Color) -> std::io::Result<()> {
        if let Some((col, row)) = self.cell(x, y) {
            self.put_at(col, row, glyph, color)?;
        }
        Ok(())
    }

    /// Multi-cell sprites are centred on their anchor column.
    fn put_centered(&mut self, x: f32, y: f32, glyph: &str, color: Color) -> std::io::Result<()> {
        if let Some((col, row)) = self.cell(x, y) {
            let half = glyph.chars().count() as u16 / 2;
            self.put_at(col.saturating_sub(half).max(1), row, glyph, color)?;
        }
        Ok(())
    }

    fn put_at(&mut self, col: u16, row: u16, text: &str, color: Color) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn centered_line(&mut self, row: u16, text: &str, color: Color) -> std::io::Result<()> {
        let col = (self.width / 2).saturating_sub(text.chars().count() as u16 / 2);
        self.put_at(col, row, text, color)
    }

    /// Three cells: trim, core, trim.  Sine ships show their dark core.
    fn draw_enemy(
        &mut self,
        x: f32,
        y: f32,
        pattern: MovePattern,
        color: Rgb,
        outline: Rgb,
        shade: Rgb,
    ) -> std::io::Result<()> {
        let (left, core, right) = match pattern {
            MovePattern::Straight => ("<", "◎", ">"),
            MovePattern::Zigzag => ("«", "▼", "»"),
            MovePattern::Sine => ("(", "●", ")"),
        };
        let core_color = match pattern {
            MovePattern::Sine => shade,
            _ => color,
        };
        if let Some((col, row)) = self.cell(x, y) {
            let start = col.saturating_sub(1).max(1);
            self.put_at(start, row, left, rgb(outline))?;
            self.put_at(start + 1, row, core, rgb(core_color))?;
            self.put_at(start + 2, row, right, rgb(outline))?;
        }
        Ok(())
    }

    // ── Border ────────────────────────────────────────────────────────────────

    fn draw_border(&mut self) -> std::io::Result<()> {
        let w = self.width as usize;
        let bottom = self.height.saturating_sub(BOTTOM_ROWS);

        self.out.queue(style::SetForegroundColor(C_BORDER))?;

        self.out.queue(cursor::MoveTo(0, 1))?;
        self.out
            .queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

        self.out.queue(cursor::MoveTo(0, bottom))?;
        self.out
            .queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

        for row in TOP_ROWS..bottom {
            self.out.queue(cursor::MoveTo(0, row))?;
            self.out.queue(Print("│"))?;
            self.out.queue(cursor::MoveTo(self.width.saturating_sub(1), row))?;
            self.out.queue(Print("│"))?;
        }
        Ok(())
    }

    fn draw_controls_hint(&mut self) -> std::io::Result<()> {
        let row = self.height.saturating_sub(1);
        self.put_at(
            1,
            row,
            "← → / A D : Move   SPACE : Shoot   ENTER : Start   Q : Quit",
            C_HINT,
        )
    }
}

impl<'a, W: Write> RenderSink for TerminalSink<'a, W> {
    type Error = std::io::Error;

    fn begin_frame(&mut self, state: &GameState) -> std::io::Result<()> {
        self.arena = state.arena;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.draw_border()?;
        self.draw_controls_hint()
    }

    fn draw_sprite(&mut self, sprite: &Sprite) -> std::io::Result<()> {
        match *sprite {
            Sprite::Star { x, y, size, brightness } => {
                // Big stars glow with a blue tint.
                if size > 2.0 {
                    let c = Color::Rgb { r: brightness, g: brightness, b: 255 };
                    self.put(x, y, "*", c)
                } else {
                    self.put(x, y, ".", Color::Rgb { r: brightness, g: brightness, b: brightness })
                }
            }
            Sprite::Bullet { x, y, .. } => self.put(x, y, "║", C_BULLET),
            Sprite::Player { x, y, .. } => self.put_centered(x, y, "/▲\\", C_PLAYER),
            Sprite::Enemy { x, y, pattern, color, outline, shade, .. } => {
                self.draw_enemy(x, y, pattern, color, outline, shade)
            }
            Sprite::Particle { x, y, size, color, alpha } => {
                let glyph = if size >= 3.5 { "*" } else { "·" };
                self.put(x, y, glyph, faded(color, alpha))
            }
        }
    }

    fn draw_hud(&mut self, hud: &Hud) -> std::io::Result<()> {
        // Score — left
        self.put_at(1, 0, &format!("Score: {}", hud.score), C_HUD)?;

        // Level — centre
        let level = format!("Level: {}", hud.level);
        self.centered_line(0, &level, C_HUD)?;

        // Lives — right
        let hearts = "♥".repeat(hud.lives.max(0) as usize);
        let lives = format!("Lives: {}", hearts);
        let col = self
            .width
            .saturating_sub(lives.chars().count() as u16 + 1);
        self.put_at(col, 0, &lives, C_HUD_LIVES)
    }

    fn draw_screen(&mut self, screen: &Screen) -> std::io::Result<()> {
        let mid = self.height / 2;
        match *screen {
            Screen::Start { high_score } => {
                self.centered_line(self.height / 3, "★  SPACE  SHOOTER  ★", C_TITLE)?;
                self.centered_line(mid, "Use LEFT and RIGHT arrows to move", C_HUD)?;
                self.centered_line(mid + 2, "Press SPACE to shoot", C_HUD)?;
                if high_score > 0 {
                    let best = format!("High Score: {}", high_score);
                    self.centered_line(mid + 4, &best, C_HIGH_SCORE)?;
                }
                self.centered_line(mid + 6, "Press ENTER to start", C_TITLE)
            }
            Screen::GameOver { score, high_score, new_high_score } => {
                let boxed: [&str; 3] = [
                    "╔════════════════════╗",
                    "║    GAME  OVER      ║",
                    "╚════════════════════╝",
                ];
                let top = (self.height / 3).saturating_sub(1);
                for (i, line) in boxed.iter().enumerate() {
                    self.centered_line(top + i as u16, line, Color::Red)?;
                }

                self.centered_line(mid, &format!("Score: {}", score), C_HUD)?;
                if new_high_score {
                    self.centered_line(mid + 2, "★ NEW HIGH SCORE! ★", C_HIGH_SCORE)?;
                }
                let best = format!("High Score: {}", high_score);
                self.centered_line(mid + 4, &best, C_HIGH_SCORE)?;
                self.centered_line(mid + 6, "Press ENTER to play again", C_TITLE)
            }
        }
    }

    fn end_frame(&mut self) -> std::io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.height.saturating_sub(1)))?;
        self.out.flush()
    }
}
