//! Rendering layer — all terminal I/O lives here.
//!
//! The core paints into a `Canvas` (a cell buffer scaled from viewport
//! pixels) and reports score and overlays to a `TerminalHud`. `present`
//! turns both into terminal commands; no game logic happens here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use gravity_flip::{render, DrawSurface, Hud, Overlay};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_TITLE: Color = Color::Cyan;
const C_GAME_OVER: Color = Color::Red;

const CELL: &str = "█";

fn to_terminal(color: render::Color) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

// ── Canvas ────────────────────────────────────────────────────────────────────

/// Play-area cell buffer. The border takes column 0 and the last column,
/// plus rows 1 and height-2; row 0 is the HUD and the last row the hint.
pub struct Canvas {
    viewport_width: f64,
    viewport_height: f64,
    width: u16,
    height: u16,
    cells: Vec<Option<render::Color>>,
}

impl Canvas {
    pub fn new(viewport_width: f64, viewport_height: f64, width: u16, height: u16) -> Self {
        let mut canvas = Self {
            viewport_width,
            viewport_height,
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        canvas.resize(width, height);
        canvas
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells = vec![None; self.cols() * self.rows()];
    }

    fn cols(&self) -> usize {
        self.width.saturating_sub(2) as usize
    }

    fn rows(&self) -> usize {
        self.height.saturating_sub(4) as usize
    }

    /// Viewport rectangle → half-open cell ranges, clipped to the play area.
    fn cell_span(&self, x: f64, y: f64, w: f64, h: f64) -> (usize, usize, usize, usize) {
        let (cols, rows) = (self.cols(), self.rows());
        let sx = cols as f64 / self.viewport_width;
        let sy = rows as f64 / self.viewport_height;
        let clip = |v: f64, max: usize| v.max(0.0).min(max as f64) as usize;
        (
            clip((x * sx).floor(), cols),
            clip(((x + w) * sx).ceil(), cols),
            clip((y * sy).floor(), rows),
            clip(((y + h) * sy).ceil(), rows),
        )
    }

    fn paint(&mut self, x: f64, y: f64, w: f64, h: f64, color: Option<render::Color>) {
        let (c0, c1, r0, r1) = self.cell_span(x, y, w, h);
        let cols = self.cols();
        for row in r0..r1 {
            for col in c0..c1 {
                self.cells[row * cols + col] = color;
            }
        }
    }
}

impl DrawSurface for Canvas {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.paint(x, y, w, h, None);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: render::Color) {
        self.paint(x, y, w, h, Some(color));
    }
}

// ── HUD ───────────────────────────────────────────────────────────────────────

pub struct TerminalHud {
    score: String,
    final_score: String,
    start_visible: bool,
    end_visible: bool,
    /// Right-aligned note on the HUD row (share text).
    message: Option<String>,
}

impl TerminalHud {
    pub fn new() -> Self {
        Self {
            score: "0".to_string(),
            final_score: String::new(),
            start_visible: false,
            end_visible: false,
            message: None,
        }
    }
}

impl Default for TerminalHud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud for TerminalHud {
    fn show_score(&mut self, text: &str) {
        self.score = text.to_string();
    }

    fn show_final_score(&mut self, text: &str) {
        self.final_score = text.to_string();
    }

    fn set_overlay(&mut self, overlay: Overlay, visible: bool) {
        match overlay {
            Overlay::Start => self.start_visible = visible,
            Overlay::End => self.end_visible = visible,
        }
        if visible {
            self.message = None;
        }
    }

    fn share(&mut self, score: u32) {
        self.message = Some(format!("I scored {} at Gravity Flip!", score));
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Write one complete frame to the terminal.
pub fn present<W: Write>(out: &mut W, canvas: &Canvas, hud: &TerminalHud) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, canvas)?;
    draw_hud(out, canvas, hud)?;
    draw_cells(out, canvas)?;
    draw_controls_hint(out, canvas)?;

    if hud.start_visible {
        draw_start_overlay(out, canvas)?;
    }
    if hud.end_visible {
        draw_end_overlay(out, canvas, hud)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, canvas.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_border<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    let w = canvas.width as usize;
    let h = canvas.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(canvas.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, canvas: &Canvas, hud: &TerminalHud) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", hud.score)))?;

    if let Some(message) = &hud.message {
        let x = canvas
            .width
            .saturating_sub(message.chars().count() as u16 + 1);
        out.queue(cursor::MoveTo(x, 0))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(message))?;
    }
    Ok(())
}

fn draw_cells<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    let cols = canvas.cols();
    if cols == 0 {
        return Ok(());
    }
    for (i, cell) in canvas.cells.iter().enumerate() {
        if let Some(color) = cell {
            let col = (i % cols) as u16 + 1;
            let row = (i / cols) as u16 + 2;
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(to_terminal(*color)))?;
            out.queue(Print(CELL))?;
        }
    }
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, canvas.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE / click : Flip   ENTER : Start   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = canvas.width / 2;
    let start_row = (canvas.height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_start_overlay<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    draw_centered(
        out,
        canvas,
        &[
            ("╔════════════════════╗", C_TITLE),
            ("║    GRAVITY  FLIP   ║", C_TITLE),
            ("╚════════════════════╝", C_TITLE),
            ("Flip between floor and ceiling", Color::White),
            ("ENTER - Start  Q - Quit", Color::White),
        ],
    )
}

fn draw_end_overlay<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    hud: &TerminalHud,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", hud.final_score);
    draw_centered(
        out,
        canvas,
        &[
            ("╔════════════════════╗", C_GAME_OVER),
            ("║    GAME  OVER      ║", C_GAME_OVER),
            ("╚════════════════════╝", C_GAME_OVER),
            (score_line.as_str(), C_HUD_SCORE),
            ("R - Play Again  S - Share  Q - Quit", Color::White),
        ],
    )
}
