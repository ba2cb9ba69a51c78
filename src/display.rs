/// Rendering layer. All terminal I/O lives here.
///
/// Receives a composed `Frame` and writes it out: canvas pixels as
/// upper-half-block glyphs (foreground = upper pixel, background = lower
/// pixel), then text labels on top.  No game logic is performed.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};
use space_shooter::canvas::{Canvas, Viewport};
use space_shooter::render::{Anchor, Frame, Label, BACKGROUND};
use space_shooter::sprites::Rgb;

const HALF_BLOCK: char = '▀';

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

/// Wipe the whole terminal, e.g. after a resize.
pub fn clear<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.flush()
}

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, frame: &Frame, viewport: &Viewport) -> std::io::Result<()> {
    draw_canvas(out, &frame.canvas, viewport)?;
    for label in &frame.labels {
        draw_label(out, label, viewport)?;
    }

    out.queue(style::ResetColor)?;
    out.flush()
}

// ── Canvas ────────────────────────────────────────────────────────────────────

fn draw_canvas<W: Write>(out: &mut W, canvas: &Canvas, viewport: &Viewport) -> std::io::Result<()> {
    // Only emit colour changes; most of the frame is background.
    let mut fg: Option<Rgb> = None;
    let mut bg: Option<Rgb> = None;

    for row in 0..viewport.cell_rows() {
        out.queue(cursor::MoveTo(
            viewport.origin_col,
            viewport.origin_row + row as u16,
        ))?;
        for col in 0..canvas.width() {
            let upper = canvas.get(col, row * 2).unwrap_or(BACKGROUND);
            let lower = canvas.get(col, row * 2 + 1).unwrap_or(BACKGROUND);
            if fg != Some(upper) {
                out.queue(style::SetForegroundColor(color(upper)))?;
                fg = Some(upper);
            }
            if bg != Some(lower) {
                out.queue(style::SetBackgroundColor(color(lower)))?;
                bg = Some(lower);
            }
            out.queue(Print(HALF_BLOCK))?;
        }
    }
    Ok(())
}

// ── Labels ────────────────────────────────────────────────────────────────────

fn draw_label<W: Write>(out: &mut W, label: &Label, viewport: &Viewport) -> std::io::Result<()> {
    let (col, row) = viewport.cell_of(label.x, label.y);
    let len = label.text.chars().count() as i32;
    let col = match label.anchor {
        Anchor::Center => col - len / 2,
        Anchor::TopLeft => col,
    };

    // Clip to the canvas columns.
    let left = i32::from(viewport.origin_col);
    let right = left + viewport.width as i32;
    let top = i32::from(viewport.origin_row);
    let bottom = top + viewport.cell_rows() as i32;
    if row < top || row >= bottom {
        return Ok(());
    }
    let skip = (left - col).max(0) as usize;
    let start = col.max(left);
    let visible: String = label
        .text
        .chars()
        .skip(skip)
        .take((right - start).max(0) as usize)
        .collect();
    if visible.is_empty() {
        return Ok(());
    }

    out.queue(cursor::MoveTo(start as u16, row as u16))?;
    out.queue(style::SetForegroundColor(color(label.color)))?;
    out.queue(style::SetBackgroundColor(color(BACKGROUND)))?;
    if label.bold {
        out.queue(style::SetAttribute(Attribute::Bold))?;
    }
    out.queue(Print(visible))?;
    if label.bold {
        out.queue(style::SetAttribute(Attribute::NormalIntensity))?;
    }
    Ok(())
}
