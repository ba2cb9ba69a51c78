/// Pixel canvas the renderer composes a frame into, and the viewport that
/// fits the logical playfield onto the terminal.
///
/// Each character cell shows two vertically stacked canvas pixels, so a
/// terminal of `cols × rows` offers `cols × 2·rows` pixels.

use crate::error::{GameError, Result};
use crate::sprites::{Rgb, Sprite};

pub const MIN_COLS: u16 = 24;
pub const MIN_ROWS: u16 = 12;

/// Placement of the scaled playfield inside the terminal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Canvas pixels per world unit.
    pub scale: f32,
    /// Canvas size in pixels.
    pub width: usize,
    pub height: usize,
    /// Terminal cell of the canvas' top-left pixel.
    pub origin_col: u16,
    pub origin_row: u16,
}

impl Viewport {
    /// Largest uniform scale that fits `world_w × world_h` into the terminal,
    /// centred.
    pub fn fit(cols: u16, rows: u16, world_w: f32, world_h: f32) -> Result<Viewport> {
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(GameError::TerminalTooSmall {
                cols,
                rows,
                min_cols: MIN_COLS,
                min_rows: MIN_ROWS,
            });
        }
        let px_w = f32::from(cols);
        let px_h = f32::from(rows) * 2.0;
        let scale = (px_w / world_w).min(px_h / world_h);
        let width = ((world_w * scale).floor() as usize).clamp(1, cols as usize);
        let height = ((world_h * scale).floor() as usize).clamp(1, rows as usize * 2);
        let cell_rows = height.div_ceil(2) as u16;
        Ok(Viewport {
            scale,
            width,
            height,
            origin_col: (cols - width as u16) / 2,
            origin_row: (rows - cell_rows) / 2,
        })
    }

    /// Number of terminal rows the canvas occupies.
    pub fn cell_rows(&self) -> usize {
        self.height.div_ceil(2)
    }

    /// Terminal cell under the world point `(x, y)`.  May lie outside the
    /// terminal for points off the playfield.
    pub fn cell_of(&self, x: f32, y: f32) -> (i32, i32) {
        let px = (x * self.scale).floor() as i32;
        let py = (y * self.scale).floor() as i32;
        (
            i32::from(self.origin_col) + px,
            i32::from(self.origin_row) + py.div_euclid(2),
        )
    }
}

#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    scale: f32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(viewport: &Viewport, background: Rgb) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            scale: viewport.scale,
            pixels: vec![background; viewport.width * viewport.height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at canvas coordinates, `None` outside the canvas.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Map a world span to a canvas pixel span; never narrower than one
    /// pixel so tiny objects stay visible.
    fn span(&self, start: f32, len: f32) -> (i64, i64) {
        let a = (start * self.scale).floor() as i64;
        let b = ((start + len) * self.scale).floor() as i64;
        (a, b.max(a + 1))
    }

    /// Fill a world-space rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        let (x0, x1) = self.span(x, w);
        let (y0, y1) = self.span(y, h);
        let (w, h) = (self.width as i64, self.height as i64);
        let x0 = x0.clamp(0, w) as usize;
        let x1 = x1.clamp(0, w) as usize;
        let y0 = y0.clamp(0, h) as usize;
        let y1 = y1.clamp(0, h) as usize;
        if x0 >= x1 {
            return;
        }
        for py in y0..y1 {
            let row = py * self.width;
            self.pixels[row + x0..row + x1].fill(color);
        }
    }

    /// Draw `sprite` with its top-left corner at world `(x, y)`, each map
    /// pixel covering `pixel_size` world units.
    pub fn blit(&mut self, sprite: &Sprite, x: f32, y: f32, pixel_size: f32) {
        for (mx, my, color) in sprite.pixels() {
            self.fill_rect(
                x + mx as f32 * pixel_size,
                y + my as f32 * pixel_size,
                pixel_size,
                pixel_size,
                color,
            );
        }
    }
}
