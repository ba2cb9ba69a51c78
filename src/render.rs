/// Frame composition, pure presentation.
///
/// `compose` turns a `GameContext` into a pixel canvas plus a list of text
/// labels.  Nothing here mutates game state; the binary's `display` module
/// writes the result to the terminal.

use crate::canvas::{Canvas, Viewport};
use crate::entities::{GameContext, Screen};
use crate::sprites::{self, Rgb, Sprite};
use crate::starfield::Starfield;

// ── Colour palette ────────────────────────────────────────────────────────────

pub const BACKGROUND: Rgb = Rgb(20, 28, 36);
const C_STAR_SMALL: Rgb = Rgb(220, 220, 220);
const C_STAR_BIG: Rgb = Rgb(180, 180, 180);
const C_TITLE: Rgb = Rgb(240, 230, 210);
const C_SHADOW: Rgb = Rgb(40, 30, 30);
const C_TEXT: Rgb = Rgb(240, 240, 230);
const C_HINT: Rgb = Rgb(220, 220, 220);
const C_HINT_DIM: Rgb = Rgb(200, 200, 200);
const C_CREDIT: Rgb = Rgb(180, 180, 180);
const C_DOT: Rgb = Rgb(180, 180, 180);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// `(x, y)` is the label's centre.
    Center,
    /// `(x, y)` is the label's first character.
    TopLeft,
}

/// Text drawn over the canvas at a world position.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub anchor: Anchor,
    pub color: Rgb,
    pub bold: bool,
}

impl Label {
    fn centered(text: impl Into<String>, x: f32, y: f32, color: Rgb) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            anchor: Anchor::Center,
            color,
            bold: false,
        }
    }

    fn title(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            bold: true,
            ..Self::centered(text, x, y, C_TITLE)
        }
    }
}

/// A bold title with a dark copy one cell down and right drawn beneath it.
fn shadowed_title(text: &str, x: f32, y: f32, viewport: &Viewport) -> [Label; 2] {
    // One cell is one pixel wide and two pixels tall.
    let dx = 1.0 / viewport.scale;
    let dy = 2.0 / viewport.scale;
    let shadow = Label {
        color: C_SHADOW,
        ..Label::title(text, x + dx, y + dy)
    };
    [shadow, Label::title(text, x, y)]
}

pub struct Frame {
    pub canvas: Canvas,
    pub labels: Vec<Label>,
}

/// Compose one complete frame for the active screen.
pub fn compose(state: &GameContext, viewport: &Viewport) -> Frame {
    let mut canvas = Canvas::new(viewport, BACKGROUND);
    draw_starfield(&mut canvas, &state.starfield);

    let labels = match state.screen {
        Screen::Menu => compose_menu(&mut canvas, state, viewport),
        Screen::Playing => compose_playing(&mut canvas, state),
        Screen::GameOver => compose_game_over(&mut canvas, state, viewport),
    };
    Frame { canvas, labels }
}

fn draw_starfield(canvas: &mut Canvas, starfield: &Starfield) {
    for star in &starfield.stars {
        let color = if star.size == 1 { C_STAR_SMALL } else { C_STAR_BIG };
        let side = f32::from(star.size);
        canvas.fill_rect(star.x.floor(), star.y.floor(), side, side, color);
    }
}

/// Blit `sprite` centred on `(cx, cy)`.
fn blit_centered(canvas: &mut Canvas, sprite: &Sprite, cx: f32, cy: f32, scale: f32) {
    let (w, h) = sprite.scaled_size(scale);
    canvas.blit(sprite, cx - w / 2.0, cy - h / 2.0, scale);
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn compose_menu(canvas: &mut Canvas, state: &GameContext, viewport: &Viewport) -> Vec<Label> {
    let cfg = &state.config;
    let (w, h, s) = (cfg.world_width, cfg.world_height, cfg.sprite_scale);

    blit_centered(canvas, &sprites::PLAYER, w / 2.0, h / 2.0 - 10.0, s);
    blit_centered(canvas, &sprites::PLANET, 60.0, 80.0, s);
    blit_centered(canvas, &sprites::SAUCER, w - 70.0, 70.0, s);
    blit_centered(canvas, &sprites::COMET, w - 90.0, h - 120.0, s);

    let mut labels = shadowed_title("SPACE SHOOTER", w / 2.0, 80.0, viewport).to_vec();
    labels.push(Label::centered("Press ENTER to start", w / 2.0, h - 120.0, C_HINT));
    if !cfg.credit.is_empty() {
        labels.push(Label::centered(cfg.credit.as_str(), w / 2.0, h - 40.0, C_CREDIT));
    }
    labels
}

// ── Playing ───────────────────────────────────────────────────────────────────

fn compose_playing(canvas: &mut Canvas, state: &GameContext) -> Vec<Label> {
    let cfg = &state.config;

    for enemy in &state.enemies {
        canvas.blit(&sprites::ENEMY, enemy.pos.x, enemy.pos.y, cfg.sprite_scale);
    }
    for projectile in &state.projectiles {
        canvas.blit(&sprites::BULLET, projectile.pos.x, projectile.pos.y, cfg.bullet_scale);
    }
    let p = &state.player;
    canvas.blit(&sprites::PLAYER, p.pos.x, p.pos.y, cfg.sprite_scale);

    vec![Label {
        text: format!("SCORE: {}", state.score),
        x: 16.0,
        y: 12.0,
        anchor: Anchor::TopLeft,
        color: C_TEXT,
        bold: false,
    }]
}

// ── Game over ─────────────────────────────────────────────────────────────────

fn compose_game_over(canvas: &mut Canvas, state: &GameContext, viewport: &Viewport) -> Vec<Label> {
    let cfg = &state.config;
    let (w, h, s) = (cfg.world_width, cfg.world_height, cfg.sprite_scale);

    // Corner decoration: planet top-left, saucer top-right, comet bottom-right.
    canvas.blit(&sprites::PLANET, 20.0, 20.0, s);
    let (sw, _) = sprites::SAUCER.scaled_size(s);
    canvas.blit(&sprites::SAUCER, w - 20.0 - sw, 20.0, s);
    let (cw, ch) = sprites::COMET.scaled_size(s);
    canvas.blit(&sprites::COMET, w - 20.0 - cw, h - 20.0 - ch, s);

    for i in 0..6 {
        let x = 40.0 + i as f32 * 60.0;
        let y = h / 2.0 + 120.0 + (i % 2) as f32 * 10.0;
        canvas.fill_rect(x, y, 3.0, 3.0, C_DOT);
    }

    let mut labels = shadowed_title("GAME OVER", w / 2.0, h / 2.0 - 60.0, viewport).to_vec();
    labels.push(Label::centered(
        format!("SCORE: {}", state.score),
        w / 2.0,
        h / 2.0 + 10.0,
        C_TEXT,
    ));
    labels.push(Label::centered("Press ENTER to play again", w / 2.0, h - 80.0, C_HINT_DIM));
    labels
}
