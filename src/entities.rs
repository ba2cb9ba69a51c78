/// All game entity types: pure data plus the geometry they need.

use crate::config::GameConfig;
use crate::starfield::Starfield;

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap on both axes; touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Enemy,
    Projectile,
}

/// Shared shape of the ship, enemies and projectiles.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// Top-left corner in world units.
    pub pos: Vec2,
    /// Units per second.
    pub vel: Vec2,
    /// Fixed bounding-box dimensions.
    pub size: Vec2,
    pub alive: bool,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(kind: EntityKind, pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel,
            size,
            alive: true,
            kind,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            x: self.pos.x,
            y: self.pos.y,
            w: self.size.x,
            h: self.size.y,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// The same entity moved by `velocity × dt`.
    pub fn advanced(&self, dt: f32) -> Entity {
        Entity {
            pos: Vec2::new(self.pos.x + self.vel.x * dt, self.pos.y + self.vel.y * dt),
            ..self.clone()
        }
    }

    /// True once the bounding box no longer touches the visible area.
    pub fn is_off_screen(&self, width: f32, height: f32) -> bool {
        let b = self.bounds();
        b.y > height || b.bottom() < 0.0 || b.x > width || b.right() < 0.0
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    GameOver,
}

/// Everything the loop mutates, passed explicitly to each update function.
/// Cloneable so pure update functions can return a new copy.
#[derive(Clone, Debug)]
pub struct GameContext {
    pub screen: Screen,
    pub score: u32,
    pub player: Entity,
    pub enemies: Vec<Entity>,
    pub projectiles: Vec<Entity>,
    /// Scrolls on every screen; never touches gameplay.
    pub starfield: Starfield,
    /// Seconds accumulated towards the next spawn attempt.
    pub spawn_timer: f32,
    /// Seconds left before the ship may fire again.
    pub fire_cooldown: f32,
    pub frame: u64,
    pub config: GameConfig,
}
