/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameContext` (and, where needed, an RNG handle) and returns a brand-new
/// `GameContext`.  Side effects are limited to the injected RNG.

use log::debug;
use rand::Rng;

use crate::collision::{hits_any, resolve_projectile_hits};
use crate::config::GameConfig;
use crate::entities::{Entity, EntityKind, GameContext, Screen, Vec2};
use crate::input::Controls;
use crate::spawner::update_spawner;
use crate::sprites;
use crate::starfield::Starfield;

/// Gap between the ship's nose and a freshly fired projectile's centre.
const MUZZLE_GAP: f32 = 6.0;

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn player_size(config: &GameConfig) -> Vec2 {
    let (w, h) = sprites::PLAYER.scaled_size(config.sprite_scale);
    Vec2::new(w, h)
}

pub fn projectile_size(config: &GameConfig) -> Vec2 {
    let (w, h) = sprites::BULLET.scaled_size(config.bullet_scale);
    Vec2::new(w, h)
}

/// The ship, centred horizontally and resting `player_bottom_gap` above the
/// bottom edge.
pub fn new_player(config: &GameConfig) -> Entity {
    let size = player_size(config);
    let pos = Vec2::new(
        (config.world_width - size.x) / 2.0,
        config.world_height - config.player_bottom_gap - size.y,
    );
    Entity::new(EntityKind::Player, pos, Vec2::default(), size)
}

/// Build the initial context: menu screen, empty field, fresh starfield.
pub fn init_state(config: GameConfig, rng: &mut impl Rng) -> GameContext {
    let starfield = Starfield::new(
        config.star_count,
        config.world_width,
        config.world_height,
        rng,
    );
    GameContext {
        screen: Screen::Menu,
        score: 0,
        player: new_player(&config),
        enemies: Vec::new(),
        projectiles: Vec::new(),
        starfield,
        spawn_timer: 0.0,
        fire_cooldown: 0.0,
        frame: 0,
        config,
    }
}

/// Start a new run: clear the field, re-centre the ship, zero the score.
/// The starfield carries over.
pub fn new_run(state: &GameContext) -> GameContext {
    GameContext {
        screen: Screen::Playing,
        score: 0,
        player: new_player(&state.config),
        enemies: Vec::new(),
        projectiles: Vec::new(),
        spawn_timer: 0.0,
        fire_cooldown: 0.0,
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Move the ship horizontally for `dt` seconds.  `direction` is -1, 0 or 1;
/// the ship stays `player_margin` away from both side edges.
pub fn move_player(state: &GameContext, direction: f32, dt: f32) -> GameContext {
    let cfg = &state.config;
    let max_x = cfg.world_width - cfg.player_margin - state.player.size.x;
    let x = (state.player.pos.x + direction * cfg.player_speed * dt)
        .clamp(cfg.player_margin, max_x);
    GameContext {
        player: Entity {
            pos: Vec2::new(x, state.player.pos.y),
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Fire a projectile from the ship's nose unless the cooldown is running.
pub fn player_shoot(state: &GameContext) -> GameContext {
    if state.fire_cooldown > 0.0 {
        return state.clone();
    }
    let size = projectile_size(&state.config);
    let pos = Vec2::new(
        state.player.center_x() - size.x / 2.0,
        state.player.pos.y - MUZZLE_GAP - size.y / 2.0,
    );
    let vel = Vec2::new(0.0, -state.config.bullet_speed);
    let mut projectiles = state.projectiles.clone();
    projectiles.push(Entity::new(EntityKind::Projectile, pos, vel, size));
    GameContext {
        projectiles,
        fire_cooldown: state.config.fire_cooldown,
        ..state.clone()
    }
}

// ── Per-frame tick (RNG is injected) ─────────────────────────────────────

/// Advance gameplay by one fixed step of `dt` seconds.
///
/// Order: input → movement → fire → spawn → collisions → prune.  All randomness
/// comes through `rng` so callers control determinism.
pub fn tick(
    state: &GameContext,
    controls: &Controls,
    dt: f32,
    rng: &mut impl Rng,
) -> GameContext {
    let cfg = &state.config;

    // ── 1. Player input ──────────────────────────────────────────────────────
    let mut next = move_player(state, controls.direction(), dt);
    next.fire_cooldown = (next.fire_cooldown - dt).max(0.0);
    next.frame = state.frame + 1;

    // ── 2. Movement, then fire ───────────────────────────────────────────────
    // A shot fired this tick starts at the muzzle; it moves from the next tick.
    next.projectiles = next.projectiles.iter().map(|p| p.advanced(dt)).collect();
    if controls.shoot {
        next = player_shoot(&next);
    }
    let mut enemies: Vec<Entity> = next.enemies.iter().map(|e| e.advanced(dt)).collect();
    let mut projectiles = next.projectiles.clone();

    // ── 3. Spawn ─────────────────────────────────────────────────────────────
    let live = enemies.iter().filter(|e| e.alive).count();
    let (spawn_timer, spawned) = update_spawner(next.spawn_timer, dt, live, cfg, rng);
    enemies.extend(spawned);

    // ── 4. Collision: projectiles ↔ enemies ──────────────────────────────────
    let kills = resolve_projectile_hits(&mut projectiles, &mut enemies);
    if kills > 0 {
        debug!("frame {}: {} enemies destroyed", next.frame, kills);
    }

    // ── 5. Collision: enemies ↔ player ───────────────────────────────────────
    let screen = if hits_any(&next.player, &enemies) {
        Screen::GameOver
    } else {
        next.screen
    };

    // ── 6. Prune dead and off-screen entities ────────────────────────────────
    let (w, h) = (cfg.world_width, cfg.world_height);
    enemies.retain(|e| e.alive && !e.is_off_screen(w, h));
    projectiles.retain(|p| p.alive && !p.is_off_screen(w, h));

    GameContext {
        screen,
        score: next.score + kills * cfg.score_per_kill,
        enemies,
        projectiles,
        spawn_timer,
        ..next
    }
}
