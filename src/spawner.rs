/// Timed enemy spawning.

use log::debug;
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Entity, EntityKind, Vec2};
use crate::sprites;

/// Bounding-box size of an enemy under `config`.
pub fn enemy_size(config: &GameConfig) -> Vec2 {
    let (w, h) = sprites::ENEMY.scaled_size(config.sprite_scale);
    Vec2::new(w, h)
}

/// An enemy at `pos` moving with `vel`.
pub fn enemy_at(pos: Vec2, vel: Vec2, config: &GameConfig) -> Entity {
    Entity::new(EntityKind::Enemy, pos, vel, enemy_size(config))
}

/// A fresh enemy at the top edge, at a random column fully inside the field,
/// falling at the base speed plus a per-enemy jitter.
pub fn spawn_enemy(config: &GameConfig, rng: &mut impl Rng) -> Entity {
    let size = enemy_size(config);
    let max_x = (config.world_width - size.x).max(0.0);
    let x = rng.gen_range(0.0..=max_x);
    let (lo, hi) = config.enemy_speed_jitter;
    let speed = config.enemy_speed + rng.gen_range(lo..hi);
    enemy_at(Vec2::new(x, 0.0), Vec2::new(0.0, speed), config)
}

/// Advance the spawn timer by `dt`.  Returns the new timer value and, when
/// the interval elapsed and the enemy cap has room, the spawned enemy.
pub fn update_spawner(
    timer: f32,
    dt: f32,
    live_enemies: usize,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> (f32, Option<Entity>) {
    let timer = timer + dt;
    if timer < config.spawn_interval {
        return (timer, None);
    }
    if live_enemies >= config.max_enemies {
        return (0.0, None);
    }
    let enemy = spawn_enemy(config, rng);
    debug!("spawned enemy at x={:.1} vy={:.1}", enemy.pos.x, enemy.vel.y);
    (0.0, Some(enemy))
}
