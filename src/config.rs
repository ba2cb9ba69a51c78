//! Gameplay and presentation tunables.

use std::time::Duration;

use crate::error::{GameError, Result};

/// Every tunable the simulation and renderer read.  Built in code; the game
/// reads no files at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Logical playfield width in world units.
    pub world_width: f32,
    /// Logical playfield height in world units.
    pub world_height: f32,
    pub fps: u32,
    /// Multiplier applied to sprite pixel maps (world units per map pixel).
    pub sprite_scale: f32,
    pub bullet_scale: f32,

    /// Horizontal player speed, units per second.
    pub player_speed: f32,
    /// Distance the ship keeps from each side edge.
    pub player_margin: f32,
    /// Gap between the ship's bottom edge and the bottom of the field.
    pub player_bottom_gap: f32,
    /// Upward projectile speed, units per second.
    pub bullet_speed: f32,
    /// Seconds between two shots.
    pub fire_cooldown: f32,

    /// Base downward enemy speed, units per second.
    pub enemy_speed: f32,
    /// Per-enemy speed jitter, sampled from `min..max`.
    pub enemy_speed_jitter: (f32, f32),
    /// Seconds between spawn attempts.
    pub spawn_interval: f32,
    pub max_enemies: usize,
    pub score_per_kill: u32,

    pub star_count: usize,
    /// Frames a key stays held after its last press or repeat event.
    pub hold_window: u64,
    /// Credit line under the menu; empty hides it.
    pub credit: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 480.0,
            world_height: 720.0,
            fps: 60,
            sprite_scale: 5.0,
            bullet_scale: 3.0,
            player_speed: 300.0,
            player_margin: 8.0,
            player_bottom_gap: 40.0,
            bullet_speed: 480.0,
            fire_cooldown: 0.18,
            enemy_speed: 80.0,
            enemy_speed_jitter: (-10.0, 40.0),
            spawn_interval: 0.9,
            max_enemies: 6,
            score_per_kill: 20,
            star_count: 120,
            hold_window: 8,
            credit: "Developed by Keyur Padia".to_string(),
        }
    }
}

impl GameConfig {
    /// Fixed simulation step in seconds.
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Wall-clock budget of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps))
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "world size must be positive, got {}x{}",
                self.world_width, self.world_height
            )));
        }
        if self.fps == 0 {
            return Err(GameError::InvalidConfig("fps must be non-zero".into()));
        }
        if self.sprite_scale <= 0.0 || self.bullet_scale <= 0.0 {
            return Err(GameError::InvalidConfig("sprite scales must be positive".into()));
        }
        if self.spawn_interval <= 0.0 {
            return Err(GameError::InvalidConfig(
                "spawn interval must be positive".into(),
            ));
        }
        let (lo, hi) = self.enemy_speed_jitter;
        if lo >= hi {
            return Err(GameError::InvalidConfig(format!(
                "enemy speed jitter range is empty: {lo}..{hi}"
            )));
        }
        if self.enemy_speed + lo <= 0.0 {
            return Err(GameError::InvalidConfig(
                "enemies must always move downward".into(),
            ));
        }
        if self.player_margin * 2.0 >= self.world_width {
            return Err(GameError::InvalidConfig(
                "player margins leave no room to move".into(),
            ));
        }
        Ok(())
    }
}
