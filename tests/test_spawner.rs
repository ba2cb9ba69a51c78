use space_shooter::config::GameConfig;
use space_shooter::entities::*;
use space_shooter::spawner::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn spawned_enemies_start_in_bounds_at_the_top() {
    let cfg = GameConfig::default();
    let mut rng = seeded_rng();
    for _ in 0..1000 {
        let e = spawn_enemy(&cfg, &mut rng);
        assert_eq!(e.kind, EntityKind::Enemy);
        assert!(e.alive);
        assert_eq!(e.pos.y, 0.0);
        assert!(e.pos.x >= 0.0);
        assert!(e.bounds().right() <= cfg.world_width);
        assert!(!e.is_off_screen(cfg.world_width, cfg.world_height));
    }
}

#[test]
fn spawned_enemies_fall_within_the_speed_band() {
    let cfg = GameConfig::default();
    let mut rng = seeded_rng();
    for _ in 0..1000 {
        let e = spawn_enemy(&cfg, &mut rng);
        assert_eq!(e.vel.x, 0.0);
        assert!((70.0..120.0).contains(&e.vel.y), "vy = {}", e.vel.y);
    }
}

#[test]
fn spawned_enemies_are_distinct() {
    let cfg = GameConfig::default();
    let mut rng = seeded_rng();
    let a = spawn_enemy(&cfg, &mut rng);
    let b = spawn_enemy(&cfg, &mut rng);
    assert_ne!(a.pos.x, b.pos.x);
}

#[test]
fn enemy_size_comes_from_the_sprite() {
    assert_eq!(enemy_size(&GameConfig::default()), Vec2::new(35.0, 20.0));
}

#[test]
fn timer_accumulates_until_the_interval() {
    let cfg = GameConfig::default();
    let (timer, spawned) = update_spawner(0.5, 0.1, 0, &cfg, &mut seeded_rng());
    assert!((timer - 0.6).abs() < 1e-6);
    assert!(spawned.is_none());
}

#[test]
fn interval_elapsed_spawns_and_resets() {
    let cfg = GameConfig::default();
    let (timer, spawned) = update_spawner(0.85, 0.1, 0, &cfg, &mut seeded_rng());
    assert_eq!(timer, 0.0);
    assert!(spawned.is_some());
}

#[test]
fn full_field_skips_the_spawn() {
    let cfg = GameConfig::default();
    let (timer, spawned) = update_spawner(0.85, 0.1, cfg.max_enemies, &cfg, &mut seeded_rng());
    assert_eq!(timer, 0.0);
    assert!(spawned.is_none());
}
