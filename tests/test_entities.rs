use space_shooter::entities::*;
use space_shooter::starfield::Starfield;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn enemy(x: f32, y: f32) -> Entity {
    Entity::new(EntityKind::Enemy, Vec2::new(x, y), Vec2::new(0.0, 2.0), Vec2::new(35.0, 20.0))
}

#[test]
fn new_entity_is_alive() {
    let e = enemy(1.0, 2.0);
    assert!(e.alive);
    assert_eq!(e.kind, EntityKind::Enemy);
}

#[test]
fn bounds_follow_position_and_size() {
    let e = enemy(10.0, 20.0);
    let b = e.bounds();
    assert_eq!(b, Rect { x: 10.0, y: 20.0, w: 35.0, h: 20.0 });
    assert_eq!(b.right(), 45.0);
    assert_eq!(b.bottom(), 40.0);
    assert_eq!(e.center_x(), 27.5);
}

#[test]
fn advanced_moves_by_velocity_times_dt() {
    let e = Entity {
        vel: Vec2::new(-4.0, 3.0),
        ..enemy(10.0, 10.0)
    };
    let moved = e.advanced(0.5);
    assert_eq!(moved.pos, Vec2::new(8.0, 11.5));
    // Size and velocity are fixed.
    assert_eq!(moved.size, e.size);
    assert_eq!(moved.vel, e.vel);
    // The original is untouched.
    assert_eq!(e.pos, Vec2::new(10.0, 10.0));
}

#[test]
fn off_screen_only_once_fully_outside() {
    let (w, h) = (480.0, 720.0);
    assert!(!enemy(0.0, 0.0).is_off_screen(w, h));
    assert!(!enemy(100.0, 720.0).is_off_screen(w, h)); // top edge on the bottom line
    assert!(enemy(100.0, 720.5).is_off_screen(w, h));
    assert!(!enemy(100.0, -20.0).is_off_screen(w, h));
    assert!(enemy(100.0, -21.0).is_off_screen(w, h));
    assert!(enemy(481.0, 100.0).is_off_screen(w, h));
    assert!(enemy(-36.0, 100.0).is_off_screen(w, h));
}

#[test]
fn game_context_clone_is_independent() {
    let original = GameContext {
        screen: Screen::Playing,
        score: 0,
        player: Entity::new(
            EntityKind::Player,
            Vec2::new(200.0, 620.0),
            Vec2::default(),
            Vec2::new(55.0, 60.0),
        ),
        enemies: Vec::new(),
        projectiles: Vec::new(),
        starfield: Starfield::new(4, 480.0, 720.0, &mut StdRng::seed_from_u64(1)),
        spawn_timer: 0.0,
        fire_cooldown: 0.0,
        frame: 0,
        config: Default::default(),
    };
    let mut cloned = original.clone();

    cloned.player.pos.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(enemy(5.0, 5.0));

    assert_eq!(original.player.pos.x, 200.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}

// ── Starfield ─────────────────────────────────────────────────────────────────

#[test]
fn starfield_scatters_stars_inside_the_field() {
    let field = Starfield::new(200, 480.0, 720.0, &mut StdRng::seed_from_u64(7));
    assert_eq!(field.stars.len(), 200);
    for s in &field.stars {
        assert!((0.0..480.0).contains(&s.x));
        assert!((0.0..720.0).contains(&s.y));
        assert!(s.size == 1 || s.size == 2);
        assert!((5.0..25.0).contains(&s.speed));
    }
}

#[test]
fn starfield_scrolls_down() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = Starfield::new(50, 480.0, 720.0, &mut rng);
    let next = field.update(0.1, &mut rng);
    for (before, after) in field.stars.iter().zip(&next.stars) {
        if after.y >= 0.0 {
            assert!((after.y - (before.y + before.speed * 0.1)).abs() < 1e-3);
            assert_eq!(after.x, before.x);
        }
    }
}

#[test]
fn stars_leaving_the_bottom_reenter_at_the_top() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = Starfield::new(10, 480.0, 720.0, &mut rng);
    for s in &mut field.stars {
        s.y = 719.9;
    }
    let next = field.update(1.0, &mut rng);
    for s in &next.stars {
        assert_eq!(s.y, -2.0);
        assert!((0.0..480.0).contains(&s.x));
    }
}
