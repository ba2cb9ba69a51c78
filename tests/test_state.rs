use space_shooter::compute::{init_state, new_run};
use space_shooter::config::GameConfig;
use space_shooter::entities::*;
use space_shooter::input::{Command, Controls};
use space_shooter::spawner::enemy_at;
use space_shooter::state::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn menu() -> GameContext {
    let config = GameConfig {
        spawn_interval: 1.0e9,
        ..GameConfig::default()
    };
    init_state(config, &mut seeded_rng())
}

fn with_commands(commands: &[Command]) -> FrameInput {
    FrameInput {
        controls: Controls::default(),
        commands: commands.to_vec(),
    }
}

// ── Transition table ──────────────────────────────────────────────────────────

#[test]
fn menu_start_begins_play_with_zero_score() {
    let mut s = menu();
    s.score = 77;
    let (s2, flow) = apply_command(&s, Command::Start);
    assert_eq!(flow, Flow::Continue);
    assert_eq!(s2.screen, Screen::Playing);
    assert_eq!(s2.score, 0);
}

#[test]
fn start_while_playing_is_ignored() {
    let mut s = new_run(&menu());
    s.score = 40;
    s.player.pos.x = 30.0;
    let (s2, flow) = apply_command(&s, Command::Start);
    assert_eq!(flow, Flow::Continue);
    assert_eq!(s2.screen, Screen::Playing);
    assert_eq!(s2.score, 40);
    assert_eq!(s2.player.pos.x, 30.0);
}

#[test]
fn game_over_start_resets_the_run() {
    let mut s = new_run(&menu());
    s.screen = Screen::GameOver;
    s.score = 120;
    s.enemies.push(enemy_at(Vec2::new(1.0, 1.0), Vec2::default(), &s.config));
    let (s2, _) = apply_command(&s, Command::Start);
    assert_eq!(s2.screen, Screen::Playing);
    assert_eq!(s2.score, 0);
    assert!(s2.enemies.is_empty());
}

#[test]
fn quit_terminates_from_every_screen() {
    for screen in [Screen::Menu, Screen::Playing, Screen::GameOver] {
        let s = GameContext { screen, ..menu() };
        let (_, flow) = apply_command(&s, Command::Quit);
        assert_eq!(flow, Flow::Quit, "from {screen:?}");
    }
}

#[test]
fn player_hit_moves_play_to_game_over() {
    let mut s = new_run(&menu());
    let pos = s.player.pos;
    s.enemies.push(enemy_at(pos, Vec2::default(), &s.config));
    let (s2, flow) = step(&s, &FrameInput::default(), DT, &mut seeded_rng());
    assert_eq!(flow, Flow::Continue);
    assert_eq!(s2.screen, Screen::GameOver);
}

// ── step dispatch ─────────────────────────────────────────────────────────────

#[test]
fn menu_only_scrolls_stars() {
    let mut s = menu();
    s.enemies.push(enemy_at(Vec2::new(10.0, 10.0), Vec2::new(0.0, 80.0), &s.config));
    let (s2, _) = step(&s, &FrameInput::default(), DT, &mut seeded_rng());
    assert_eq!(s2.screen, Screen::Menu);
    assert_eq!(s2.enemies, s.enemies);
    assert_eq!(s2.frame, 0);
    assert_ne!(s2.starfield, s.starfield);
}

#[test]
fn game_over_freezes_gameplay() {
    let mut s = new_run(&menu());
    s.screen = Screen::GameOver;
    s.score = 60;
    s.enemies.push(enemy_at(Vec2::new(10.0, 10.0), Vec2::new(0.0, 80.0), &s.config));
    let (s2, _) = step(&s, &FrameInput::default(), DT, &mut seeded_rng());
    assert_eq!(s2.screen, Screen::GameOver);
    assert_eq!(s2.score, 60);
    assert_eq!(s2.enemies, s.enemies);
}

#[test]
fn start_then_play_in_the_same_frame() {
    let s = menu();
    let (s2, flow) = step(&s, &with_commands(&[Command::Start]), DT, &mut seeded_rng());
    assert_eq!(flow, Flow::Continue);
    assert_eq!(s2.screen, Screen::Playing);
    assert_eq!(s2.frame, 1);
}

#[test]
fn quit_wins_over_later_commands() {
    let s = menu();
    let (s2, flow) = step(
        &s,
        &with_commands(&[Command::Quit, Command::Start]),
        DT,
        &mut seeded_rng(),
    );
    assert_eq!(flow, Flow::Quit);
    assert_eq!(s2.screen, Screen::Menu);
}

#[test]
fn playing_step_applies_controls() {
    let s = new_run(&menu());
    let input = FrameInput {
        controls: Controls {
            right: true,
            shoot: true,
            ..Controls::default()
        },
        commands: Vec::new(),
    };
    let (s2, _) = step(&s, &input, DT, &mut seeded_rng());
    assert!(s2.player.pos.x > s.player.pos.x);
    assert_eq!(s2.projectiles.len(), 1);
}

#[test]
fn full_cycle_menu_play_over_restart() {
    let mut rng = seeded_rng();
    let s = menu();
    let (s, _) = step(&s, &with_commands(&[Command::Start]), DT, &mut rng);
    assert_eq!(s.screen, Screen::Playing);

    let mut s = s;
    s.score = 100;
    let pos = s.player.pos;
    s.enemies.push(enemy_at(pos, Vec2::default(), &s.config));
    let (s, _) = step(&s, &FrameInput::default(), DT, &mut rng);
    assert_eq!(s.screen, Screen::GameOver);
    assert_eq!(s.score, 100);

    let (s, _) = step(&s, &with_commands(&[Command::Start]), DT, &mut rng);
    assert_eq!(s.screen, Screen::Playing);
    assert_eq!(s.score, 0);
    assert!(s.enemies.is_empty());
}
