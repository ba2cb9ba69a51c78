/// Screen state machine: Menu → Playing → GameOver → Playing …
///
/// Commands are applied first, then exactly one handler runs for the active
/// screen.  Handlers follow the same pure style as `compute`.

use log::info;
use rand::Rng;

use crate::compute::{new_run, tick};
use crate::entities::{GameContext, Screen};
use crate::input::{Command, Controls};

/// Whether the loop keeps running after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Input gathered for one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    pub controls: Controls,
    pub commands: Vec<Command>,
}

/// Apply one command to the context.
///
/// | screen   | Start          | Quit |
/// |----------|----------------|------|
/// | Menu     | Playing (new)  | quit |
/// | Playing  | ignored        | quit |
/// | GameOver | Playing (new)  | quit |
pub fn apply_command(state: &GameContext, command: Command) -> (GameContext, Flow) {
    match (command, state.screen) {
        (Command::Quit, _) => (state.clone(), Flow::Quit),
        (Command::Start, Screen::Menu) | (Command::Start, Screen::GameOver) => {
            info!("starting new run from {:?}", state.screen);
            (new_run(state), Flow::Continue)
        }
        (Command::Start, Screen::Playing) => (state.clone(), Flow::Continue),
    }
}

/// Run one frame: commands, then the active screen's handler.
pub fn step(
    state: &GameContext,
    input: &FrameInput,
    dt: f32,
    rng: &mut impl Rng,
) -> (GameContext, Flow) {
    let mut current = state.clone();
    for &command in &input.commands {
        let (next, flow) = apply_command(&current, command);
        if flow == Flow::Quit {
            return (next, Flow::Quit);
        }
        current = next;
    }

    let next = match current.screen {
        Screen::Menu => update_menu(&current, dt, rng),
        Screen::Playing => update_playing(&current, &input.controls, dt, rng),
        Screen::GameOver => update_game_over(&current, dt, rng),
    };
    (next, Flow::Continue)
}

fn scroll_stars(state: &GameContext, dt: f32, rng: &mut impl Rng) -> GameContext {
    GameContext {
        starfield: state.starfield.update(dt, rng),
        ..state.clone()
    }
}

fn update_menu(state: &GameContext, dt: f32, rng: &mut impl Rng) -> GameContext {
    scroll_stars(state, dt, rng)
}

fn update_playing(
    state: &GameContext,
    controls: &Controls,
    dt: f32,
    rng: &mut impl Rng,
) -> GameContext {
    let next = tick(&scroll_stars(state, dt, rng), controls, dt, rng);
    if next.screen == Screen::GameOver {
        info!("ship destroyed at frame {}, final score {}", next.frame, next.score);
    }
    next
}

fn update_game_over(state: &GameContext, dt: f32, rng: &mut impl Rng) -> GameContext {
    scroll_stars(state, dt, rng)
}
