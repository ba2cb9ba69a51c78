mod display;

use std::io::{self, stdout, BufWriter, Write};
use std::process::ExitCode;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{debug, error, info, warn};
use rand::thread_rng;

use space_shooter::canvas::Viewport;
use space_shooter::compute::init_state;
use space_shooter::config::GameConfig;
use space_shooter::input::KeyTracker;
use space_shooter::render::compose;
use space_shooter::state::{step, FrameInput, Flow};
use space_shooter::{GameError, Result};

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    env_logger::init();

    match launch() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("fatal: {e}");
            eprintln!("space_shooter: {e}");
            ExitCode::FAILURE
        }
    }
}

fn launch() -> Result<()> {
    let config = GameConfig::default();
    config.validate()?;

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold
    // window in `KeyTracker`.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    debug!("keyboard enhancement: {keyboard_enhanced}");

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                debug!("input reader stopped: {e}");
                break;
            }
        }
    });

    let result = run(&mut out, &rx, config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Fixed-tick loop: drain input → step the state machine → render → sleep
/// out the rest of the frame.  Returns when the player quits.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, config: GameConfig) -> Result<()> {
    let mut rng = thread_rng();
    let frame_budget = config.frame_duration();
    let dt = config.tick_seconds();
    let (world_w, world_h) = (config.world_width, config.world_height);

    let (cols, rows) = terminal::size()?;
    let mut viewport = Some(Viewport::fit(cols, rows, world_w, world_h)?);
    display::clear(out)?;

    let mut tracker = KeyTracker::new(config.hold_window);
    let mut state = init_state(config, &mut rng);
    let mut frame: u64 = 0;
    info!("game started on a {cols}x{rows} terminal");

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut input = FrameInput::default();
        loop {
            match rx.try_recv() {
                Ok(Event::Key(key)) => input.commands.extend(tracker.record(&key, frame)),
                Ok(Event::Resize(cols, rows)) => {
                    display::clear(out)?;
                    viewport = match Viewport::fit(cols, rows, world_w, world_h) {
                        Ok(v) => Some(v),
                        Err(e) => {
                            warn!("{e}; rendering paused");
                            None
                        }
                    };
                }
                Ok(_) => {}
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    return Err(GameError::Io(io::Error::new(
                        io::ErrorKind::BrokenPipe,
                        "terminal input closed",
                    )));
                }
            }
        }
        input.controls = tracker.controls(frame);

        let previous = state.screen;
        let (next, flow) = step(&state, &input, dt, &mut rng);
        if flow == Flow::Quit {
            info!("quit requested on {:?} with score {}", next.screen, next.score);
            return Ok(());
        }
        if next.screen != previous {
            // Don't carry held keys across screens.
            tracker.clear();
        }
        state = next;

        if let Some(viewport) = &viewport {
            display::render(out, &compose(&state, viewport), viewport)?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}
