/// Keyboard mapping and held-key tracking.
///
/// Terminals report key presses (and OS key-repeat as further presses)
/// rather than key state.  `KeyTracker` records the frame each key was last
/// seen; a key is "held" while that frame is within the hold window.
/// Terminals with keyboard enhancement also send releases, which drop the key
/// immediately.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One-shot actions that drive the screen state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Enter: start from the menu or restart after game over.
    Start,
    /// Esc or Ctrl+C.
    Quit,
}

/// Continuous actions sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
}

impl Controls {
    /// -1 for left, 1 for right, 0 for neither or both.
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Map a key press to a command.  Keys with no command return `None`.
pub fn command_for(event: &KeyEvent) -> Option<Command> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    match event.code {
        KeyCode::Enter => Some(Command::Start),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') | KeyCode::Char('C')
            if event.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(Command::Quit)
        }
        _ => None,
    }
}

/// Letters are tracked case-insensitively so Shift or Caps Lock don't
/// split one key into two.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[derive(Clone, Debug)]
pub struct KeyTracker {
    last_seen: HashMap<KeyCode, u64>,
    hold_window: u64,
}

impl KeyTracker {
    pub fn new(hold_window: u64) -> Self {
        Self {
            last_seen: HashMap::new(),
            hold_window,
        }
    }

    /// Record a key event seen during `frame` and return its command, if any.
    pub fn record(&mut self, event: &KeyEvent, frame: u64) -> Option<Command> {
        let code = normalize(event.code);
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(code, frame);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&code);
            }
        }
        command_for(event)
    }

    /// True if `key` was pressed or repeated within the hold window.
    pub fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(&normalize(key))
            .map(|&last| frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }

    /// Sample movement and fire keys for `frame`.
    pub fn controls(&self, frame: u64) -> Controls {
        Controls {
            left: self.is_held(KeyCode::Left, frame) || self.is_held(KeyCode::Char('a'), frame),
            right: self.is_held(KeyCode::Right, frame) || self.is_held(KeyCode::Char('d'), frame),
            shoot: self.is_held(KeyCode::Char(' '), frame) || self.is_held(KeyCode::Up, frame),
        }
    }

    /// Forget every held key, e.g. when the screen changes.
    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}
