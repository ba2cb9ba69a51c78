//! Retro terminal space shooter.
//!
//! The library holds the simulation (entities, spawning, collisions, the
//! screen state machine) and frame composition; the binary owns the
//! terminal, the input thread and the frame loop.

pub mod canvas;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod render;
pub mod spawner;
pub mod sprites;
pub mod starfield;
pub mod state;

pub use error::{GameError, Result};
