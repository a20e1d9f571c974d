//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - One `TickInput` in per frame, draw commands and events out
//! - No rendering or platform dependencies

pub mod behavior;
pub mod collision;
pub mod menu;
pub mod render;
pub mod sprite;
pub mod state;
pub mod tick;

pub use render::{BlendMode, ColorMod, DrawCommand, DrawFrame, render};
pub use sprite::{SpriteBank, SpriteMask};
pub use state::{Fish, GameEvent, GamePhase, GameState, Species};
pub use tick::{TickInput, tick};
