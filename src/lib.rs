//! Bigger Fish - an eat-or-be-eaten aquarium arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, species behavior, collision, game state)
//! - `settings`: Gameplay configuration
//! - `records`: Session score records

pub mod records;
pub mod settings;
pub mod sim;

pub use records::SessionRecords;
pub use settings::Config;

/// Game configuration constants
pub mod consts {
    /// World dimensions in logical pixels (+Y points down)
    pub const SCREEN_WIDTH: f32 = 1920.0;
    pub const SCREEN_HEIGHT: f32 = 1080.0;

    /// Fixed simulation rate; behavior cooldowns count frames at this rate
    pub const TICKS_PER_SECOND: i32 = 60;

    /// Hard limit on depth planes
    pub const MAX_PLANES: u32 = 2;
    /// Densest per-plane population the options menu offers
    pub const MAX_FISH_PER_PLANE: usize = 25;
    /// Actor pool capacity
    pub const MAX_FISH: usize = MAX_PLANES as usize * MAX_FISH_PER_PLANE;

    /// An actor of this size renders its sprite 1:1 on the nearest plane
    pub const SPRITE_BASE_SIZE: f32 = 64.0;
    /// Per-plane sprite shrink for farther planes
    pub const PLANE_SCALE_FALLOFF: f32 = 0.75;

    /// Corpse drift acceleration (negative y = toward the surface)
    pub const CORPSE_DRIFT_ACCEL: f32 = -0.2;
    /// Velocity damping applied when the player rebounds off an edge
    pub const REBOUND_DAMPING: f32 = -0.5;

    /// Player spawn size and growth per eaten fish
    pub const PLAYER_START_SIZE: f32 = 10.0;
    pub const GROWTH_PER_EAT: f32 = 1.0;
    /// Minimum actor size; shrinks below this are rejected outright
    pub const MIN_FISH_SIZE: f32 = 1.0;
    /// AI actors never spawn smaller than this
    pub const MIN_SPAWN_SIZE: f32 = 5.0;
}

/// Sprite scale for an actor on `plane` out of `plane_count` planes.
///
/// Plane `plane_count - 1` is nearest (scale 1); each step farther back
/// shrinks by [`consts::PLANE_SCALE_FALLOFF`].
#[inline]
pub fn depth_scale(plane: u32, plane_count: u32) -> f32 {
    let depth = plane_count.saturating_sub(1).saturating_sub(plane);
    consts::PLANE_SCALE_FALLOFF.powi(depth as i32)
}
