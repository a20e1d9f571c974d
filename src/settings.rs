//! Gameplay configuration
//!
//! Everything the options menu can change, plus fixed tuning knobs. The
//! options menu writes back into this struct when a choice is applied.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Gameplay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// World width in logical pixels
    pub screen_width: f32,
    /// World height in logical pixels
    pub screen_height: f32,

    // === Options menu ===
    /// Depth planes in play (1 or 2)
    pub plane_count: u32,
    /// AI fish per plane
    pub fish_per_plane: u32,
    /// Global AI speed multiplier
    pub speed_modifier: f32,
    /// AI spawn sizes are drawn from [MIN_SPAWN_SIZE, size_cap)
    pub size_cap: f32,
    /// Whether AI fish react to the player closing in
    pub reactions_enabled: bool,

    // === Tuning ===
    /// Drive input multiplier
    pub player_acceleration: f32,
    /// Drag multiplier (negative, applied against velocity per axis)
    pub player_deceleration: f32,

    /// Honor the debug grow/shrink/kill inputs
    pub debug_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: consts::SCREEN_WIDTH,
            screen_height: consts::SCREEN_HEIGHT,

            plane_count: 2,
            fish_per_plane: 15,
            speed_modifier: 1.0,
            size_cap: 45.0,
            reactions_enabled: true,

            player_acceleration: 0.5,
            player_deceleration: -0.025,

            debug_enabled: false,
        }
    }
}

impl Config {
    /// Active pool size for the current options, capped at pool capacity
    pub fn total_fish(&self) -> usize {
        ((self.plane_count * self.fish_per_plane) as usize).min(consts::MAX_FISH)
    }

    /// Nearest depth plane index (drawn last, full scale)
    pub fn front_plane(&self) -> u32 {
        self.plane_count.saturating_sub(1)
    }
}
