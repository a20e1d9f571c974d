//! Sprite alpha masks for pixel-accurate collision
//!
//! The core never touches image files. A frontend decodes its sprite sheets
//! and hands the alpha channels over at startup; headless runs (tests, the
//! demo binary) use procedural silhouettes instead.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Species;

/// Opacity bitmap for one sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteMask {
    width: u32,
    height: u32,
    opaque: Vec<bool>,
}

impl SpriteMask {
    /// Build from decoded RGBA bytes; any alpha > 0 counts as opaque
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Self {
        let opaque = rgba.chunks_exact(4).map(|px| px[3] != 0).collect();
        Self {
            width,
            height,
            opaque,
        }
    }

    /// Fully opaque rectangle
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            opaque: vec![true; (width * height) as usize],
        }
    }

    /// Opaque ellipse inscribed in the bounds; the transparent corners give
    /// collision tests a fish-shaped silhouette to chew on
    pub fn ellipse(width: u32, height: u32) -> Self {
        let (rx, ry) = (width as f32 / 2.0, height as f32 / 2.0);
        let opaque = (0..width * height)
            .map(|i| {
                let x = (i % width) as f32 + 0.5;
                let y = (i / width) as f32 + 0.5;
                let (dx, dy) = ((x - rx) / rx, (y - ry) / ry);
                dx * dx + dy * dy <= 1.0
            })
            .collect();
        Self {
            width,
            height,
            opaque,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Unscaled sprite bounds
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Opacity at integer sprite coordinates; everything outside the bounds
    /// is transparent
    pub fn alpha_at(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.opaque[(y as u32 * self.width + x as u32) as usize]
    }
}

/// One mask per species
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteBank {
    masks: [SpriteMask; Species::COUNT],
}

impl SpriteBank {
    /// Procedural silhouettes with sprite-sheet-like proportions
    pub fn placeholder() -> Self {
        let masks = Species::ALL.map(|species| {
            let (w, h) = match species {
                Species::Player => (64, 40),
                Species::Bass => (72, 40),
                Species::Goldfish => (56, 36),
                Species::Puffer => (60, 56),
                Species::Shark => (96, 48),
                Species::Jelly => (40, 64),
            };
            SpriteMask::ellipse(w, h)
        });
        Self { masks }
    }

    /// Replace one species' mask with frontend-decoded sprite data
    pub fn set(&mut self, species: Species, mask: SpriteMask) {
        self.masks[species as usize] = mask;
    }

    pub fn mask(&self, species: Species) -> &SpriteMask {
        &self.masks[species as usize]
    }
}

impl Default for SpriteBank {
    fn default() -> Self {
        Self::placeholder()
    }
}
