//! Draw command emission: transform refresh, depth ordering, background
//!
//! The render pass never touches pixels. It refreshes each drawn actor's
//! cached transform, resolves depth-plane draw order, and hands a frontend
//! a back-to-front command list plus the current background tint.

use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

use super::state::{Fish, GamePhase, GameState, Species};
use crate::settings::Config;

/// How a draw command composites onto the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlendMode {
    SourceOver,
    /// Depth cue for actors on farther planes
    Xor,
}

/// Color adjustment applied on top of the sprite (HSV-style)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorMod {
    pub saturation: f32,
    pub value: f32,
    pub alpha: f32,
}

impl ColorMod {
    pub const NONE: ColorMod = ColorMod {
        saturation: 1.0,
        value: 1.0,
        alpha: 1.0,
    };

    /// Washed out, over-bright, mostly transparent
    pub const CORPSE: ColorMod = ColorMod {
        saturation: 0.0,
        value: 2.0,
        alpha: 0.25,
    };
}

/// One sprite to draw. Commands arrive back-to-front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub species: Species,
    pub transform: Affine2,
    pub blend: BlendMode,
    pub color: ColorMod,
}

/// Everything a frontend needs to paint one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawFrame {
    /// RGBA depth tint behind everything
    pub background: [u8; 4],
    pub commands: Vec<DrawCommand>,
}

impl Fish {
    /// Refresh the cached transform from the current position. A dirty
    /// scene graph rebuilds the linear part as well (scale with the facing
    /// mirror and the belly-up death flip); otherwise only the translation
    /// is recomputed, so refreshing a standing-still world repeats the
    /// exact same frame.
    pub fn refresh_transform(&mut self) {
        let fx = if self.facing_left { -1.0 } else { 1.0 };
        let fy = if self.dead { -1.0 } else { 1.0 };
        let translation = Vec2::new(
            self.pos.x - fx * self.half_extent.x,
            self.pos.y - fy * self.half_extent.y,
        );
        if self.graph_updated {
            self.transform = Affine2::from_scale_angle_translation(
                Vec2::new(self.scale * fx, self.scale * fy),
                0.0,
                translation,
            );
            self.graph_updated = false;
        } else {
            self.transform.translation = translation;
        }
    }

    /// Draw command for the current cached transform
    pub fn command(&self, plane_count: u32) -> DrawCommand {
        let mut blend = BlendMode::SourceOver;
        let mut color = ColorMod::NONE;
        if self.dead {
            color = ColorMod::CORPSE;
        } else if self.plane < plane_count.saturating_sub(1) {
            blend = BlendMode::Xor;
        }
        DrawCommand {
            species: self.species,
            transform: self.transform,
            blend,
            color,
        }
    }
}

/// Produce this frame's draw list.
///
/// Transforms refresh for exactly the actors being drawn, phase by phase,
/// so collision always inverts the placement a frontend just showed. A
/// frontend (or headless driver) should therefore render every frame.
pub fn render(state: &mut GameState) -> DrawFrame {
    let plane_count = state.config.plane_count;
    let mut commands = Vec::new();
    match state.phase {
        GamePhase::Running => {
            // the ocean empties around a drifting corpse
            if !state.player.dead {
                queue_shoal(state, &mut commands);
            }
            state.player.refresh_transform();
            commands.push(state.player.command(plane_count));
        }
        GamePhase::Menu | GamePhase::Options => queue_shoal(state, &mut commands),
        GamePhase::Victory => {
            queue_shoal(state, &mut commands);
            state.player.refresh_transform();
            commands.push(state.player.command(plane_count));
        }
        GamePhase::GameOver => {}
    }
    DrawFrame {
        background: state.background,
        commands,
    }
}

/// Refresh and emit the AI shoal back-to-front
fn queue_shoal(state: &mut GameState, out: &mut Vec<DrawCommand>) {
    for fish in &mut state.fish[..state.active_count] {
        fish.refresh_transform();
    }
    let front = state.config.front_plane() as i32;
    let actors: Vec<&Fish> = state.active_fish().iter().collect();
    draw_planes_recursive(actors, front, state.config.plane_count, out);
}

/// Emit one plane bucket after recursing into everything farther away, so
/// nearer planes always land later in the list. Pool order is preserved
/// within each bucket.
fn draw_planes_recursive(
    actors: Vec<&Fish>,
    plane: i32,
    plane_count: u32,
    out: &mut Vec<DrawCommand>,
) {
    if plane < 0 || actors.is_empty() {
        return;
    }
    let (current, farther): (Vec<&Fish>, Vec<&Fish>) = actors
        .into_iter()
        .filter(|fish| (fish.plane as i32) <= plane)
        .partition(|fish| fish.plane as i32 == plane);
    draw_planes_recursive(farther, plane - 1, plane_count, out);
    for fish in current {
        out.push(fish.command(plane_count));
    }
}

/// Depth tint for the water: full brightness at the surface, each channel
/// fading to black at its own depth
pub fn background_color(y: f32, config: &Config) -> [u8; 4] {
    let h = config.screen_height;
    [
        channel_by_depth(y, h / 3.0, 128.0),
        channel_by_depth(y, h / 2.0, 255.0),
        channel_by_depth(y, h, 192.0),
        128,
    ]
}

fn channel_by_depth(y: f32, max_depth: f32, max_value: f32) -> u8 {
    let depth = y.clamp(0.0, max_depth);
    (max_value * (max_depth - depth) / max_depth) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::behavior;
    use crate::sim::sprite::SpriteBank;

    fn plane_fish(plane: u32, x: f32) -> Fish {
        let mut fish = Fish::new(Species::Bass, Vec2::new(72.0, 40.0));
        fish.plane = plane;
        fish.set_size(8.0, 2);
        fish.pos = Vec2::new(x, 100.0);
        fish.refresh_transform();
        fish
    }

    #[test]
    fn test_draw_order_far_planes_first() {
        // pool order with planes {0, 1, 0, 1, 1}
        let pool = [
            plane_fish(0, 10.0),
            plane_fish(1, 20.0),
            plane_fish(0, 30.0),
            plane_fish(1, 40.0),
            plane_fish(1, 50.0),
        ];
        let mut out = Vec::new();
        draw_planes_recursive(pool.iter().collect(), 1, 2, &mut out);

        // plane 0 in pool order, then plane 1 in pool order
        let expected: Vec<f32> = [0usize, 2, 1, 3, 4]
            .iter()
            .map(|&slot| pool[slot].transform.translation.x)
            .collect();
        let xs: Vec<f32> = out.iter().map(|cmd| cmd.transform.translation.x).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn test_far_plane_draws_xor() {
        let far = plane_fish(0, 10.0);
        let near = plane_fish(1, 10.0);
        assert_eq!(far.command(2).blend, BlendMode::Xor);
        assert_eq!(near.command(2).blend, BlendMode::SourceOver);
    }

    #[test]
    fn test_corpse_draws_flipped_and_faded() {
        let mut fish = plane_fish(1, 10.0);
        fish.die();
        fish.refresh_transform();

        let cmd = fish.command(2);
        assert_eq!(cmd.color, ColorMod::CORPSE);
        assert_eq!(cmd.blend, BlendMode::SourceOver);
        // belly-up: y axis mirrored
        assert!(cmd.transform.matrix2.y_axis.y < 0.0);
    }

    #[test]
    fn test_refresh_keeps_placement_on_position() {
        let config = Config::default();
        let mut fish = plane_fish(1, 100.0);
        fish.species = Species::Goldfish;
        fish.cooldown = 250;
        fish.vel = Vec2::new(3.0, 0.0);

        // the settle step at cooldown 240 cuts velocity without marking
        // the scene graph dirty; placement must keep tracking the position
        for _ in 0..20 {
            fish.swim(Vec2::ZERO, &config);
            behavior::cooldown_tick(&mut fish, &config);
            fish.refresh_transform();
            assert_eq!(fish.transform.translation, fish.pos - fish.half_extent);
        }
        assert_eq!(fish.vel.x, 1.0);

        // refreshing again without a world step changes nothing
        let held = fish.transform;
        fish.refresh_transform();
        assert_eq!(fish.transform, held);
    }

    #[test]
    fn test_background_fades_with_depth() {
        let config = Config::default();
        assert_eq!(background_color(0.0, &config), [128, 255, 192, 128]);
        assert_eq!(background_color(-50.0, &config), [128, 255, 192, 128]);

        // red bottoms out first, then green, then blue
        let mid = background_color(config.screen_height / 2.0, &config);
        assert_eq!(mid, [0, 0, 96, 128]);
        assert_eq!(
            background_color(config.screen_height, &config),
            [0, 0, 0, 128]
        );
    }

    #[test]
    fn test_game_over_frame_draws_no_actors() {
        let mut state = GameState::new(2, Config::default(), SpriteBank::placeholder());
        state.start();
        state.player.die();
        state.game_over();

        let frame = render(&mut state);
        assert!(frame.commands.is_empty());
    }

    #[test]
    fn test_running_frame_hides_shoal_around_corpse() {
        let mut state = GameState::new(2, Config::default(), SpriteBank::placeholder());
        state.start();

        let alive = render(&mut state);
        assert_eq!(alive.commands.len(), state.active_count + 1);

        state.player.die();
        let dead = render(&mut state);
        assert_eq!(dead.commands.len(), 1);
        assert_eq!(dead.commands[0].color, ColorMod::CORPSE);
    }
}
