//! Collision detection and kill resolution
//!
//! Contact is pixel-accurate: an AABB prefilter on the scaled bounds, then
//! per-pixel sampling of both sprite masks through the inverse of each
//! actor's cached render transform. Whatever the player last saw drawn is
//! exactly what can be bitten.

use glam::Vec2;

use super::behavior;
use super::sprite::SpriteBank;
use super::state::{Fish, GameEvent, GameState};
use crate::consts;
use crate::records::SessionRecords;
use crate::settings::Config;

/// Scaled actor bounds as an integer pixel rect, `[min, max)` per axis
fn pixel_rect(fish: &Fish) -> (i32, i32, i32, i32) {
    (
        (fish.pos.x - fish.half_extent.x) as i32,
        (fish.pos.y - fish.half_extent.y) as i32,
        (fish.pos.x + fish.half_extent.x) as i32,
        (fish.pos.y + fish.half_extent.y) as i32,
    )
}

/// Pixel-accurate contact test between two actors.
///
/// Both actors must share a depth plane and their pixel rects must
/// intersect; then each pixel of the intersection is pulled back into both
/// sprites' mask space, and one pixel opaque in both means contact.
pub fn overlap(a: &Fish, b: &Fish, sprites: &SpriteBank) -> bool {
    if a.plane != b.plane {
        return false;
    }
    let (ax0, ay0, ax1, ay1) = pixel_rect(a);
    let (bx0, by0, bx1, by1) = pixel_rect(b);
    let (x0, y0) = (ax0.max(bx0), ay0.max(by0));
    let (x1, y1) = (ax1.min(bx1), ay1.min(by1));
    if x0 >= x1 || y0 >= y1 {
        return false;
    }
    let a_mask = sprites.mask(a.species);
    let b_mask = sprites.mask(b.species);
    let a_inv = a.transform.inverse();
    let b_inv = b.transform.inverse();
    for y in y0..y1 {
        for x in x0..x1 {
            let probe = Vec2::new(x as f32, y as f32);
            let pa = a_inv.transform_point2(probe);
            let pb = b_inv.transform_point2(probe);
            if a_mask.alpha_at(pa.x as i32, pa.y as i32)
                && b_mask.alpha_at(pb.x as i32, pb.y as i32)
            {
                return true;
            }
        }
    }
    false
}

/// Resolve one player-vs-target contact.
///
/// Strictly bigger targets kill the player; anything else gets eaten,
/// growing the player and crediting the records exactly once per target.
/// Returns `true` when the kill grew the player wider than the screen,
/// which is the win condition.
pub fn hit(
    player: &mut Fish,
    target: &mut Fish,
    sprites: &SpriteBank,
    config: &Config,
    records: &mut SessionRecords,
    events: &mut Vec<GameEvent>,
) -> bool {
    if target.dead || player.dead || !overlap(player, target, sprites) {
        return false;
    }
    if player.size < target.size {
        player.die();
        events.push(GameEvent::PlayerDied);
        return false;
    }
    if target.die() {
        player.set_size(player.size + consts::GROWTH_PER_EAT, config.plane_count);
        records.add_kill(target.size, config);
        events.push(GameEvent::FishEaten {
            species: target.species,
            size: target.size,
        });
        if player.half_extent.x * 2.0 > config.screen_width {
            return true;
        }
    }
    false
}

/// The per-frame hunt: reflexes and contact against every active AI actor,
/// in pool order. The reflex runs right before each actor's contact check,
/// so a fish can be alerted and eaten in the same frame. Returns whether a
/// kill triggered the win condition.
pub fn hunt(state: &mut GameState) -> bool {
    let GameState {
        fish,
        active_count,
        player,
        sprites,
        config,
        records,
        events,
        ..
    } = state;
    let mut won = false;
    for target in &mut fish[..*active_count] {
        if config.reactions_enabled {
            behavior::proximity_alert(target, player);
        }
        if hit(player, target, sprites, config, records, events) {
            won = true;
        }
    }
    won
}
