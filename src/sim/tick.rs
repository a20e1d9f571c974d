//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world deterministically, one frame per
//! call, dispatched on the outer state machine phase.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};
use super::{behavior, collision, menu, render};

/// Input commands for a single tick.
///
/// Momentary actions ("pressed") are edge-triggered by the frontend; drive
/// and the debug grow/shrink inputs are level-triggered (held).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Held movement drive, -1..=1 per axis (keys or stick)
    pub drive: Vec2,
    /// Pointer position in screen space, if the backend has one
    pub pointer: Option<Vec2>,
    /// Primary button held: steer toward the pointer
    pub pointer_held: bool,
    /// Primary button pressed this frame
    pub pointer_clicked: bool,
    /// Hop to the other depth plane (pressed)
    pub switch_plane: bool,
    /// Activate menu row / restart (pressed)
    pub confirm: bool,
    /// Pause toggle (pressed)
    pub pause: bool,
    /// Escape / back out (pressed)
    pub back: bool,
    pub menu_up: bool,
    pub menu_down: bool,
    pub menu_left: bool,
    pub menu_right: bool,
    /// Hide or reveal the main menu (pressed)
    pub toggle_menu: bool,
    /// Idle/demo mode: the core autopilots the player this frame
    pub idle: bool,
    /// Debug: grow one size per held tick
    pub debug_grow: bool,
    /// Debug: shrink one size per held tick
    pub debug_shrink: bool,
    /// Debug: kill the player (pressed)
    pub debug_kill: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Running => game_cycle(state, input),
        GamePhase::GameOver => game_over_cycle(state, input),
        GamePhase::Menu => menu_cycle(state, input),
        GamePhase::Victory => victory_cycle(state, input),
        GamePhase::Options => options_cycle(state, input),
    }
}

/// One running frame: shoal, then player, then pause/menu keys. A drifting
/// corpse freezes the backdrop and ignores the pause keys.
fn game_cycle(state: &mut GameState, input: &TickInput) {
    if !state.paused {
        move_shoal(state);
        move_player(state, input);
        state.time_ticks += 1;
    }
    if !state.player.dead {
        state.background = render::background_color(state.player.pos.y, &state.config);
        if input.pause {
            state.paused = !state.paused;
        }
        if input.back {
            if state.paused {
                state.go_to_menu(false);
            } else {
                state.paused = true;
            }
        }
    }
}

/// Swim, respawn when fully out of bounds, and run the behavior cycle for
/// every active AI actor
fn move_shoal(state: &mut GameState) {
    let GameState {
        fish: pool,
        active_count,
        rng,
        config,
        ..
    } = state;
    for fish in &mut pool[..*active_count] {
        fish.swim(Vec2::ZERO, config);
        let (out, _) = fish.out_of_bounds(config);
        if out {
            fish.randomize(rng, config);
        }
        behavior::cooldown_tick(fish, config);
    }
}

/// Player frame: input, swim, edge rebound (which ends the run for a lost
/// corpse), then the hunt. The hunt still runs on the game-over frame, so a
/// last-gasp bite counts.
fn move_player(state: &mut GameState, input: &TickInput) {
    let drive = read_player_input(state, input);
    state.player.swim(drive, &state.config);
    let (out, vertical) = state.player.player_out_of_bounds(&state.config);
    if out && state.player.rebound(vertical) {
        state.game_over();
    }
    if collision::hunt(state) {
        state.win();
    }
}

/// Gather this frame's control drive and apply the player's direct inputs
/// (plane hop, pointer steer, debug keys). The drive is normalized to unit
/// length; a dead player takes no input at all.
fn read_player_input(state: &mut GameState, input: &TickInput) -> Vec2 {
    if state.player.dead {
        return Vec2::ZERO;
    }
    let mut drive = input.drive;
    if input.idle {
        drive = idle_drive(state);
    }
    if input.switch_plane {
        state.player.switch_plane(state.config.plane_count);
    }
    if input.pointer_held {
        if let Some(pointer) = input.pointer {
            let delta = pointer - state.player.pos;
            // dead zone of one half-height around the player center
            if delta.length() >= state.player.half_extent.y {
                drive = delta;
            }
        }
    }
    if state.config.debug_enabled {
        if input.debug_grow {
            state.player.set_size(state.player.size + 1.0, state.config.plane_count);
        }
        if input.debug_shrink {
            state.player.set_size(state.player.size - 1.0, state.config.plane_count);
        }
        if input.debug_kill {
            state.player.die();
        }
    }
    let length = drive.length();
    if length > 1.0 {
        drive /= length;
    }
    if drive != Vec2::ZERO {
        state.player.facing_left = drive.x < 0.0;
        state.player.graph_updated = true;
    }
    drive
}

/// Autopilot drive for idle/demo mode: chase the nearest smaller fish on
/// our plane, bail when something bigger gets close
fn idle_drive(state: &GameState) -> Vec2 {
    let player = &state.player;
    let mut meal: Option<(f32, Vec2)> = None;
    let mut threat: Option<(f32, Vec2)> = None;
    for fish in state.active_fish() {
        if fish.dead || fish.plane != player.plane {
            continue;
        }
        let offset = fish.pos - player.pos;
        let distance = offset.length();
        if fish.size < player.size {
            if meal.is_none_or(|(best, _)| distance < best) {
                meal = Some((distance, offset));
            }
        } else if fish.size > player.size
            && distance < 6.0 * (fish.half_extent.x + player.half_extent.x)
            && threat.is_none_or(|(best, _)| distance < best)
        {
            threat = Some((distance, offset));
        }
    }
    match (threat, meal) {
        (Some((_, toward)), _) => -toward.normalize_or_zero(),
        (None, Some((_, toward))) => toward.normalize_or_zero(),
        (None, None) => Vec2::ZERO,
    }
}

/// Pointer movement test for hover handling; remembers the last position
fn track_pointer(state: &mut GameState, input: &TickInput) -> bool {
    let Some(pointer) = input.pointer else {
        return false;
    };
    let moved = state.prev_pointer != Some(pointer);
    state.prev_pointer = Some(pointer);
    moved
}

/// Main menu frame: the shoal keeps swimming as a backdrop. The hide
/// toggle swallows the rest of the frame's input, and a hidden menu
/// ignores everything else.
fn menu_cycle(state: &mut GameState, input: &TickInput) {
    move_shoal(state);
    let pointer_moved = track_pointer(state, input);
    let arrow_clicked = input.pointer_clicked
        && input
            .pointer
            .is_some_and(|p| menu::hide_toggle_region(&state.config, p));
    if input.toggle_menu || arrow_clicked {
        state.menu_hidden = !state.menu_hidden;
        return;
    }
    if state.menu_hidden {
        return;
    }
    if input.menu_down {
        state.main_menu.cursor_down();
    }
    if input.menu_up {
        state.main_menu.cursor_up();
    }
    if pointer_moved {
        if let Some(pointer) = input.pointer {
            state.main_menu.hover(pointer);
        }
    }
    if input.confirm || input.pointer_clicked {
        match state.main_menu.cursor {
            menu::MAIN_PLAY => state.start(),
            menu::MAIN_OPTIONS => state.go_to_options(),
            menu::MAIN_QUIT => state.quit_requested = true,
            _ => {}
        }
    }
}

/// Options frame: cursor moves clamp, left/right shift a row's choice with
/// immediate effect, confirm cycles it (or backs out on the Back row)
fn options_cycle(state: &mut GameState, input: &TickInput) {
    move_shoal(state);
    if input.back {
        state.go_to_menu(true);
    }
    if input.menu_down {
        state.options_menu.cursor_down();
    }
    if input.menu_up {
        state.options_menu.cursor_up();
    }
    if track_pointer(state, input) {
        if let Some(pointer) = input.pointer {
            state.options_menu.hover(pointer);
        }
    }
    if state.options_menu.cursor != menu::OPT_BACK {
        if input.menu_right && state.options_menu.selected_item().shift_right() {
            state.apply_options();
        }
        if input.menu_left && state.options_menu.selected_item().shift_left() {
            state.apply_options();
        }
    }
    if input.confirm || input.pointer_clicked {
        if state.options_menu.cursor == menu::OPT_BACK {
            state.go_to_menu(false);
        } else {
            state.options_menu.selected_item().cycle_right();
            state.apply_options();
        }
    }
}

/// Game-over frame: world frozen; restart or back out to the menu
fn game_over_cycle(state: &mut GameState, input: &TickInput) {
    if input.confirm || input.pointer_clicked {
        state.restart();
    }
    if input.back {
        state.go_to_menu(true);
    }
}

/// Victory frame: frozen tableau until any exit input
fn victory_cycle(state: &mut GameState, input: &TickInput) {
    if input.confirm || input.back {
        state.go_to_menu(false);
    }
}
