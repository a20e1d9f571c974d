//! Game state and core simulation types
//!
//! All state that must be persisted for snapshot/determinism lives here.

use glam::{Affine2, Vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::menu::{self, Menu};
use super::render;
use super::sprite::SpriteBank;
use crate::consts;
use crate::records::SessionRecords;
use crate::settings::Config;

/// Actor species. Behavior dispatch is a `match` on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    Player,
    Bass,
    Goldfish,
    Puffer,
    Shark,
    Jelly,
}

impl Species {
    pub const COUNT: usize = 6;

    pub const ALL: [Species; Species::COUNT] = [
        Species::Player,
        Species::Bass,
        Species::Goldfish,
        Species::Puffer,
        Species::Shark,
        Species::Jelly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Player => "player",
            Species::Bass => "bass",
            Species::Goldfish => "goldfish",
            Species::Puffer => "puffer",
            Species::Shark => "shark",
            Species::Jelly => "jelly",
        }
    }

    /// Species mix for one pool slot: slot zero is the lone jellyfish, then
    /// 35% bass, 30% goldfish, 20% puffer, and sharks for the rest.
    pub fn for_slot(slot: usize, total: usize) -> Species {
        if slot == 0 {
            return Species::Jelly;
        }
        let band = slot as f32 / total as f32;
        if band < 0.35 {
            Species::Bass
        } else if band < 0.65 {
            Species::Goldfish
        } else if band < 0.85 {
            Species::Puffer
        } else {
            Species::Shark
        }
    }
}

/// Current phase of the outer game state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Main menu over the swimming shoal
    Menu,
    /// Options menu over the swimming shoal
    Options,
    /// Active gameplay (may additionally be paused)
    Running,
    /// Run ended; world frozen under the flavor quote
    GameOver,
    /// Player outgrew the screen; frozen tableau
    Victory,
}

/// Gameplay events for frontend feedback (audio, haptics)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    FishEaten { species: Species, size: f32 },
    PlayerDied,
    Victory,
    GameOver,
}

/// One actor. The player and every AI fish share this struct; species
/// behavior lives in `behavior`, not in per-species types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fish {
    pub species: Species,
    /// Center position in screen space (+Y down)
    pub pos: Vec2,
    pub vel: Vec2,
    /// Gameplay size, never below 1
    pub size: f32,
    /// Sprite scale derived from size and depth plane
    pub scale: f32,
    /// Scaled half-bounds of the sprite
    pub half_extent: Vec2,
    /// Unscaled sprite pixel bounds, cached from the sprite bank
    pub base_extent: Vec2,
    /// Depth plane; 0 is farthest, `plane_count - 1` nearest
    pub plane: u32,
    pub facing_left: bool,
    pub dead: bool,
    /// Drag multiplier in the swim integrator: 1 for the player, 0 for AI
    pub friction: f32,
    /// Behavior timer. 0 = inactive, positive = counting down toward the
    /// species triggers, -1 = armed to wrap to the full cycle next tick.
    pub cooldown: i32,
    /// Cached transform is stale and needs a full rebuild
    pub graph_updated: bool,
    /// Render transform as of the last draw; collision inverts this too
    pub transform: Affine2,
}

impl Fish {
    pub fn new(species: Species, base_extent: Vec2) -> Self {
        Self {
            species,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: consts::MIN_FISH_SIZE,
            scale: 0.0,
            half_extent: Vec2::ZERO,
            base_extent,
            plane: 0,
            facing_left: false,
            dead: false,
            friction: 0.0,
            cooldown: 0,
            graph_updated: true,
            transform: Affine2::IDENTITY,
        }
    }

    /// One integration step. Drive is the control input; a dead actor
    /// ignores it and drifts belly-up toward the surface instead.
    pub fn swim(&mut self, drive: Vec2, config: &Config) {
        let acc = if self.dead {
            Vec2::new(0.0, consts::CORPSE_DRIFT_ACCEL)
        } else {
            drive * config.player_acceleration
                + self.friction * self.vel * config.player_deceleration
        };
        self.vel += acc;
        self.pos += self.vel;
    }

    /// Recompute projection data from size and depth plane
    pub fn resize_sprite(&mut self, plane_count: u32) {
        self.scale =
            crate::depth_scale(self.plane, plane_count) * self.size / consts::SPRITE_BASE_SIZE;
        self.half_extent = self.scale * self.base_extent / 2.0;
        self.graph_updated = true;
    }

    /// Set gameplay size and rescale the sprite. A change that would drop
    /// below the minimum is rejected wholesale; returns whether it applied.
    pub fn set_size(&mut self, new_size: f32, plane_count: u32) -> bool {
        if new_size < consts::MIN_FISH_SIZE {
            return false;
        }
        self.size = new_size;
        self.resize_sprite(plane_count);
        true
    }

    /// Hop to the other depth plane (cyclic with more than two)
    pub fn switch_plane(&mut self, plane_count: u32) {
        self.plane = (self.plane + 1) % plane_count.max(1);
        self.resize_sprite(plane_count);
    }

    /// Idempotent kill. All death side effects key off the `true` return,
    /// so credit for a kill is only ever given once.
    pub fn die(&mut self) -> bool {
        if self.dead {
            return false;
        }
        self.dead = true;
        self.vel = Vec2::ZERO;
        self.cooldown = 0;
        self.graph_updated = true;
        true
    }

    /// AI bounds rule: an actor mid-cycle is never out; otherwise out once
    /// the whole sprite is past an edge. Returns `(out, vertical)`.
    pub fn out_of_bounds(&self, config: &Config) -> (bool, bool) {
        if self.cooldown != 0 {
            return (false, false);
        }
        let horizontal = !(self.pos.x >= -self.half_extent.x
            && self.pos.x <= config.screen_width + self.half_extent.x);
        let vertical = !(self.pos.y >= -self.half_extent.y
            && self.pos.y <= config.screen_height + self.half_extent.y);
        (horizontal || vertical, vertical)
    }

    /// Player bounds rule: velocity-aware and pre-emptive, except the
    /// bottom edge which only triggers once the sprite has fully left the
    /// frame (so a corpse or diving player can visibly exit).
    pub fn player_out_of_bounds(&self, config: &Config) -> (bool, bool) {
        let horizontal = (self.vel.x < 0.0 && self.pos.x < self.half_extent.x)
            || (self.vel.x > 0.0 && self.pos.x > config.screen_width - self.half_extent.x);
        let vertical = (self.vel.y < 0.0 && self.pos.y < self.half_extent.y)
            || (self.vel.y > 0.0 && self.pos.y > config.screen_height + self.half_extent.y);
        (horizontal || vertical, vertical)
    }

    /// Bounce off a screen edge, undoing the offending displacement. A dead
    /// player drifting out vertically is gone for good; returns `true` in
    /// that case so the caller can end the run.
    pub fn rebound(&mut self, vertical: bool) -> bool {
        if vertical {
            if self.dead {
                return true;
            }
            self.pos.y -= self.vel.y;
            self.vel.y *= consts::REBOUND_DAMPING;
        } else {
            self.pos.x -= self.vel.x;
            self.vel.x *= consts::REBOUND_DAMPING;
        }
        false
    }

    /// Respawn in place: new plane, size, velocity, and an entry position
    /// just off screen. The jellyfish drifts in vertically from the top or
    /// bottom edge; every other species swims in from a side.
    pub fn randomize(&mut self, rng: &mut Pcg32, config: &Config) {
        self.dead = false;
        self.cooldown = 0;
        self.plane = rng.random_range(0..config.plane_count);
        let size = rng.random_range(consts::MIN_SPAWN_SIZE as i32..config.size_cap as i32);
        self.set_size(size as f32, config.plane_count);
        self.vel.x = rng.random_range(1..=3) as f32;
        self.vel.y = rng.random_range(-1..=1) as f32;
        if rng.random_bool(0.5) {
            self.vel.x = -self.vel.x;
        }
        if self.species == Species::Jelly {
            self.vel.y = self.vel.x;
            self.vel.x = 0.0;
            self.pos.x = rng.random_range(0..config.screen_width as i32) as f32;
            self.pos.y = if self.vel.y < 0.0 {
                config.screen_height + self.half_extent.y - 1.0
            } else {
                1.0 - self.half_extent.y
            };
        } else {
            self.pos.y = rng.random_range(0..config.screen_height as i32) as f32;
            self.pos.x = if self.vel.x < 0.0 {
                config.screen_width + self.half_extent.x - 1.0
            } else {
                1.0 - self.half_extent.x
            };
        }
        self.vel *= config.speed_modifier;
        self.facing_left = self.vel.x < 0.0;
        self.graph_updated = true;
    }

    /// Fresh player at screen center on the nearest plane
    pub fn reset_player(&mut self, config: &Config) {
        self.dead = false;
        self.plane = config.front_plane();
        self.set_size(consts::PLAYER_START_SIZE, config.plane_count);
        self.pos = Vec2::new(config.screen_width / 2.0, config.screen_height / 2.0);
        self.vel = Vec2::ZERO;
        self.friction = 1.0;
        self.graph_updated = true;
    }
}

/// The whole simulation world.
///
/// Serializes to a snapshot that resumes bit-identically, RNG state
/// included; only the sprite bank and the event queue are transient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub seed: u64,
    pub rng: Pcg32,
    pub config: Config,
    pub phase: GamePhase,
    /// Orthogonal to `phase`; only meaningful while running
    pub paused: bool,
    /// Fixed actor pool; only the first `active_count` slots are in play
    pub fish: Vec<Fish>,
    pub active_count: usize,
    pub player: Fish,
    pub records: SessionRecords,
    pub main_menu: Menu,
    pub options_menu: Menu,
    pub menu_hidden: bool,
    /// Last pointer position, for hover-on-move detection
    pub prev_pointer: Option<Vec2>,
    /// Flavor line chosen at the last game over
    pub quote_index: usize,
    /// Depth-tinted background, RGBA
    pub background: [u8; 4],
    /// Set by the menu Quit action; the frontend owns process exit
    pub quit_requested: bool,
    /// Unpaused running time in ticks
    pub time_ticks: u64,
    #[serde(skip)]
    pub sprites: SpriteBank,
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64, config: Config, sprites: SpriteBank) -> Self {
        let main_menu = menu::main_menu(&config);
        let options_menu = menu::options_menu(&config);
        let player_extent = sprites.mask(Species::Player).extent();
        let mut fish = Vec::with_capacity(consts::MAX_FISH);
        for slot in 0..consts::MAX_FISH {
            let species = Species::for_slot(slot, consts::MAX_FISH);
            fish.push(Fish::new(species, sprites.mask(species).extent()));
        }
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            phase: GamePhase::Menu,
            paused: false,
            fish,
            active_count: 0,
            player: Fish::new(Species::Player, player_extent),
            records: SessionRecords::new(),
            main_menu,
            options_menu,
            menu_hidden: false,
            prev_pointer: None,
            quote_index: 0,
            background: [0; 4],
            quit_requested: false,
            time_ticks: 0,
            sprites,
            events: Vec::new(),
        };
        state.player.reset_player(&state.config);
        state.background =
            render::background_color(state.config.screen_height / 2.0, &state.config);
        state.go_to_menu(true);
        state
    }

    /// Active slice of the actor pool
    pub fn active_fish(&self) -> &[Fish] {
        &self.fish[..self.active_count]
    }

    /// Resize the active pool prefix and reassign slot species for the new
    /// total. Slots are stable identities; nothing reallocates.
    pub fn generate_fish(&mut self) {
        self.active_count = self.config.total_fish();
        for slot in 0..self.active_count {
            let species = Species::for_slot(slot, self.active_count);
            self.fish[slot].species = species;
            self.fish[slot].base_extent = self.sprites.mask(species).extent();
        }
    }

    /// Respawn every active AI actor
    pub fn randomize_all(&mut self) {
        for slot in 0..self.active_count {
            self.fish[slot].randomize(&mut self.rng, &self.config);
        }
    }

    /// Return to the main menu, optionally regenerating the backdrop shoal
    pub fn go_to_menu(&mut self, regenerate: bool) {
        self.phase = GamePhase::Menu;
        self.menu_hidden = false;
        self.main_menu.cursor = 0;
        if regenerate {
            self.generate_fish();
            self.randomize_all();
        }
    }

    /// Enter the options menu with the cursor on Back
    pub fn go_to_options(&mut self) {
        self.phase = GamePhase::Options;
        self.options_menu.cursor = menu::OPT_BACK;
    }

    /// Copy the options menu selections into live config and rebuild the
    /// shoal to match
    pub fn apply_options(&mut self) {
        self.config.plane_count = self.options_menu.items[menu::OPT_PLANES].value() as u32;
        self.config.fish_per_plane = self.options_menu.items[menu::OPT_AMOUNT].value() as u32;
        self.config.speed_modifier = self.options_menu.items[menu::OPT_SPEED].value();
        self.config.size_cap = self.options_menu.items[menu::OPT_SIZE_CAP].value();
        self.config.reactions_enabled =
            self.options_menu.items[menu::OPT_REACTIONS].value() == 1.0;
        self.generate_fish();
        self.randomize_all();
        log::info!(
            "options applied: {} planes, {} fish/plane, speed x{}, size cap {}, reactions {}",
            self.config.plane_count,
            self.config.fish_per_plane,
            self.config.speed_modifier,
            self.config.size_cap,
            self.config.reactions_enabled,
        );
    }

    /// Begin a run from the menu: fresh shoal sized to current options
    pub fn start(&mut self) {
        self.generate_fish();
        self.restart();
        self.paused = false;
    }

    /// (Re)start a run: fresh score, fresh shoal, fresh player
    pub fn restart(&mut self) {
        self.phase = GamePhase::Running;
        self.records.start_run();
        self.randomize_all();
        self.player.reset_player(&self.config);
        log::info!(
            "run started: {} planes, {} fish",
            self.config.plane_count,
            self.active_count
        );
    }

    /// End the run and pick the flavor line shown over the frozen backdrop
    pub fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.quote_index = self.rng.random_range(0..QUOTES.len());
        self.events.push(GameEvent::GameOver);
        log::info!(
            "game over: score {:.0}, eaten {}",
            self.records.score,
            self.records.eaten
        );
    }

    /// The player outgrew the screen. Everything on the nearest plane hops
    /// back one so the victory tableau has a clear foreground.
    pub fn win(&mut self) {
        let front = self.config.front_plane();
        for slot in 0..self.active_count {
            if self.fish[slot].plane == front {
                self.fish[slot].switch_plane(self.config.plane_count);
            }
        }
        if self.player.plane == front {
            self.player.switch_plane(self.config.plane_count);
        }
        self.phase = GamePhase::Victory;
        self.events.push(GameEvent::Victory);
        log::info!("victory: score {:.0}", self.records.score);
    }

    /// Drain the events emitted since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Flavor line chosen at the last game over
    pub fn game_over_quote(&self) -> &'static str {
        QUOTES[self.quote_index % QUOTES.len()]
    }
}

/// Game-over flavor lines; one is picked at random when a run ends
pub const QUOTES: &[&str] = &[
    "YOU DIED",
    "You tried.",
    "You're fry-ed.",
    "Try again.",
    "You've got a valuable lesson.",
    "Press Spacebar to restart.",
    "Be careful next time.",
    "So it goes.",
    "It happens.",
    "Too greedy.",
    "You just went belly up.",
    "Well, at least give them indigestion.",
    "You still have two ways out.",
    "Some fish can swallow prey 3 times their own size. Alas, you're not one of those.",
    "There's always a bigger fish.",
    "Don't bite more than you can swallow.",
    "That's it, no more Bill, his greed got him killed.",
    "Oops, someone got greedy.",
    "Eat the fish smaller than you, or be eaten by a bigger fish.",
    "Use the keyboard or the mouse to move, whatever suits you best.",
    "If you're cornered, press Spacebar or RMB to dodge to back or front plane.",
    "Press H or click the little arrow in the main menu to hide it and just relax.",
    "Press P or Enter to pause the game.",
    "Sharks attack anything they see as a good meal, for better or worse.",
    "Goldfish will try to escape with a dodge and a dash.",
    "Pufferfish are easily scared and puff up to make themselves inedible... or more delicious.",
    "The bass will run away when threatened, but will always try to sneak back.",
    "The jellyfish is brainless but not harmless. Still, just as edible as the other fish.",
    "Remember, objects further to the back are bigger than they appear.",
    "If you want more - or less - challenge, go to Options and play around.",
    "The bigger the fish, the better the score, but don't get too greedy.",
    "If the fish isn't afraid of you, that may be for a reason.",
    "GULP",
];

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_config() -> Config {
        Config::default()
    }

    fn test_fish(species: Species, size: f32) -> Fish {
        let mut fish = Fish::new(species, Vec2::new(64.0, 40.0));
        fish.plane = 1;
        fish.set_size(size, 2);
        fish
    }

    #[test]
    fn test_set_size_rejects_shrink_below_floor() {
        let mut fish = test_fish(Species::Bass, 5.0);
        let half_before = fish.half_extent;

        assert!(!fish.set_size(0.5, 2));
        assert_eq!(fish.size, 5.0);
        assert_eq!(fish.half_extent, half_before);

        assert!(fish.set_size(1.0, 2));
        assert_eq!(fish.size, 1.0);
    }

    #[test]
    fn test_die_credits_exactly_once() {
        let mut fish = test_fish(Species::Goldfish, 8.0);
        fish.vel = Vec2::new(3.0, -2.0);
        fish.cooldown = 120;

        assert!(fish.die());
        assert!(fish.dead);
        assert_eq!(fish.vel, Vec2::ZERO);
        assert_eq!(fish.cooldown, 0);

        assert!(!fish.die());
    }

    #[test]
    fn test_species_slot_mix() {
        assert_eq!(Species::for_slot(0, 30), Species::Jelly);
        assert_eq!(Species::for_slot(1, 30), Species::Bass);
        assert_eq!(Species::for_slot(10, 30), Species::Bass);
        assert_eq!(Species::for_slot(11, 30), Species::Goldfish);
        assert_eq!(Species::for_slot(19, 30), Species::Goldfish);
        assert_eq!(Species::for_slot(20, 30), Species::Puffer);
        assert_eq!(Species::for_slot(25, 30), Species::Puffer);
        assert_eq!(Species::for_slot(26, 30), Species::Shark);
        assert_eq!(Species::for_slot(29, 30), Species::Shark);
    }

    #[test]
    fn test_scale_shrinks_with_depth() {
        let config = test_config();
        let mut near = test_fish(Species::Bass, 16.0);
        near.plane = config.front_plane();
        near.resize_sprite(config.plane_count);

        let mut far = near.clone();
        far.plane = 0;
        far.resize_sprite(config.plane_count);

        assert_eq!(near.scale, 16.0 / 64.0);
        assert_eq!(far.scale, 0.75 * 16.0 / 64.0);
    }

    #[test]
    fn test_corpse_drifts_toward_surface() {
        let config = test_config();
        let mut fish = test_fish(Species::Player, 10.0);
        fish.pos = Vec2::new(500.0, 500.0);
        fish.die();

        fish.swim(Vec2::new(1.0, 1.0), &config);
        assert!(fish.vel.y < 0.0);
        assert_eq!(fish.vel.x, 0.0);
        assert!(fish.pos.y < 500.0);
    }

    #[test]
    fn test_ai_mid_cycle_is_never_out_of_bounds() {
        let config = test_config();
        let mut fish = test_fish(Species::Puffer, 10.0);
        fish.pos = Vec2::new(-500.0, -500.0);
        fish.cooldown = 30;
        assert_eq!(fish.out_of_bounds(&config), (false, false));

        fish.cooldown = 0;
        let (out, vertical) = fish.out_of_bounds(&config);
        assert!(out);
        assert!(vertical);
    }

    #[test]
    fn test_player_bottom_edge_is_not_preemptive() {
        let config = test_config();
        let mut player = test_fish(Species::Player, 10.0);
        player.pos = Vec2::new(960.0, config.screen_height - 1.0);
        player.vel = Vec2::new(0.0, 3.0);
        let (out, _) = player.player_out_of_bounds(&config);
        assert!(!out);

        player.pos.y = config.screen_height + player.half_extent.y + 1.0;
        let (out, vertical) = player.player_out_of_bounds(&config);
        assert!(out);
        assert!(vertical);
    }

    #[test]
    fn test_rebound_reports_lost_corpse() {
        let mut player = test_fish(Species::Player, 10.0);
        player.pos = Vec2::new(100.0, 10.0);
        player.vel = Vec2::new(0.0, -4.0);

        assert!(!player.rebound(true));
        assert_eq!(player.pos.y, 14.0);
        assert_eq!(player.vel.y, 2.0);

        player.die();
        assert!(player.rebound(true));
    }

    #[test]
    fn test_randomize_spawns_just_off_screen() {
        let config = test_config();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..50 {
            let mut fish = test_fish(Species::Shark, 10.0);
            fish.randomize(&mut rng, &config);
            assert!(!fish.dead);
            assert!(fish.size >= consts::MIN_SPAWN_SIZE && fish.size < config.size_cap);
            assert!(fish.plane < config.plane_count);
            assert!(fish.vel.x != 0.0);
            let off_left = fish.pos.x == 1.0 - fish.half_extent.x && fish.vel.x > 0.0;
            let off_right = fish.pos.x == config.screen_width + fish.half_extent.x - 1.0
                && fish.vel.x < 0.0;
            assert!(off_left || off_right);
            assert_eq!(fish.facing_left, fish.vel.x < 0.0);
        }
    }

    #[test]
    fn test_jellyfish_spawns_drifting_vertically() {
        let config = test_config();
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..50 {
            let mut jelly = test_fish(Species::Jelly, 10.0);
            jelly.randomize(&mut rng, &config);
            assert_eq!(jelly.vel.x, 0.0);
            assert!(jelly.vel.y != 0.0);
            if jelly.vel.y < 0.0 {
                assert_eq!(jelly.pos.y, config.screen_height + jelly.half_extent.y - 1.0);
            } else {
                assert_eq!(jelly.pos.y, 1.0 - jelly.half_extent.y);
            }
        }
    }

    #[test]
    fn test_win_clears_the_nearest_plane() {
        let mut state = GameState::new(3, test_config(), SpriteBank::placeholder());
        state.start();
        let front = state.config.front_plane();
        state.player.plane = front;

        state.win();
        assert_eq!(state.phase, GamePhase::Victory);
        assert!(state.active_fish().iter().all(|f| f.plane != front));
        assert_ne!(state.player.plane, front);
        assert_eq!(state.take_events(), vec![GameEvent::Victory]);
    }

    #[test]
    fn test_restart_resets_run_but_keeps_records() {
        let mut state = GameState::new(5, test_config(), SpriteBank::placeholder());
        state.start();
        let config = state.config.clone();
        state.records.add_kill(12.0, &config);
        let best = state.records.high_score;

        state.game_over();
        state.restart();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.records.score, 0.0);
        assert_eq!(state.records.high_score, best);
        assert_eq!(state.player.size, consts::PLAYER_START_SIZE);
        assert_eq!(state.player.plane, state.config.front_plane());
        assert_eq!(
            state.player.pos,
            Vec2::new(state.config.screen_width / 2.0, state.config.screen_height / 2.0)
        );
    }

    #[test]
    fn test_generate_fish_caps_pool() {
        let mut state = GameState::new(1, test_config(), SpriteBank::placeholder());
        state.config.plane_count = 2;
        state.config.fish_per_plane = 25;
        state.generate_fish();
        assert_eq!(state.active_count, consts::MAX_FISH);
        assert_eq!(state.fish[0].species, Species::Jelly);
    }

    proptest! {
        #[test]
        fn test_size_floor_holds(start in 1.0f32..100.0, delta in -200.0f32..200.0) {
            let mut fish = test_fish(Species::Bass, start);
            fish.set_size(start + delta, 2);
            prop_assert!(fish.size >= consts::MIN_FISH_SIZE);
        }

        #[test]
        fn test_depth_scale_monotonic(size in 1.0f32..100.0, plane in 0u32..2) {
            let mut fish = test_fish(Species::Bass, size);
            fish.plane = plane;
            fish.resize_sprite(2);
            let near_scale = size / 64.0;
            prop_assert!(fish.scale <= near_scale + f32::EPSILON);
        }
    }
}
