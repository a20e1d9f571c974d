//! Species behavior: frame-counted cooldown cycles and proximity reflexes
//!
//! Every AI archetype runs off the single `cooldown` timer on its actor.
//! A reflex arms the timer with the -1 sentinel; the next `cooldown_tick`
//! wraps it to the species' full cycle and the cycle plays out by hitting
//! its triggers on the way down to zero, where it parks until re-armed.

use crate::consts::TICKS_PER_SECOND;
use crate::settings::Config;

use super::state::{Fish, Species};

// Pufferfish: crawl while puffed, 1% size change per tick through the
// inflate and deflate windows, then a dash back to cruise speed.
const PUFFER_CYCLE: i32 = 20 * TICKS_PER_SECOND;
const PUFFER_INFLATE_ABOVE: i32 = PUFFER_CYCLE - 90;
const PUFFER_DASH_AT: i32 = 15 * TICKS_PER_SECOND;
const PUFFER_DEFLATE_UNTIL: i32 = PUFFER_DASH_AT + 90;
const PUFFER_CRAWL_FACTOR: f32 = 6.25;
const PUFFER_INFLATE_RATE: f32 = 1.01;

// Goldfish: freeze, hop to the other plane with a 3x cruise burst, settle.
const GOLDFISH_CYCLE: i32 = 5 * TICKS_PER_SECOND;
const GOLDFISH_HOP_AT: i32 = GOLDFISH_CYCLE - TICKS_PER_SECOND / 2;
const GOLDFISH_SETTLE_AT: i32 = 4 * TICKS_PER_SECOND;
const GOLDFISH_CRAWL_FACTOR: f32 = 10.0;
const GOLDFISH_BURST_FACTOR: f32 = 3.0;

// Shark: home in for a second, then break off at quarter speed reversed.
const SHARK_CYCLE: i32 = 10 * TICKS_PER_SECOND;
const SHARK_BREAK_AT: i32 = 9 * TICKS_PER_SECOND;
const SHARK_BREAK_DIVISOR: f32 = -4.0;
/// Ticks for a homing shark to close the distance to its target
const SHARK_HOMING_TICKS: f32 = 90.0;

// Bass: panic-doubled by the reflex, two axis reversals to shake pursuit
// (order decided by size parity), then decay back toward cruise.
const BASS_CYCLE: i32 = 10 * TICKS_PER_SECOND;
const BASS_FIRST_TURN_AT: i32 = 9 * TICKS_PER_SECOND;
const BASS_SECOND_TURN_AT: i32 = 8 * TICKS_PER_SECOND;
const BASS_CALM_AT: i32 = 7 * TICKS_PER_SECOND;

/// Advance one actor's behavior cycle by one tick.
///
/// Decrements first, then fires the species trigger for the value reached.
/// The -1 sentinel lands below zero and wraps to the full cycle; a natural
/// countdown reaches zero and goes inactive, so each alert plays out once.
pub fn cooldown_tick(fish: &mut Fish, config: &Config) {
    if fish.cooldown == 0 {
        return;
    }
    fish.cooldown -= 1;
    match fish.species {
        Species::Puffer => match fish.cooldown {
            c if c < 0 => {
                fish.cooldown = PUFFER_CYCLE;
                fish.vel /= PUFFER_CRAWL_FACTOR;
            }
            c if c > PUFFER_INFLATE_ABOVE => {
                fish.set_size(fish.size * PUFFER_INFLATE_RATE, config.plane_count);
            }
            c if c > PUFFER_DASH_AT && c <= PUFFER_DEFLATE_UNTIL => {
                fish.set_size(fish.size / PUFFER_INFLATE_RATE, config.plane_count);
            }
            PUFFER_DASH_AT => fish.vel *= PUFFER_CRAWL_FACTOR,
            _ => {}
        },
        Species::Goldfish => match fish.cooldown {
            c if c < 0 => {
                fish.cooldown = GOLDFISH_CYCLE;
                fish.vel /= GOLDFISH_CRAWL_FACTOR;
            }
            GOLDFISH_HOP_AT => {
                fish.switch_plane(config.plane_count);
                fish.vel *= GOLDFISH_BURST_FACTOR * GOLDFISH_CRAWL_FACTOR;
            }
            GOLDFISH_SETTLE_AT => fish.vel /= GOLDFISH_BURST_FACTOR,
            _ => {}
        },
        Species::Shark => match fish.cooldown {
            c if c < 0 => fish.cooldown = SHARK_CYCLE,
            SHARK_BREAK_AT => {
                fish.vel /= SHARK_BREAK_DIVISOR;
                fish.facing_left = fish.vel.x < 0.0;
                fish.graph_updated = true;
            }
            _ => {}
        },
        Species::Bass => {
            let x_first = fish.size % 2.0 == 0.0;
            match fish.cooldown {
                c if c < 0 => fish.cooldown = BASS_CYCLE,
                BASS_FIRST_TURN_AT => {
                    if x_first {
                        fish.vel.x = -fish.vel.x;
                    } else {
                        fish.vel.y = -fish.vel.y;
                    }
                    fish.facing_left = fish.vel.x < 0.0;
                    fish.graph_updated = true;
                }
                BASS_SECOND_TURN_AT => {
                    if x_first {
                        fish.vel.y = -fish.vel.y;
                    } else {
                        fish.vel.x = -fish.vel.x;
                    }
                    fish.facing_left = fish.vel.x < 0.0;
                    fish.graph_updated = true;
                }
                BASS_CALM_AT => fish.vel /= 2.0,
                _ => {}
            }
        }
        Species::Player | Species::Jelly => {}
    }
}

/// Reflex check for one AI fish against the approaching player, run before
/// contact resolution. A fish that is dead, already mid-cycle, on another
/// plane, or out of sensing range pays no attention.
pub fn proximity_alert(fish: &mut Fish, attacker: &Fish) {
    let distance = fish.pos.distance(attacker.pos);
    if fish.dead
        || fish.cooldown != 0
        || fish.plane != attacker.plane
        || distance > 4.0 * (fish.half_extent.x + attacker.half_extent.x)
    {
        return;
    }
    match fish.species {
        // Anything at least half the puffer's size looks like a threat
        Species::Puffer if fish.size < 2.0 * attacker.size => {
            fish.cooldown = -1;
        }
        Species::Goldfish if fish.size <= attacker.size => {
            fish.cooldown = -1;
        }
        // Bolt straight away at double speed
        Species::Bass if fish.size <= attacker.size => {
            fish.vel.x = (2.0 * fish.vel.x).copysign(fish.pos.x - attacker.pos.x);
            fish.vel.y = (2.0 * fish.vel.y).copysign(fish.pos.y - attacker.pos.y);
            fish.facing_left = fish.vel.x < 0.0;
            fish.graph_updated = true;
            fish.cooldown = -1;
        }
        // A meal between half and one-and-a-half shark sizes draws a charge
        Species::Shark
            if attacker.size > fish.size / 2.0 && attacker.size < fish.size * 1.5 =>
        {
            fish.cooldown = -1;
            fish.vel = (attacker.pos - fish.pos) / SHARK_HOMING_TICKS;
            fish.facing_left = fish.vel.x < 0.0;
            fish.graph_updated = true;
        }
        _ => {}
    }
}
