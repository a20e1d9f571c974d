//! Menu models: row layout, hover bands, choice cycling
//!
//! Pure data plus cursor mechanics; a frontend renders the labels itself.
//! Rows carry their vertical hover band in screen space so pointer hover
//! works the same under any renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Config;

/// Main menu rows
pub const MAIN_PLAY: usize = 0;
pub const MAIN_OPTIONS: usize = 1;
pub const MAIN_QUIT: usize = 2;

/// Options menu rows, in display order
pub const OPT_PLANES: usize = 0;
pub const OPT_AMOUNT: usize = 1;
pub const OPT_SPEED: usize = 2;
pub const OPT_SIZE_CAP: usize = 3;
pub const OPT_REACTIONS: usize = 4;
pub const OPT_BACK: usize = 5;

/// One selectable label=value pair on an options row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub value: f32,
}

/// A menu row: a plain action, or a row of choices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    /// Top of the hover band in screen space
    pub y: f32,
    pub height: f32,
    /// Empty for action rows
    pub choices: Vec<Choice>,
    pub selected: usize,
}

impl MenuItem {
    fn action(label: &str, y: f32, height: f32) -> Self {
        Self {
            label: label.to_string(),
            y,
            height,
            choices: Vec::new(),
            selected: 0,
        }
    }

    fn choice_row(
        label: &str,
        y: f32,
        height: f32,
        selected: usize,
        choices: &[(&str, f32)],
    ) -> Self {
        Self {
            label: label.to_string(),
            y,
            height,
            choices: choices
                .iter()
                .map(|(label, value)| Choice {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
            selected,
        }
    }

    /// Vertical hover band test; the band spans the whole screen width
    pub fn hovered(&self, pointer: Vec2) -> bool {
        pointer.y >= self.y && pointer.y < self.y + self.height
    }

    /// Value of the selected choice; action rows report zero
    pub fn value(&self) -> f32 {
        self.choices.get(self.selected).map_or(0.0, |c| c.value)
    }

    /// Label of the selected choice, for frontend row text
    pub fn value_label(&self) -> Option<&str> {
        self.choices.get(self.selected).map(|c| c.label.as_str())
    }

    /// Advance rightward with wraparound
    pub fn cycle_right(&mut self) {
        if !self.choices.is_empty() {
            self.selected = (self.selected + 1) % self.choices.len();
        }
    }

    /// Step rightward, clamped; `true` if the selection changed
    pub fn shift_right(&mut self) -> bool {
        let next = (self.selected + 1).min(self.choices.len().saturating_sub(1));
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    /// Step leftward, clamped; `true` if the selection changed
    pub fn shift_left(&mut self) -> bool {
        let next = self.selected.saturating_sub(1);
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }
}

/// Row list plus cursor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub items: Vec<MenuItem>,
    pub cursor: usize,
}

impl Menu {
    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1).min(self.items.len().saturating_sub(1));
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Snap the cursor to the hovered row, if any
    pub fn hover(&mut self, pointer: Vec2) {
        for (row, item) in self.items.iter().enumerate() {
            if item.hovered(pointer) {
                self.cursor = row;
            }
        }
    }

    pub fn selected_item(&mut self) -> &mut MenuItem {
        &mut self.items[self.cursor]
    }
}

/// Footer arrow hit region that toggles menu visibility
pub fn hide_toggle_region(config: &Config, pointer: Vec2) -> bool {
    pointer.y >= 0.9 * config.screen_height && pointer.x < 0.03 * config.screen_width
}

/// Main menu: Play / Options / Quit
pub fn main_menu(config: &Config) -> Menu {
    let h = 0.2 * config.screen_height;
    let mut y = 0.35 * config.screen_height;
    let mut items = Vec::new();
    for label in ["PLAY", "Options", "Quit"] {
        items.push(MenuItem::action(label, y, h));
        y += h;
    }
    Menu { items, cursor: 0 }
}

/// Options menu, with each row's selection matching the given config
pub fn options_menu(config: &Config) -> Menu {
    let h = 0.12 * config.screen_height;
    let row = |n: usize| 0.075 * config.screen_height + n as f32 * h;
    let pick = |choices: &[(&str, f32)], value: f32| {
        choices
            .iter()
            .position(|(_, v)| *v == value)
            .unwrap_or(0)
    };

    let planes = [("1", 1.0), ("2", 2.0)];
    let amounts = [
        ("scarce", 5.0),
        ("less", 10.0),
        ("normal", 15.0),
        ("more", 20.0),
        ("swarm", 25.0),
    ];
    let speeds = [("slow", 0.5), ("normal", 1.0), ("fast", 1.5), ("frenzy", 2.0)];
    let size_caps = [("big", 45.0), ("bigger", 60.0), ("biggest", 75.0)];
    let reactions = [("off", 0.0), ("on", 1.0)];

    let items = vec![
        MenuItem::choice_row(
            "Game planes",
            row(0),
            h,
            pick(&planes, config.plane_count as f32),
            &planes,
        ),
        MenuItem::choice_row(
            "Fish amount",
            row(1),
            h,
            pick(&amounts, config.fish_per_plane as f32),
            &amounts,
        ),
        MenuItem::choice_row(
            "Fish speed",
            row(2),
            h,
            pick(&speeds, config.speed_modifier),
            &speeds,
        ),
        MenuItem::choice_row(
            "Fish max size",
            row(3),
            h,
            pick(&size_caps, config.size_cap),
            &size_caps,
        ),
        MenuItem::choice_row(
            "Fish reactions",
            row(4),
            h,
            if config.reactions_enabled { 1 } else { 0 },
            &reactions,
        ),
        MenuItem::action("Back", row(5), h),
    ];
    Menu {
        items,
        cursor: OPT_BACK,
    }
}
