//! Session score records
//!
//! Score and eaten counts for the current run, plus high-water marks that
//! survive restarts and trips back to the menu. Nothing here outlives the
//! process; cross-run persistence is a frontend concern.

use serde::{Deserialize, Serialize};

use crate::settings::Config;

/// Current-run score plus session high-water marks
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionRecords {
    /// Score for the current run
    pub score: f64,
    /// Fish eaten in the current run
    pub eaten: u32,
    /// Best score seen this session
    pub high_score: f64,
    /// Most fish eaten in a single run this session
    pub most_eaten: u32,
}

impl SessionRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one eaten fish of `target_size`.
    ///
    /// Harder settings pay more: a kill is worth
    /// `speed_modifier * target_size * 10 + fish_per_plane`.
    /// Returns the points awarded.
    pub fn add_kill(&mut self, target_size: f32, config: &Config) -> f64 {
        let points = f64::from(config.speed_modifier) * f64::from(target_size) * 10.0
            + f64::from(config.fish_per_plane);
        self.eaten += 1;
        self.score += points;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        if self.eaten > self.most_eaten {
            self.most_eaten = self.eaten;
        }
        points
    }

    /// Reset the current run, keeping the session high-water marks.
    pub fn start_run(&mut self) {
        self.score = 0.0;
        self.eaten = 0;
    }

    /// Whether the current run holds the session's best score.
    pub fn is_session_best(&self) -> bool {
        self.score > 0.0 && self.score >= self.high_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kill_scoring_weights_settings() {
        let config = Config {
            speed_modifier: 2.0,
            fish_per_plane: 20,
            ..Config::default()
        };
        let mut records = SessionRecords::new();

        let points = records.add_kill(7.0, &config);
        assert_eq!(points, 160.0); // 2 * 7 * 10 + 20
        assert_eq!(records.score, 160.0);
        assert_eq!(records.eaten, 1);
    }

    #[test]
    fn test_high_water_marks_survive_restart() {
        let config = Config::default();
        let mut records = SessionRecords::new();

        records.add_kill(5.0, &config);
        records.add_kill(6.0, &config);
        let best = records.score;
        assert_eq!(records.most_eaten, 2);

        records.start_run();
        assert_eq!(records.score, 0.0);
        assert_eq!(records.eaten, 0);
        assert_eq!(records.high_score, best);
        assert_eq!(records.most_eaten, 2);

        // A worse follow-up run never lowers the marks
        records.add_kill(5.0, &config);
        assert_eq!(records.high_score, best);
        assert_eq!(records.most_eaten, 2);
    }
}
