//! Score accrual and difficulty scaling

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Frame delta usable by the simulation: non-finite or negative becomes 0
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() { dt.max(0.0) } else { 0.0 }
}

/// Score, difficulty level and the obstacle speed it drives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub score: u64,
    /// Milestones crossed so far
    pub difficulty_level: u32,
    /// Obstacle forward speed (units per frame)
    pub obstacle_speed: f32,
    /// Play time not yet converted into points (seconds)
    accrual: f32,
}

impl ScoreBoard {
    pub fn new(base_speed: f32) -> Self {
        Self {
            score: 0,
            difficulty_level: 0,
            obstacle_speed: base_speed,
            accrual: 0.0,
        }
    }

    /// Add points, stepping difficulty once per milestone multiple crossed
    ///
    /// Returns how many milestones this award crossed. Since score only grows,
    /// each multiple triggers exactly once.
    pub fn award(&mut self, points: u64, tuning: &Tuning) -> u32 {
        if points == 0 {
            return 0;
        }
        let before = self.score / tuning.difficulty_milestone;
        self.score = self.score.saturating_add(points);
        let after = self.score / tuning.difficulty_milestone;

        let crossed = (after - before) as u32;
        if crossed > 0 {
            self.difficulty_level += crossed;
            self.obstacle_speed += tuning.speed_increment * crossed as f32;
            log::info!(
                "Difficulty {} at score {} (obstacle speed {:.2})",
                self.difficulty_level,
                self.score,
                self.obstacle_speed
            );
        }
        crossed
    }

    /// Confirmed projectile hits
    pub fn award_hits(&mut self, hits: u32, tuning: &Tuning) -> u32 {
        self.award(hits as u64 * tuning.hit_score, tuning)
    }

    /// Accumulate play time; one time bonus per whole second
    ///
    /// Negative or non-finite deltas count as no time.
    pub fn accrue(&mut self, dt: f32, tuning: &Tuning) -> u32 {
        self.accrual += sanitize_dt(dt);
        let whole = self.accrual.floor();
        if whole < 1.0 {
            return 0;
        }
        self.accrual -= whole;
        let points = (whole as u64).saturating_mul(tuning.points_per_second);
        self.award(points, tuning)
    }
}
