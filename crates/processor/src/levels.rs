//! Level thresholds

use common::models::{Level, LevelProgress};
use std::sync::OnceLock;

/// (level, name, min_points), ascending, level 1 at 0
const THRESHOLDS: &[(u32, &str, u64)] = &[
    (1, "Newcomer", 0),
    (2, "Apprentice", 100),
    (3, "Journeyman", 300),
    (4, "Artisan", 700),
    (5, "Master", 1500),
];

/// The level table, lowest first
pub fn all() -> &'static [Level] {
    static LEVELS: OnceLock<Vec<Level>> = OnceLock::new();
    LEVELS.get_or_init(|| {
        THRESHOLDS
            .iter()
            .enumerate()
            .map(|(i, &(level, name, min_points))| Level {
                level,
                name: name.to_string(),
                min_points,
                points_to_next_level: THRESHOLDS
                    .get(i + 1)
                    .map(|&(_, _, next)| next - min_points),
            })
            .collect()
    })
}

/// Highest level whose threshold is at or below `points`
pub fn calculate_level(points: u64) -> &'static Level {
    let levels = all();
    levels
        .iter()
        .rev()
        .find(|l| l.min_points <= points)
        .unwrap_or(&levels[0])
}

/// Current level plus distance to the next one
pub fn level_progress(points: u64) -> LevelProgress {
    let current = calculate_level(points);
    let next = all().iter().find(|l| l.min_points > points);
    LevelProgress {
        level: current.level,
        name: current.name.clone(),
        min_points: current.min_points,
        points,
        next_level_at: next.map(|l| l.min_points),
        points_to_next_level: next.map(|l| l.min_points - points),
    }
}
