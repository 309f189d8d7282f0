//! Data-driven game balance
//!
//! The fruit catalog and the level table are plain serde structs so balance
//! passes never touch simulation code.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One entry in the fruit catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FruitKind {
    pub name: String,
    /// CSS color used by the renderer
    pub color: String,
    pub points: u32,
    /// Power-up fruits grant a timed speed boost instead of points
    pub power_up: bool,
    /// Boost duration in ms (power-up kinds only)
    pub duration_ms: f64,
}

impl FruitKind {
    fn scoring(name: &str, color: &str, points: u32) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            points,
            power_up: false,
            duration_ms: 0.0,
        }
    }

    fn power_up(name: &str, color: &str, duration_ms: f64) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            points: 0,
            power_up: true,
            duration_ms,
        }
    }
}

/// Per-level difficulty settings, ordered by `min_score`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Score threshold at which this level begins
    pub min_score: u32,
    /// Movement tick interval in ms (lower = faster)
    pub tick_interval_ms: f64,
    /// Number of fruit kept on the board
    pub fruit_target: usize,
    /// Number of obstacles generated for the level
    pub obstacle_count: usize,
}

/// Static configuration consumed by the simulation core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Grid cell size in pixels
    pub cell_px: u32,
    /// Square canvas side length in pixels
    pub canvas_px: u32,
    /// Fruit catalog; spawned kinds are drawn uniformly from this list
    pub fruits: Vec<FruitKind>,
    /// Level table, ascending by `min_score`, first entry at 0
    pub levels: Vec<LevelConfig>,
    /// Retry bound for rejection-sampled placement
    pub max_place_attempts: u32,
    /// Chebyshev half-width of the obstacle-free center zone
    pub center_clear_radius: f32,
    /// Interval reduction while the speed boost is active (ms)
    pub speed_boost_ms: f64,
    /// Interval floor (ms)
    pub min_interval_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_px: CELL_PX,
            canvas_px: CANVAS_PX,
            fruits: vec![
                FruitKind::scoring("Apple", "#FF4444", 1),
                FruitKind::scoring("Orange", "#FFA500", 2),
                FruitKind::scoring("Banana", "#FFFF00", 3),
                FruitKind::power_up("Speed Boost", "#00FF00", 5000.0),
                FruitKind::scoring("Special Fruit", "#FF00FF", 5),
            ],
            levels: vec![
                LevelConfig { min_score: 0, tick_interval_ms: 150.0, fruit_target: 3, obstacle_count: 3 },
                LevelConfig { min_score: 10, tick_interval_ms: 130.0, fruit_target: 4, obstacle_count: 5 },
                LevelConfig { min_score: 25, tick_interval_ms: 110.0, fruit_target: 5, obstacle_count: 7 },
                LevelConfig { min_score: 50, tick_interval_ms: 90.0, fruit_target: 6, obstacle_count: 10 },
                LevelConfig { min_score: 100, tick_interval_ms: 70.0, fruit_target: 7, obstacle_count: 12 },
            ],
            max_place_attempts: MAX_PLACE_ATTEMPTS,
            center_clear_radius: CENTER_CLEAR_RADIUS,
            speed_boost_ms: SPEED_BOOST_MS,
            min_interval_ms: MIN_INTERVAL_MS,
        }
    }
}

impl Config {
    /// Grid side length in cells
    pub fn grid_size(&self) -> i32 {
        (self.canvas_px / self.cell_px) as i32
    }

    /// Config sized for an available canvas width (capped at the default size)
    pub fn for_canvas(available_px: u32) -> Self {
        Self {
            canvas_px: available_px.min(CANVAS_PX),
            ..Self::default()
        }
    }
}
