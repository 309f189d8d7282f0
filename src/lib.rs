//! Snake Rush - a grid snake game with combo scoring
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, scoring, game state)
//! - `tuning`: Data-driven game balance (fruit catalog, level table)
//! - `renderer`: Canvas-2D rendering (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Config;

/// Game configuration constants
pub mod consts {
    /// Side length of one grid cell in pixels
    pub const CELL_PX: u32 = 20;
    /// Default canvas side length in pixels (square)
    pub const CANVAS_PX: u32 = 600;

    /// Random-placement retry bound per spawned item
    pub const MAX_PLACE_ATTEMPTS: u32 = 100;
    /// Half-width of the obstacle-free zone around the grid center (Chebyshev)
    pub const CENTER_CLEAR_RADIUS: f32 = 3.0;

    /// Tick-interval reduction while the speed boost is active (ms)
    pub const SPEED_BOOST_MS: f64 = 40.0;
    /// Floor for the movement tick interval (ms)
    pub const MIN_INTERVAL_MS: f64 = 50.0;

    /// Lifetime divisor used to derive particle alpha
    pub const PARTICLE_ALPHA_SCALE: f32 = 50.0;
}

/// Convert a grid coordinate to the pixel center of its cell
#[inline]
pub fn cell_center_px(coord: i32, cell_px: u32) -> f32 {
    coord as f32 * cell_px as f32 + cell_px as f32 / 2.0
}
