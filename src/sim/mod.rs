//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit clock values only (the host passes now/elapsed in)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod grid;
pub mod particles;
pub mod spawn;
pub mod state;
pub mod tick;

pub use grid::{Cell, Direction};
pub use particles::Particle;
pub use spawn::{place_fruit, place_obstacles, top_up_fruit};
pub use state::{Fruit, GameState};
pub use tick::{step, update};
