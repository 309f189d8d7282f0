//! Cosmetic particle bursts
//!
//! Purely visual; nothing here feeds back into gameplay. Particle order is
//! not significant, so expired ones are swap-removed.

use glam::Vec2;
use rand::Rng;

use super::grid::Cell;
use super::state::GameState;
use crate::cell_center_px;

/// A short-lived visual particle in screen pixels
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    pub radius: f32,
    /// CSS color inherited from whatever spawned the burst
    pub color: String,
    /// Remaining frames; renderer maps this to alpha
    pub life: f32,
}

/// Spawn `count` particles bursting out of a grid cell.
pub fn spawn_burst(state: &mut GameState, cell: Cell, color: &str, count: usize) {
    let cx = cell_center_px(cell.x, state.config.cell_px);
    let cy = cell_center_px(cell.y, state.config.cell_px);

    for _ in 0..count {
        let vel = Vec2::new(
            (state.rng.random_range(0.0..1.0f32) - 0.5) * 6.0,
            (state.rng.random_range(0.0..1.0f32) - 0.5) * 6.0,
        );
        state.particles.push(Particle {
            pos: Vec2::new(cx, cy),
            vel,
            radius: state.rng.random_range(2.0..6.0f32),
            color: color.to_string(),
            life: state.rng.random_range(20.0..50.0f32),
        });
    }
}

/// Integrate positions and retire expired particles. Called once per frame.
pub fn advance(state: &mut GameState) {
    let mut i = 0;
    while i < state.particles.len() {
        let p = &mut state.particles[i];
        p.pos += p.vel;
        p.life -= 1.0;
        if p.life <= 0.0 {
            state.particles.swap_remove(i);
        } else {
            i += 1;
        }
    }
}
