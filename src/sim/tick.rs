//! Frame update and movement step
//!
//! The host loop calls [`update`] once per rendering frame with explicit
//! clock values; movement is gated by an accumulated-time threshold so the
//! simulation speed is decoupled from the frame rate. No wall-clock reads
//! happen inside the engine.

use super::grid::Cell;
use super::particles;
use super::spawn;
use super::state::{Fruit, GameState};

/// Per-frame update hook.
///
/// Particles and power-up expiry are serviced every frame; a movement step
/// runs only when the accumulated elapsed time reaches the current interval.
pub fn update(state: &mut GameState, now_ms: f64, elapsed_ms: f64) {
    particles::advance(state);

    if let Some(until) = state.power_up_until {
        if now_ms > until {
            state.power_up_until = None;
            state.interval_ms = state.base_interval_ms;
            log::info!("speed boost ended");
        }
    }

    if !state.running {
        return;
    }

    state.accumulated_ms += elapsed_ms;
    if state.accumulated_ms >= state.interval_ms {
        step(state, now_ms);
        state.accumulated_ms = 0.0;
    }
}

/// Advance the snake by one cell: commit the queued direction, resolve
/// collisions, consume fruit, and shift the body.
pub fn step(state: &mut GameState, now_ms: f64) {
    if let Some(next) = state.pending_direction.take() {
        match state.direction {
            // Instant reversal is ignored; keep the prior heading
            Some(current) if next == current.opposite() => {}
            _ => state.direction = Some(next),
        }
    }
    let Some(dir) = state.direction else {
        return;
    };

    let head = state.snake[0].step(dir);

    if hits_something(state, head) {
        game_over(state);
        return;
    }

    let eaten = state.fruits.iter().position(|f| f.cell == head);
    if eaten.is_none() {
        state.combo = 0;
        if state.multiplier > 1 {
            log::debug!("combo broken, multiplier reset");
            state.multiplier = 1;
        }
    }

    state.snake.push_front(head);
    if eaten.is_none() {
        state.snake.pop_back();
    }

    if let Some(index) = eaten {
        let fruit = state.fruits.swap_remove(index);
        consume(state, fruit, now_ms);
        spawn::top_up_fruit(state);
    }
}

/// Collision check, in order: wall, obstacle, snake body (head excluded).
fn hits_something(state: &GameState, head: Cell) -> bool {
    if !head.in_bounds(state.config.grid_size()) {
        log::debug!("wall collision at {head:?}");
        return true;
    }
    if state.obstacles.contains(&head) {
        log::debug!("obstacle collision at {head:?}");
        return true;
    }
    if state.snake.iter().skip(1).any(|&c| c == head) {
        log::debug!("self collision at {head:?}");
        return true;
    }
    false
}

/// Apply the effects of an eaten fruit: either a timed speed boost or
/// combo/multiplier scoring followed by level-up evaluation.
fn consume(state: &mut GameState, fruit: Fruit, now_ms: f64) {
    let kind = state.config.fruits[fruit.kind].clone();
    log::debug!("ate {}", kind.name);

    if kind.power_up {
        state.power_up_until = Some(now_ms + kind.duration_ms);
        state.interval_ms =
            (state.base_interval_ms - state.config.speed_boost_ms).max(state.config.min_interval_ms);
        particles::spawn_burst(state, fruit.cell, &kind.color, 15);
        return;
    }

    state.combo += 1;
    if state.combo >= 3 {
        state.multiplier = (state.multiplier + 1).min(5);
        state.combo = 0;
        log::info!("multiplier increased to x{}", state.multiplier);
    }
    state.score += kind.points * state.multiplier;
    particles::spawn_burst(state, fruit.cell, &kind.color, 10);

    check_level_up(state, now_ms);
}

/// Cascade through every level threshold the current score clears. Each
/// advance rebuilds obstacles and fruit and recomputes the tick interval.
fn check_level_up(state: &mut GameState, now_ms: f64) {
    while state.level + 1 < state.config.levels.len()
        && state.score >= state.config.levels[state.level + 1].min_score
    {
        state.level += 1;
        state.base_interval_ms = state.config.levels[state.level].tick_interval_ms;
        state.interval_ms = if state.power_up_active(now_ms) {
            (state.base_interval_ms - state.config.speed_boost_ms).max(state.config.min_interval_ms)
        } else {
            state.base_interval_ms
        };
        log::info!("level up -> {}", state.level + 1);

        let obstacle_count = state.level_config().obstacle_count;
        state.obstacles.clear();
        spawn::place_obstacles(state, obstacle_count);

        let fruit_target = state.level_config().fruit_target;
        state.fruits.clear();
        spawn::place_fruit(state, fruit_target);

        let n = state.config.grid_size();
        particles::spawn_burst(state, Cell::new(n / 2, n / 2), "#FFFFFF", 20);
    }
}

fn game_over(state: &mut GameState) {
    state.running = false;
    log::info!(
        "game over: score {} at level {}",
        state.score,
        state.level + 1
    );
}
