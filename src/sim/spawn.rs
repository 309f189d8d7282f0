//! Rejection-sampling placement of obstacles and fruit
//!
//! Each item gets a bounded number of uniform cell draws; running out of
//! attempts skips that item with a diagnostic, never an error. Boards stay
//! playable with fewer items than the level asked for.

use rand::Rng;
use rand_pcg::Pcg32;

use super::grid::Cell;
use super::state::{Fruit, GameState};

fn random_cell(rng: &mut Pcg32, n: i32) -> Cell {
    Cell::new(rng.random_range(0..n), rng.random_range(0..n))
}

/// Obstacles must avoid the snake, each other, and the protected center zone
/// so the spawn area never gets walled in.
fn valid_obstacle_cell(state: &GameState, cell: Cell) -> bool {
    let center = state.config.grid_size() as f32 / 2.0;
    let clear = state.config.center_clear_radius;
    if (cell.x as f32 - center).abs() < clear && (cell.y as f32 - center).abs() < clear {
        return false;
    }
    !state.snake.contains(&cell) && !state.obstacles.contains(&cell)
}

/// Fruit must land on a completely free cell.
fn valid_fruit_cell(state: &GameState, cell: Cell) -> bool {
    !state.is_occupied(cell)
}

/// Place up to `count` obstacles. Called for a fresh board and on every
/// level-up after the old set is cleared.
pub fn place_obstacles(state: &mut GameState, count: usize) {
    let n = state.config.grid_size();
    let attempts = state.config.max_place_attempts;

    for _ in 0..count {
        let mut placed = false;
        for _ in 0..attempts {
            let cell = random_cell(&mut state.rng, n);
            if valid_obstacle_cell(state, cell) {
                state.obstacles.push(cell);
                placed = true;
                break;
            }
        }
        if !placed {
            log::warn!("no valid obstacle cell found after {attempts} attempts, skipping");
        }
    }
}

/// Place up to `count` fruit, each with a kind drawn uniformly from the
/// catalog.
pub fn place_fruit(state: &mut GameState, count: usize) {
    let n = state.config.grid_size();
    let attempts = state.config.max_place_attempts;
    let kinds = state.config.fruits.len();

    for _ in 0..count {
        let mut placed = false;
        for _ in 0..attempts {
            let cell = random_cell(&mut state.rng, n);
            if valid_fruit_cell(state, cell) {
                let kind = state.rng.random_range(0..kinds);
                state.fruits.push(Fruit { cell, kind });
                placed = true;
                break;
            }
        }
        if !placed {
            log::warn!("no valid fruit cell found after {attempts} attempts, skipping");
        }
    }
}

/// Top the board up to the current level's fruit target.
pub fn top_up_fruit(state: &mut GameState) {
    let target = state.level_config().fruit_target;
    let needed = target.saturating_sub(state.fruits.len());
    if needed > 0 {
        place_fruit(state, needed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Config;
    use proptest::prelude::*;

    fn assert_board_valid(state: &GameState) {
        let n = state.config.grid_size();
        for (i, obs) in state.obstacles.iter().enumerate() {
            assert!(obs.in_bounds(n));
            assert!(!state.snake.contains(obs));
            assert!(!state.obstacles[i + 1..].contains(obs), "duplicate obstacle");
        }
        for (i, fruit) in state.fruits.iter().enumerate() {
            assert!(fruit.cell.in_bounds(n));
            assert!(!state.snake.contains(&fruit.cell));
            assert!(!state.obstacles.contains(&fruit.cell));
            assert!(
                !state.fruits[i + 1..].iter().any(|f| f.cell == fruit.cell),
                "overlapping fruit"
            );
        }
    }

    #[test]
    fn obstacles_avoid_center_zone() {
        let state = GameState::new(3, Config::default());
        let center = state.config.grid_size() as f32 / 2.0;
        for obs in &state.obstacles {
            let dx = (obs.x as f32 - center).abs();
            let dy = (obs.y as f32 - center).abs();
            assert!(dx >= 3.0 || dy >= 3.0, "obstacle {obs:?} inside center zone");
        }
    }

    #[test]
    fn top_up_never_overshoots_target() {
        let mut state = GameState::new(11, Config::default());
        let target = state.level_config().fruit_target;
        assert_eq!(state.fruits.len(), target);

        // Already at target, another top-up is a no-op
        top_up_fruit(&mut state);
        assert_eq!(state.fruits.len(), target);

        state.fruits.pop();
        top_up_fruit(&mut state);
        assert_eq!(state.fruits.len(), target);
    }

    #[test]
    fn exhaustion_skips_without_panicking() {
        // 5x5 grid: 25 cells, 3 held by the snake. Asking for far more
        // obstacles than fit must not error and must not overlap anything.
        let config = Config {
            canvas_px: 100,
            center_clear_radius: 0.0,
            ..Config::default()
        };
        let mut state = GameState::new(5, config);
        state.obstacles.clear();
        state.fruits.clear();

        place_obstacles(&mut state, 50);
        assert!(state.obstacles.len() <= 22);
        assert_board_valid(&state);

        place_fruit(&mut state, 50);
        assert_board_valid(&state);
    }

    proptest! {
        #[test]
        fn placement_invariants_hold_for_any_seed(seed in any::<u64>()) {
            let mut state = GameState::new(seed, Config::default());
            assert_board_valid(&state);

            // Churn the board the way level-ups do
            state.obstacles.clear();
            place_obstacles(&mut state, 12);
            state.fruits.clear();
            top_up_fruit(&mut state);
            assert_board_valid(&state);
        }
    }
}
