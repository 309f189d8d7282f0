//! Game state and core simulation types
//!
//! All state lives in one owned `GameState` value passed explicitly to every
//! operation; there is no ambient/global state in the engine.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::grid::{Cell, Direction};
use super::particles::Particle;
use super::spawn;
use crate::tuning::Config;

/// A fruit on the board; `kind` indexes into the config's fruit catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fruit {
    pub cell: Cell,
    pub kind: usize,
}

/// Complete game state (deterministic given seed + config + inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Static configuration (grid, fruit catalog, level table)
    pub config: Config,
    /// Snake cells, head first
    pub snake: VecDeque<Cell>,
    /// Fruit currently on the board
    pub fruits: Vec<Fruit>,
    /// Static obstacle cells, regenerated on level-up
    pub obstacles: Vec<Cell>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub score: u32,
    /// Current level index into the config's level table
    pub level: usize,
    /// Consecutive fruit eaten since the last multiplier bump or miss
    pub combo: u32,
    /// Score multiplier, 1..=5
    pub multiplier: u32,
    /// Committed movement direction; None until the first step
    pub direction: Option<Direction>,
    /// Direction queued by the input adapter, consumed on the next step
    pub pending_direction: Option<Direction>,
    /// Whether the run is live (cleared on game over)
    pub running: bool,
    /// Movement interval for the current level, before boost (ms)
    pub base_interval_ms: f64,
    /// Effective movement interval (ms)
    pub interval_ms: f64,
    /// Frame-time accumulator gating movement steps (ms)
    pub accumulated_ms: f64,
    /// Speed boost expiry timestamp (ms), None when inactive
    pub power_up_until: Option<f64>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh state: snake centered, level-0 obstacles and fruit
    /// placed, not yet running.
    pub fn new(seed: u64, config: Config) -> Self {
        let n = config.grid_size();
        let (cx, cy) = (n / 2, n / 2);
        let snake = VecDeque::from([
            Cell::new(cx, cy),
            Cell::new(cx, cy + 1),
            Cell::new(cx, cy + 2),
        ]);

        let base_interval_ms = config.levels[0].tick_interval_ms;
        let mut state = Self {
            seed,
            config,
            snake,
            fruits: Vec::new(),
            obstacles: Vec::new(),
            particles: Vec::new(),
            score: 0,
            level: 0,
            combo: 0,
            multiplier: 1,
            direction: None,
            // Heading right by default once the run starts
            pending_direction: Some(Direction::Right),
            running: false,
            base_interval_ms,
            interval_ms: base_interval_ms,
            accumulated_ms: 0.0,
            power_up_until: None,
            rng: Pcg32::seed_from_u64(seed),
        };

        let obstacle_count = state.config.levels[0].obstacle_count;
        spawn::place_obstacles(&mut state, obstacle_count);
        spawn::top_up_fruit(&mut state);

        state
    }

    /// Arm the run; directions queued before this call keep their default.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.accumulated_ms = 0.0;
        log::info!("run started (seed {})", self.seed);
    }

    /// Queue a direction change from the input adapter. Ignored while not
    /// running; reversal filtering happens at step time.
    pub fn queue_direction(&mut self, dir: Direction) {
        if self.running {
            self.pending_direction = Some(dir);
        }
    }

    /// Level settings currently in effect
    pub fn level_config(&self) -> &crate::tuning::LevelConfig {
        &self.config.levels[self.level]
    }

    /// Whether the speed boost is active at time `now_ms`
    pub fn power_up_active(&self, now_ms: f64) -> bool {
        self.power_up_until.is_some_and(|until| now_ms <= until)
    }

    /// Remaining boost time in ms (zero when inactive)
    pub fn power_up_remaining_ms(&self, now_ms: f64) -> f64 {
        self.power_up_until
            .map(|until| (until - now_ms).max(0.0))
            .unwrap_or(0.0)
    }

    /// Whether any fruit, obstacle, or snake segment occupies `cell`
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
            || self.obstacles.contains(&cell)
            || self.fruits.iter().any(|f| f.cell == cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_spawns_centered_snake() {
        let config = Config::default();
        let n = config.grid_size();
        let state = GameState::new(7, config);

        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake[0], Cell::new(n / 2, n / 2));
        assert_eq!(state.snake[1], Cell::new(n / 2, n / 2 + 1));
        assert!(!state.running);
        assert_eq!(state.multiplier, 1);
        assert_eq!(state.pending_direction, Some(Direction::Right));
    }

    #[test]
    fn new_state_populates_level_zero_board() {
        let state = GameState::new(7, Config::default());
        assert_eq!(state.fruits.len(), state.config.levels[0].fruit_target);
        assert_eq!(state.obstacles.len(), state.config.levels[0].obstacle_count);
    }

    #[test]
    fn queue_direction_ignored_until_started() {
        let mut state = GameState::new(7, Config::default());
        state.queue_direction(Direction::Up);
        assert_eq!(state.pending_direction, Some(Direction::Right));

        state.start();
        state.queue_direction(Direction::Up);
        assert_eq!(state.pending_direction, Some(Direction::Up));
    }

    #[test]
    fn same_seed_same_board() {
        let a = GameState::new(42, Config::default());
        let b = GameState::new(42, Config::default());
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.fruits, b.fruits);
    }
}
