//! Snake Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use snake_rush::renderer::Renderer;
    use snake_rush::sim::{Direction, GameState, update};
    use snake_rush::tuning::Config;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Renderer,
        last_time: f64,
        /// Whether the current state was ever started (distinguishes a fresh
        /// board from a finished run)
        started: bool,
    }

    impl Game {
        fn new(seed: u64, config: Config, renderer: Renderer) -> Self {
            Self {
                state: GameState::new(seed, config),
                renderer,
                last_time: 0.0,
                started: false,
            }
        }

        fn start(&mut self) {
            // Starting a finished run means starting over
            if self.started && !self.state.running {
                self.reset();
            }
            self.state.start();
            self.started = true;
        }

        /// Build a fresh state; the single persistent rAF loop just picks it
        /// up on the next frame, so no stale callback can touch it.
        fn reset(&mut self) {
            let seed = js_sys::Date::now() as u64;
            let config = self.state.config.clone();
            self.state = GameState::new(seed, config);
            self.started = false;
            log::info!("game reset (seed {seed})");
        }

        fn frame(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                0.0
            };
            self.last_time = time;

            update(&mut self.state, time, elapsed);
            self.renderer.draw(&self.state, time);
            self.update_hud();
        }

        /// Mirror score/level/multiplier into the DOM scoreboard
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("level") {
                el.set_text_content(Some(&(self.state.level + 1).to_string()));
            }
            if let Some(el) = document.get_element_by_id("multiplier") {
                el.set_text_content(Some(&format!("x{}", self.state.multiplier)));
            }

            if let Some(el) = document.get_element_by_id("gameOver") {
                if self.started && !self.state.running {
                    let _ = el.set_attribute("style", "display: block");
                    if let Some(score_el) = document.get_element_by_id("finalScore") {
                        score_el.set_text_content(Some(&self.state.score.to_string()));
                    }
                    if let Some(level_el) = document.get_element_by_id("finalLevel") {
                        level_el.set_text_content(Some(&(self.state.level + 1).to_string()));
                    }
                } else {
                    let _ = el.set_attribute("style", "display: none");
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Snake Rush starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Square canvas sized to the viewport, capped at the default
        let inner_w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(640.0) as u32;
        let config = Config::for_canvas(inner_w.saturating_sub(40));
        // Snap to a whole number of cells
        let canvas_px = config.grid_size() as u32 * config.cell_px;
        canvas.set_width(canvas_px);
        canvas.set_height(canvas_px);

        let renderer =
            Renderer::new(&canvas, canvas_px, config.cell_px).expect("renderer init failed");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, config, renderer)));
        log::info!("game initialized with seed: {seed}");

        setup_keyboard(game.clone());
        setup_touch_controls(game.clone());
        setup_buttons(game.clone());

        request_animation_frame(game);

        log::info!("Snake Rush running!");
    }

    fn key_to_direction(key: &str) -> Option<Direction> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut g = game.borrow_mut();
            let key = event.key();
            if let Some(dir) = key_to_direction(&key) {
                // queue_direction drops input while not running
                g.state.queue_direction(dir);
            } else if key == " " || key == "Enter" {
                g.start();
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Mobile control pad: four buttons classed up/down/left/right
    fn setup_touch_controls(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Ok(buttons) = document.query_selector_all(".mobile-controls button") else {
            return;
        };

        for i in 0..buttons.length() {
            let Some(node) = buttons.item(i) else {
                continue;
            };
            let Ok(button) = node.dyn_into::<web_sys::Element>() else {
                continue;
            };

            let dir = if button.class_list().contains("up") {
                Direction::Up
            } else if button.class_list().contains("down") {
                Direction::Down
            } else if button.class_list().contains("left") {
                Direction::Left
            } else {
                Direction::Right
            };

            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                game.borrow_mut().state.queue_direction(dir);
            });
            let _ =
                button.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("startBtn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().start();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("resetBtn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().reset();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("playAgainBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                g.reset();
                g.start();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Snake Rush (native) starting...");
    log::info!("Native mode has no windowing layer - run with `trunk serve` for the web version");

    // Smoke-check the engine outside the browser
    let config = snake_rush::Config::default();
    let mut state = snake_rush::sim::GameState::new(42, config);
    state.start();
    let mut now = 0.0;
    while state.running && now < 60_000.0 {
        snake_rush::sim::update(&mut state, now, 16.0);
        now += 16.0;
    }
    println!(
        "Headless run finished: score {} at level {}",
        state.score,
        state.level + 1
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
