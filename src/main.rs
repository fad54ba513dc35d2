//! Glyph Breakout entry point
//!
//! Wires pointer/resize events to the state machine and drives the frame
//! loop. The loop is only scheduled while Running; pausing or winning simply
//! stops requesting the next frame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use glyph_breakout::renderer::CanvasRenderer;
    use glyph_breakout::settings::Settings;
    use glyph_breakout::sim::{tick, GamePhase, GameState, RoundEvent, TickInput};

    const START_PROMPT: &str = "MOVE MOUSE HERE TO START";
    const PAUSE_OVERLAY: &str = "PAUSED";

    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        settings: Settings,
        /// Latest pointer position; sticky between frames
        input: TickInput,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Glyph Breakout starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        size_to_parent(&canvas);

        let width = canvas.width() as f32;
        let height = canvas.height() as f32;
        let seed = js_sys::Date::now() as u64;

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(width, height, seed),
            renderer: CanvasRenderer::new(&canvas)?,
            settings: Settings::load(),
            input: TickInput::default(),
        }));
        log::info!("Game initialized: {}x{}, seed {}", width, height, seed);

        // Idle boot: static scene plus the start prompt
        {
            let g = game.borrow();
            g.renderer.draw_static_scene(&g.state)?;
            g.renderer.draw_overlay(START_PROMPT)?;
        }

        setup_pointer_handlers(&canvas, game.clone());
        setup_resize_handler(&canvas, game);

        log::info!("Glyph Breakout ready");
        Ok(())
    }

    /// Match the canvas backing size to its parent element
    fn size_to_parent(canvas: &HtmlCanvasElement) {
        if let Some(parent) = canvas.parent_element() {
            canvas.set_width(parent.client_width().max(0) as u32);
            canvas.set_height(parent.client_height().max(0) as u32);
        }
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Pointer motion drives the paddle, relative to the canvas
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let relative_x = event.client_x() as f32 - rect.left() as f32;
                game.borrow_mut().input.pointer_x = Some(relative_x);
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Entering the play surface starts or resumes the round
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let phase = game.borrow().state.phase;
                match phase {
                    GamePhase::Idle => {
                        if game.borrow_mut().state.start().is_ok() {
                            log::info!("round started");
                            request_frame(game.clone());
                        }
                    }
                    GamePhase::Paused => {
                        if game.borrow_mut().state.resume().is_ok() {
                            log::info!("round resumed");
                            request_frame(game.clone());
                        }
                    }
                    GamePhase::Running => {}
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Leaving the play surface pauses
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                if g.state.pause().is_ok() {
                    log::info!("round paused");
                    let _ = g.renderer.draw_overlay(PAUSE_OVERLAY);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let canvas = canvas.clone();

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            size_to_parent(&canvas);
            let new_width = canvas.width() as f32;
            let new_height = canvas.height() as f32;

            let mut g = game.borrow_mut();
            // Rescales against the pre-resize dimensions internally
            g.state.resize(new_width, new_height);
            g.renderer.resize(new_width, new_height);

            // The frame loop repaints Running states; redraw the rest here
            match g.state.phase {
                GamePhase::Paused => {
                    let _ = g.renderer.draw_static_scene(&g.state);
                    let _ = g.renderer.draw_overlay(PAUSE_OVERLAY);
                }
                GamePhase::Idle => {
                    let _ = g.renderer.draw_static_scene(&g.state);
                    let _ = g.renderer.draw_overlay(START_PROMPT);
                }
                GamePhase::Running => {}
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(game: Rc<RefCell<Game>>) {
        let keep_going = {
            let mut g = game.borrow_mut();
            if g.state.phase != GamePhase::Running {
                // Paused or idle; cease scheduling until re-entry
                false
            } else {
                let input = g.input;
                match tick(&mut g.state, &input) {
                    Some(RoundEvent::Win) => {
                        // Back to Idle with a fresh board; wait for re-entry
                        let _ = g.renderer.draw_static_scene(&g.state);
                        let _ = g.renderer.draw_overlay(START_PROMPT);
                        false
                    }
                    _ => {
                        let _ = g.renderer.draw_frame(&g.state, &g.settings);
                        true
                    }
                }
            }
        };

        if keep_going {
            request_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run().expect("failed to start");
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glyph_breakout::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use glyph_breakout::sim::{tick, GameState, TickInput};

    env_logger::init();
    log::info!("Glyph Breakout (native) starting...");
    log::info!("Rendering requires the web build - run with `trunk serve`");

    // Headless smoke run: keep the paddle centered and tick a few seconds
    let mut state = GameState::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, 42);
    state.start().expect("fresh state starts");
    let input = TickInput {
        pointer_x: Some(DEFAULT_WIDTH / 2.0),
    };
    for _ in 0..600 {
        tick(&mut state, &input);
    }
    println!(
        "headless demo: score {} after 600 ticks, {} blocks remaining",
        state.score,
        state.alive_blocks()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main; this just satisfies the compiler
}
