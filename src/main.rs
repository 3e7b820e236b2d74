//! Teacup Push entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use teacup_push::World;
    use teacup_push::input::InputEvent;
    use teacup_push::renderer::CanvasRenderer;

    /// Game instance holding all state
    struct Game {
        world: World,
        renderer: CanvasRenderer,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Teacup Push starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let world = World::reference();
        let size = world.level().surface_size();
        canvas.set_width(size.x);
        canvas.set_height(size.y);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let game = Rc::new(RefCell::new(Game {
            world,
            renderer: CanvasRenderer::new(ctx),
        }));

        setup_input_handlers(game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Teacup Push running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;

        // Arrow keys steer
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(input) = InputEvent::key_down(&event.key()) {
                    game.borrow_mut().world.handle_input(input);
                }
            });
            document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Any key release stops
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: KeyboardEvent| {
                game.borrow_mut().world.handle_input(InputEvent::KeyUp);
            });
            document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let Game { world, renderer } = &mut *g;
            world.tick(renderer);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use teacup_push::World;
    use teacup_push::level::REFERENCE_SOLUTION;
    use teacup_push::renderer::AsciiRenderer;
    use teacup_push::sim::replay;

    env_logger::init();
    log::info!("Teacup Push (native) starting...");
    log::info!("Native mode replays the built-in solution - run with `trunk serve` to play");

    let mut world = World::reference();
    let mut board = AsciiRenderer::new(world.level().cell_size);

    world.tick(&mut board);
    println!("{board}");

    replay(&mut world, REFERENCE_SOLUTION, &mut board);
    println!("{board}");
    log::info!(
        "Replay finished after {} ticks, cleared: {}",
        world.time_ticks(),
        world.is_cleared()
    );

    match serde_json::to_string_pretty(&world) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize world: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
