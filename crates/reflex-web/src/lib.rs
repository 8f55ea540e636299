//! Browser entry points for the reflex game.
//!
//! JavaScript owns event wiring and the animation frame loop; it forwards
//! pointer events (in canvas bitmap coordinates), viewport changes and frame
//! ticks to the exports below.

use std::cell::RefCell;
use std::rc::Rc;

use reflex_engine::{GameConfig, InputEvent, RoundId};
use wasm_bindgen::prelude::*;

mod canvas;
mod platform;
pub mod runner;

pub use runner::{WebHost, WebRunner};

thread_local! {
    static RUNNER: RefCell<Option<WebRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the runner. Before `game_init`, or if the runner is
/// already borrowed, the call is dropped.
fn with_runner<R>(f: impl FnOnce(&mut WebRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut borrow) => borrow.as_mut().map(f),
        Err(_) => {
            log::warn!("runner busy; event dropped");
            None
        }
    })
}

fn random_seed() -> u64 {
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (noise << 32) ^ js_sys::Date::now() as u64
}

/// Create the game on the canvas with id `canvas_id`.
/// `config_json` may override any subset of the defaults.
#[wasm_bindgen]
pub fn game_init(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json {
        Some(json) => GameConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => GameConfig::default(),
    };
    let on_timeout: Rc<dyn Fn(RoundId)> = Rc::new(|round| {
        with_runner(|r| r.round_timeout(round));
    });
    let runner = WebRunner::new(canvas_id, config, on_timeout, random_seed())?;

    let previous = RUNNER.with(|cell| cell.borrow_mut().replace(runner));
    if let Some(mut previous) = previous {
        log::info!("reflex: re-initialized; stopping previous game");
        previous.shutdown();
    }
    log::info!("reflex: initialized on #{canvas_id}");
    Ok(())
}

#[wasm_bindgen]
pub fn game_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

#[wasm_bindgen]
pub fn game_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn game_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn game_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

/// Draw one frame; call from `requestAnimationFrame`.
#[wasm_bindgen]
pub fn game_frame() {
    with_runner(|r| r.frame());
}

/// JSON snapshot of the game for surrounding UI.
#[wasm_bindgen]
pub fn game_state() -> Result<String, JsValue> {
    with_runner(|r| r.state_json())
        .unwrap_or_else(|| Err(JsValue::from_str("Game not initialized")))
}
