use std::rc::Rc;

use reflex_engine::{
    Announcer, App, GameConfig, Host, InputEvent, ReflexError, RoundId, Scheduler, ScoreStore,
};
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::canvas::{init_canvas, CanvasSurface};
use crate::platform::{LocalScoreStore, SpeechAnnouncer, WindowScheduler};

fn missing(what: &str) -> JsValue {
    JsValue::from_str(&ReflexError::Host(format!("no {what}")).to_string())
}

/// Browser host: window timers, Web Speech and localStorage.
pub struct WebHost {
    scheduler: WindowScheduler,
    announcer: SpeechAnnouncer,
    store: LocalScoreStore,
}

impl Host for WebHost {
    fn scheduler(&mut self) -> &mut dyn Scheduler {
        &mut self.scheduler
    }

    fn announcer(&mut self) -> &mut dyn Announcer {
        &mut self.announcer
    }

    fn store(&self) -> &dyn ScoreStore {
        &self.store
    }

    fn store_mut(&mut self) -> &mut dyn ScoreStore {
        &mut self.store
    }
}

/// Wires the engine `App` to a canvas element.
///
/// Lives in a `thread_local!` behind the exported free functions, because
/// wasm-bindgen cannot export generic structs directly.
pub struct WebRunner {
    app: App<WebHost>,
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    hovering: bool,
}

impl WebRunner {
    pub fn new(
        canvas_id: &str,
        config: GameConfig,
        on_timeout: Rc<dyn Fn(RoundId)>,
        seed: u64,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| missing("window"))?;
        let document = window.document().ok_or_else(|| missing("document"))?;
        let (canvas, ctx) = init_canvas(&document, canvas_id)?;

        let host = WebHost {
            announcer: SpeechAnnouncer::new(&window),
            store: LocalScoreStore::new(&window),
            scheduler: WindowScheduler::new(window, on_timeout),
        };
        let mut app = App::new(config, host, seed);
        app.resize(canvas.width() as f32, canvas.height() as f32);

        Ok(Self {
            app,
            canvas,
            surface: CanvasSurface::new(ctx),
            hovering: false,
        })
    }

    /// Resize the canvas bitmap and relayout.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width.max(0.0).round() as u32);
        self.canvas.set_height(height.max(0.0).round() as u32);
        self.app.handle_input(InputEvent::Resize { width, height });
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.app.handle_input(event);
        self.sync_cursor();
    }

    /// Cancel outstanding timers before this runner is replaced.
    pub fn shutdown(&mut self) {
        self.app.shutdown();
    }

    pub fn round_timeout(&mut self, round: RoundId) {
        self.app.on_round_timeout(round);
        self.sync_cursor();
    }

    /// Draw one frame.
    pub fn frame(&mut self) {
        self.app.render(&mut self.surface);
    }

    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.app.snapshot())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    fn sync_cursor(&mut self) {
        let hovering = self.app.is_hovering();
        if hovering == self.hovering {
            return;
        }
        self.hovering = hovering;
        let cursor = if hovering { "pointer" } else { "default" };
        if let Err(err) = self.canvas.style().set_property("cursor", cursor) {
            log::debug!("could not set cursor: {err:?}");
        }
    }
}
