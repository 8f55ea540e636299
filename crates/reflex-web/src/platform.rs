//! Browser implementations of the engine's host capabilities.

use std::rc::Rc;

use reflex_engine::{Announcer, ReflexError, RoundId, Scheduler, ScoreStore, TimerHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance, Storage, Window};

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `window.setTimeout` timers. Fired rounds are handed to `on_fire`.
pub struct WindowScheduler {
    window: Window,
    on_fire: Rc<dyn Fn(RoundId)>,
}

impl WindowScheduler {
    pub fn new(window: Window, on_fire: Rc<dyn Fn(RoundId)>) -> Self {
        Self { window, on_fire }
    }
}

impl Scheduler for WindowScheduler {
    fn set_timeout(&mut self, delay_ms: u32, round: RoundId) -> TimerHandle {
        let on_fire = Rc::clone(&self.on_fire);
        let callback = Closure::once_into_js(move || on_fire(round));
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay_ms.min(i32::MAX as u32) as i32,
            ) {
            Ok(id) => TimerHandle(id),
            Err(err) => {
                log::error!(
                    "setTimeout failed, round {} cannot time out: {}",
                    round.0,
                    js_error(err)
                );
                TimerHandle(-1)
            }
        }
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        if handle.0 >= 0 {
            self.window.clear_timeout_with_handle(handle.0);
        }
    }
}

/// Web Speech API announcer.
pub struct SpeechAnnouncer {
    synth: Option<SpeechSynthesis>,
}

impl SpeechAnnouncer {
    pub fn new(window: &Window) -> Self {
        let synth = window.speech_synthesis().ok();
        if synth.is_none() {
            log::warn!("speech synthesis unavailable; instructions will not be spoken");
        }
        Self { synth }
    }
}

impl Announcer for SpeechAnnouncer {
    fn announce(&mut self, text: &str, locale: Option<&str>) -> Result<(), ReflexError> {
        let synth = self
            .synth
            .as_ref()
            .ok_or_else(|| ReflexError::Announce("speech synthesis unavailable".into()))?;
        let utterance = SpeechSynthesisUtterance::new_with_text(text)
            .map_err(|err| ReflexError::Announce(js_error(err)))?;
        if let Some(locale) = locale {
            utterance.set_lang(locale);
        }
        // Drop any instruction still queued from the previous round.
        synth.cancel();
        synth.speak(&utterance);
        Ok(())
    }
}

/// `localStorage`-backed score storage.
pub struct LocalScoreStore {
    storage: Option<Storage>,
}

impl LocalScoreStore {
    pub fn new(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable; best score will not persist");
        }
        Self { storage }
    }
}

impl ScoreStore for LocalScoreStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ReflexError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| ReflexError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|err| ReflexError::Storage(js_error(err)))
    }
}
