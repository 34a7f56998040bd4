//! WASM entry points.
//!
//! `start` runs when the module is instantiated: it installs the panic hook
//! and console logger, reads the fallback table once, and initializes the
//! page as soon as the document has finished loading.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure, prelude::wasm_bindgen};

use crate::dom;
use crate::renderer::{ParticipantsRenderer, waits_for_ready};

thread_local! {
    static RENDERER: RefCell<Option<Rc<ParticipantsRenderer>>> = const { RefCell::new(None) };
}

fn log_level() -> log::Level {
    if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log_level()).is_err() {
        log::debug!("participants: console logger already installed");
    }

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::warn!("participants: not starting: {err}");
            return;
        }
    };
    let renderer = Rc::new(ParticipantsRenderer::new(dom::load_fallback(&document)));
    RENDERER.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&renderer)));

    if waits_for_ready(&document.ready_state()) {
        let on_ready = Closure::once_into_js(move || run(&renderer));
        if let Err(err) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            log::warn!("participants: could not wait for DOMContentLoaded: {err:?}");
        }
    } else {
        run(&renderer);
    }
}

/// Re-run initialization, e.g. after cards were inserted dynamically.
///
/// Cards that already carry a block are left untouched.
#[wasm_bindgen]
pub fn init_participants() {
    let renderer = RENDERER.with(|slot| slot.borrow().clone());
    let renderer = match renderer {
        Some(renderer) => renderer,
        None => {
            let fallback = dom::document().map(|d| dom::load_fallback(&d)).unwrap_or_default();
            Rc::new(ParticipantsRenderer::new(fallback))
        }
    };
    run(&renderer);
}

fn run(renderer: &ParticipantsRenderer) {
    if let Err(err) = dom::init_document(renderer) {
        log::warn!("participants: initialization failed: {err}");
    }
}
