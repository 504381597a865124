//! Debounced window scroll watcher.
//!
//! Scroll events fire far more often than the sticky-bar decision needs to
//! be recomputed, so the listener arms a trailing timeout and only the last
//! event in a burst runs the callback. The caller gets back an explicit
//! destructor to run from its effect cleanup.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

/// Attach a debounced `scroll` listener on the window. `on_fire` also runs
/// once immediately so the initial state is evaluated without a scroll.
pub fn watch_scroll(debounce_ms: u32, on_fire: impl Fn() + 'static) -> Box<dyn FnOnce()> {
    let Some(window) = web_sys::window() else {
        return Box::new(|| ());
    };

    let on_fire = Rc::new(on_fire);
    // Pending trailing timeout; replacing it drops (and thereby cancels)
    // the previous one, restarting the debounce window.
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let listener = Closure::<dyn Fn()>::new({
        let on_fire = on_fire.clone();
        let pending = pending.clone();
        move || {
            let on_fire = on_fire.clone();
            let timeout = Timeout::new(debounce_ms, move || on_fire());
            *pending.borrow_mut() = Some(timeout);
        }
    });

    if window
        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach scroll listener");
        return Box::new(|| ());
    }

    on_fire();

    Box::new(move || {
        if let Some(win) = web_sys::window() {
            let _ = win
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        }
        pending.borrow_mut().take();
    })
}
