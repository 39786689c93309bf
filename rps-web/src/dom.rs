use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Update the `#game-status` live region for screen readers.
pub fn announce(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("game-status"))
    {
        node.set_text_content(Some(msg));
    }
}

/// A pending `setTimeout` that is cleared when cancelled or dropped.
///
/// Never drop a `Timeout` from inside its own callback; the closure it owns
/// is the one running.
pub struct Timeout {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Run `callback` once after `delay_ms` milliseconds.
    ///
    /// # Errors
    /// Returns the JavaScript error if the browser refuses to schedule the timer.
    pub fn schedule<F>(delay_ms: u32, callback: F) -> Result<Self, JsValue>
    where
        F: FnOnce() + 'static,
    {
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(run) = callback.take() {
                run();
            }
        });
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let handle = web_sys::window()
            .ok_or_else(|| JsValue::from_str("`window` unavailable"))?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay,
            )?;
        Ok(Self {
            handle,
            _callback: closure,
        })
    }

    /// Clear the timer without running it.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = web_sys::window() {
            win.clear_timeout_with_handle(self.handle);
        }
    }
}

impl std::fmt::Debug for Timeout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeout")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}
