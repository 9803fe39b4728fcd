//! Leptos Overlay Utilities
//!
//! Dismiss helpers for modal-style overlays: close when the backdrop itself
//! is clicked, and close on the Escape key via a document listener that is
//! removed again when its owner is cleaned up.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Key names that dismiss an overlay ("Esc" is the legacy Edge/IE name)
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Create click handler for a backdrop element.
/// Fires `on_dismiss` only when the click landed on the backdrop, not on the
/// surface nested inside it.
pub fn make_on_backdrop_click<F>(on_dismiss: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn() + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        let on_backdrop = match (ev.target(), ev.current_target()) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        };
        if on_backdrop {
            on_dismiss();
        }
    }
}

/// Document keydown listener, detached on drop
pub struct KeyBinding {
    listener: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

impl Drop for KeyBinding {
    fn drop(&mut self) {
        if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
            let _ = doc.remove_event_listener_with_callback(
                "keydown",
                self.listener.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Bind a global Escape handler for as long as the current reactive owner lives
pub fn bind_escape_key<F>(on_escape: F)
where
    F: Fn() + 'static,
{
    let listener = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |ev: web_sys::KeyboardEvent| {
            if is_dismiss_key(&ev.key()) {
                on_escape();
            }
        },
    );

    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    if doc
        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }

    // Dropped (and detached) together with the owner's arena values
    StoredValue::new_local(KeyBinding { listener });
}
