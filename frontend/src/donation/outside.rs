use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, Event, Node};
use yew::Callback;

const POINTER_EVENTS: [&str; 2] = ["mousedown", "touchstart"];

/// Document-level listener that reports presses landing outside `container`.
///
/// Held only while the donation panel is open; dropping it removes both
/// listeners from the document.
pub struct OutsidePointerListener {
    document: Document,
    callback: Closure<dyn FnMut(Event)>,
}

impl OutsidePointerListener {
    pub fn attach(container: Element, on_outside: Callback<()>) -> Result<Self, JsValue> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let inside = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .map(|node| container.contains(Some(&node)))
                .unwrap_or(false);
            if !inside {
                on_outside.emit(());
            }
        });

        for name in POINTER_EVENTS {
            document.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())?;
        }

        Ok(Self { document, callback })
    }
}

impl Drop for OutsidePointerListener {
    fn drop(&mut self) {
        for name in POINTER_EVENTS {
            let _ = self
                .document
                .remove_event_listener_with_callback(name, self.callback.as_ref().unchecked_ref());
        }
    }
}
