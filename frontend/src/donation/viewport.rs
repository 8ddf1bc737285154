use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::config::NARROW_BREAKPOINT_PX;

/// Which interaction rules apply: taps on narrow screens, hover on wide ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewportClass {
    Narrow,
    #[default]
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width < NARROW_BREAKPOINT_PX {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == ViewportClass::Narrow
    }
}

/// Single resize subscription for the whole page; mounted once in `App`.
#[hook]
pub fn use_viewport_class() -> ViewportClass {
    let (width, _height) = use_window_size();
    ViewportClass::from_width(width)
}

/// Owns an `IntersectionObserver` watching one element. Dropping it disconnects.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    /// Reports `true` once at least `threshold` of `target` is on screen and
    /// `false` when it drops back below.
    pub fn observe(
        target: &Element,
        threshold: f64,
        on_change: Callback<bool>,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        let visible = entry.is_intersecting()
                            && entry.intersection_ratio() >= threshold;
                        on_change.emit(visible);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Flips to `true` the first time the referenced element scrolls into view
/// and stays there.
#[hook]
pub fn use_revealed(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let on_change = Callback::from(move |visible: bool| {
                        if visible {
                            revealed.set(true);
                        }
                    });
                    VisibilityObserver::observe(&element, 0.0, on_change)
                        .map_err(|err| warn!("Reveal observer unavailable: {:?}", err))
                        .ok()
                });
                move || drop(observer)
            },
            node,
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_splits_narrow_and_wide() {
        assert_eq!(ViewportClass::from_width(375.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(767.9), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(1440.0), ViewportClass::Wide);
    }

    #[test]
    fn defaults_to_wide_before_the_first_measurement() {
        assert!(!ViewportClass::default().is_narrow());
    }
}
