//! Leptos Sentinel
//!
//! Infinite-scroll trigger for Leptos using `IntersectionObserver`.
//! Renders a marker element and reports when it scrolls fully into view.
//! The crate only signals the boundary crossing; callers decide what it means.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the sentinel that must be inside the viewport
pub const FULL_VISIBILITY: f64 = 1.0;

/// Edge detector over visibility reports.
///
/// Observers report on every threshold crossing and once right after
/// `observe()`. Only a hidden -> visible transition counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityEdge {
    visible: bool,
}

impl VisibilityEdge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a report, returning true when the sentinel just became visible
    pub fn observe(&mut self, intersecting: bool) -> bool {
        let became_visible = intersecting && !self.visible;
        self.visible = intersecting;
        became_visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Live observer bound to one sentinel element.
/// Disconnects when dropped (on rebind and on owner disposal).
struct Binding {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for Binding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn bind(element: &web_sys::Element, on_visible: Callback<()>) -> Result<Binding, JsValue> {
    let edge = Rc::new(RefCell::new(VisibilityEdge::new()));

    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        // Latest entry wins when several reports are batched
        let Some(entry) = entries.iter().last() else { return };
        let entry: IntersectionObserverEntry = entry.unchecked_into();
        if edge.borrow_mut().observe(entry.is_intersecting()) {
            on_visible.run(());
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(FULL_VISIBILITY));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(Binding { observer, _callback: callback })
}

/// Marker element placed after a list.
///
/// # Arguments
/// * `rebind` - Observation is torn down and re-created whenever this changes,
///   which re-delivers the current visibility with a fresh edge detector
/// * `on_visible` - Called when the marker becomes fully visible
#[component]
pub fn Sentinel(
    #[prop(into)] rebind: Signal<u64>,
    #[prop(into)] on_visible: Callback<()>,
) -> impl IntoView {
    let target = NodeRef::<Div>::new();

    Effect::new(move |previous: Option<Option<Binding>>| {
        // Disconnect the old observer before binding a new one
        drop(previous);
        rebind.track();

        let element = target.get()?;
        match bind(&element, on_visible) {
            Ok(binding) => Some(binding),
            Err(e) => {
                web_sys::console::error_1(&format!("[SENTINEL] Failed to observe: {:?}", e).into());
                None
            }
        }
    });

    view! {
        <div node_ref=target class="sentinel" style="height: 30px; margin: 10px 0;"></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_hidden() {
        let edge = VisibilityEdge::new();
        assert!(!edge.is_visible());
    }

    #[test]
    fn test_fires_on_hidden_to_visible() {
        let mut edge = VisibilityEdge::new();
        assert!(!edge.observe(false));
        assert!(edge.observe(true));
        assert!(edge.is_visible());
    }

    #[test]
    fn test_fires_once_per_transition() {
        let mut edge = VisibilityEdge::new();
        assert!(edge.observe(true));
        // Repeated visible reports are not new transitions
        assert!(!edge.observe(true));
        assert!(!edge.observe(true));

        assert!(!edge.observe(false));
        assert!(edge.observe(true));
    }

    #[test]
    fn test_fresh_detector_counts_initial_report() {
        let mut first = VisibilityEdge::new();
        assert!(first.observe(true));

        // Rebinding starts over, so a still-visible sentinel fires again
        let mut rebound = VisibilityEdge::new();
        assert!(rebound.observe(true));
    }
}
