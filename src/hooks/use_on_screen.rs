use gloo::console::warn;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// The intersection state reported by the newest entry of a batch.
pub fn latest_intersection(entries: impl IntoIterator<Item = bool>) -> Option<bool> {
    entries.into_iter().last()
}

/// Tracks whether the referenced element intersects the viewport.
///
/// The observer is attached once the node is mounted, replaced if the node
/// changes, and disconnected when the owning component is cleaned up.
pub fn use_on_screen(target: NodeRef<Div>) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let observer = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

    let disconnect = move || {
        observer.try_update_value(|slot| {
            if let Some((current, _callback)) = slot.take() {
                current.disconnect();
            }
        });
    };

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        disconnect();

        let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let states = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| entry.is_intersecting());
            if let Some(intersecting) = latest_intersection(states) {
                set_visible.try_set(intersecting);
            }
        });

        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(created) => {
                created.observe(&element);
                observer.set_value(Some((created, callback)));
            }
            Err(_) => {
                warn!("IntersectionObserver is not available; the feed will not load more pages");
                set_visible.set(false);
            }
        }
    });

    on_cleanup(disconnect);

    visible
}
