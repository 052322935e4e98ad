use crate::config::{REVEAL_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::dom::{self, DomError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_reveal_targets() -> Result<(IntersectionObserver, ObserverCallback), DomError> {
    let callback = ObserverCallback::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            if let Err(e) = target.class_list().add_1(REVEAL_CLASS) {
                log::warn!("Failed to reveal element: {:?}", e);
            }
            // one-shot, the class is never taken away again
            observer.unobserve(&target);
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let targets = dom::query_all(REVEAL_SELECTOR)?;
    log::debug!("Observing {} elements for entrance animation", targets.len());
    for target in &targets {
        observer.observe(target);
    }
    Ok((observer, callback))
}

/// Adds the entrance animation class to sections and cards the first time they scroll into view.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        |_| {
            let observed = match observe_reveal_targets() {
                Ok(observed) => Some(observed),
                Err(e) => {
                    log::error!("Entrance animations disabled: {}", e);
                    None
                }
            };
            move || {
                if let Some((observer, _callback)) = observed {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}
