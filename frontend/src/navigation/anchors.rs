use crate::dom::{self, EventListener};
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

const IN_PAGE_LINK: &str = "a[href^='#']";

/// Turns clicks on in-page `#section` links into smooth scrolls.
#[hook]
pub fn use_smooth_anchor_scroll() {
    use_effect_with_deps(
        |_| {
            let listener = dom::document().and_then(|document| {
                EventListener::new(&document, "click", |event| {
                    let Some(link) = event
                        .target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                        .and_then(|element| element.closest(IN_PAGE_LINK).ok().flatten())
                    else {
                        return;
                    };
                    event.prevent_default();
                    let href = link.get_attribute("href").unwrap_or_default();
                    let section_id = href.strip_prefix('#').unwrap_or(&href);
                    if let Err(e) = dom::scroll_to_section(section_id) {
                        log::error!("Failed to scroll to #{}: {}", section_id, e);
                    }
                })
            });
            if let Err(e) = &listener {
                log::error!("Smooth scrolling disabled: {}", e);
            }
            move || drop(listener)
        },
        (),
    );
}
