use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

use crate::background::frame::next_frame;
use crate::config;
use crate::dom::{self, Listener};
use crate::error::MountError;

const VISIBLE: &str = "is-visible";

/// Transition delay for the reveal element at `index` in the load cascade.
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(config::REVEAL_STAGGER_MS)
}

fn reveal_items(document: &Document) -> Result<Vec<Element>, MountError> {
    let nodes = document.query_selector_all(config::REVEAL_SELECTOR)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn show(element: &Element) {
    let _ = element.class_list().add_1(VISIBLE);
}

/// Keeps the observer and its callbacks alive for as long as the page is
/// mounted.
pub struct Reveal {
    observer: Option<IntersectionObserver>,
    _on_intersect: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
    _on_load: Option<Listener>,
}

impl Drop for Reveal {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

/// Reveal `.reveal` elements as they scroll into view, and cascade the rest in
/// once the page has loaded.
pub fn install() -> Result<Reveal, MountError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let items = reveal_items(&document)?;

    let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
    let (observer, on_intersect) = if supported {
        let on_intersect = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    show(&target);
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
        for item in &items {
            observer.observe(item);
        }
        (Some(observer), Some(on_intersect))
    } else {
        debug!("IntersectionObserver unavailable, revealing everything");
        items.iter().for_each(show);
        (None, None)
    };

    let on_load = if document.ready_state() == "complete" {
        cascade(&document);
        None
    } else {
        let loaded = document.clone();
        Some(Listener::new(&window, "load", move |_| cascade(&loaded))?)
    };

    Ok(Reveal {
        observer,
        _on_intersect: on_intersect,
        _on_load: on_load,
    })
}

/// Drop the `preload` guard, then on the next frame reveal whatever the
/// observer has not reached yet, one step apart.
fn cascade(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().remove_1("preload");
    }

    let document = document.clone();
    spawn_local(async move {
        if next_frame().await.is_err() {
            return;
        }
        let Ok(items) = reveal_items(&document) else {
            return;
        };
        for (index, item) in items.iter().enumerate() {
            if item.class_list().contains(VISIBLE) {
                continue;
            }
            if let Some(element) = item.dyn_ref::<HtmlElement>() {
                let _ = element
                    .style()
                    .set_property("transition-delay", &format!("{}ms", stagger_delay_ms(index)));
            }
            show(item);
        }
    });
}

/// Installs reveal handling for the lifetime of the calling component.
#[hook]
pub fn use_reveal() {
    use_effect_with_deps(
        |_| {
            let reveal = match install() {
                Ok(reveal) => Some(reveal),
                Err(err) => {
                    debug!("Reveal animations disabled: {}", err);
                    None
                }
            };
            move || drop(reveal)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cascade_steps_by_sixty_ms() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 60);
        assert_eq!(stagger_delay_ms(7), 420);
    }

    #[test]
    fn huge_index_saturates() {
        assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
    }
}
