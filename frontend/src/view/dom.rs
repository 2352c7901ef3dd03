//! Browser glue for the view store: window scroll sampling, section
//! measurement and per-section intersection observers.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};
use yew::prelude::*;

use crate::view::layout::SectionExtent;
use crate::view::store::{ViewAction, ViewState};

/// Window events that invalidate the last scroll sample.
const SIGNALS: [&str; 2] = ["scroll", "resize"];

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("failed to listen for {event}: {reason}")]
    Listener { event: &'static str, reason: String },
    #[error("intersection observer unavailable: {0}")]
    Observer(String),
}

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Measure every `<section>` in document order.
pub fn measure_sections(document: &Document) -> Vec<SectionExtent> {
    let nodes = match document.query_selector_all("section") {
        Ok(nodes) => nodes,
        Err(_) => return Vec::new(),
    };

    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .filter_map(|element| {
            let id = element.id();
            if id.is_empty() {
                return None;  // Not a nav target
            }
            let height = element.offset_height();
            if height <= 0 {
                return Some(SectionExtent::unmeasured(id));
            }
            Some(SectionExtent::measured(
                id,
                element.offset_top().max(0) as u32,
                height as u32,
            ))
        })
        .collect()
}

fn scroll_offset(window: &Window) -> u32 {
    window
        .scroll_y()
        .map(|y| y.max(0.0).round() as u32)
        .unwrap_or(0)
}

fn publish(window: &Window, dispatcher: &UseReducerDispatcher<ViewState>) {
    let Some(document) = window.document() else {
        return;
    };
    dispatcher.dispatch(ViewAction::Scrolled {
        offset: scroll_offset(window),
        sections: measure_sections(&document),
    });
}

/// Feeds the store one sample per animation frame while scroll or resize
/// events arrive. Dropping it detaches the listeners and cancels any frame
/// still pending.
struct ScrollSampler {
    window: Window,
    on_signal: Closure<dyn FnMut()>,
    pending: Rc<Cell<Option<i32>>>,
}

impl ScrollSampler {
    fn attach(dispatcher: UseReducerDispatcher<ViewState>) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        if window.document().is_none() {
            return Err(DomError::NoDocument);
        }
        let pending: Rc<Cell<Option<i32>>> = Rc::default();

        let on_frame = {
            let window = window.clone();
            let pending = pending.clone();
            let dispatcher = dispatcher.clone();
            Closure::<dyn FnMut()>::new(move || {
                pending.set(None);
                publish(&window, &dispatcher);
            })
        };

        let on_signal = {
            let window = window.clone();
            let pending = pending.clone();
            let dispatcher = dispatcher.clone();
            Closure::<dyn FnMut()>::new(move || {
                if pending.get().is_some() {
                    return;
                }
                match window.request_animation_frame(on_frame.as_ref().unchecked_ref()) {
                    Ok(handle) => pending.set(Some(handle)),
                    Err(_) => publish(&window, &dispatcher),
                }
            })
        };

        let sampler = Self {
            window,
            on_signal,
            pending,
        };
        for event in SIGNALS {
            sampler
                .window
                .add_event_listener_with_callback(event, sampler.on_signal.as_ref().unchecked_ref())
                .map_err(|e| DomError::Listener {
                    event,
                    reason: describe(e),
                })?;
        }

        // Initial sample so the nav is correct before the first scroll
        publish(&sampler.window, &dispatcher);
        Ok(sampler)
    }
}

impl Drop for ScrollSampler {
    fn drop(&mut self) {
        for event in SIGNALS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.on_signal.as_ref().unchecked_ref());
        }
        if let Some(handle) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
        debug!("Scroll tracking detached");
    }
}

/// Keep the store's scroll state in sync with the window for as long as the
/// calling component is mounted.
#[hook]
pub fn use_scroll_tracking(dispatcher: UseReducerDispatcher<ViewState>) {
    use_effect_with_deps(
        move |_| {
            let sampler = match ScrollSampler::attach(dispatcher) {
                Ok(sampler) => Some(sampler),
                Err(e) => {
                    warn!("Scroll tracking disabled: {}", e);
                    None
                }
            };
            move || drop(sampler)
        },
        (),
    );
}

/// Reports a section's visible fraction to the store until it is revealed.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn observe(
        target: &Element,
        id: String,
        threshold: f64,
        dispatcher: UseReducerDispatcher<ViewState>,
    ) -> Result<Self, DomError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let fraction = entry.intersection_ratio();
                    dispatcher.dispatch(ViewAction::Visibility {
                        id: id.clone(),
                        fraction,
                    });
                    if fraction >= threshold {
                        observer.disconnect();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| DomError::Observer(describe(e)))?;
        // The first notification carries the fraction visible right now.
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watch `node` and feed its visibility into the store under `id`.
///
/// Without intersection observer support the section is revealed at once.
#[hook]
pub fn use_reveal_observer(
    id: AttrValue,
    node: NodeRef,
    threshold: f64,
    dispatcher: UseReducerDispatcher<ViewState>,
) {
    use_effect_with_deps(
        move |id: &AttrValue| {
            let id = id.to_string();
            let observer = match node.cast::<Element>() {
                Some(target) => {
                    match RevealObserver::observe(&target, id.clone(), threshold, dispatcher.clone()) {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            warn!("{}; revealing {} immediately", e, id);
                            dispatcher.dispatch(ViewAction::Visibility { id, fraction: 1.0 });
                            None
                        }
                    }
                }
                None => {
                    warn!("Section {} has no element to observe", id);
                    dispatcher.dispatch(ViewAction::Visibility { id, fraction: 1.0 });
                    None
                }
            };
            move || drop(observer)
        },
        id,
    );
}

/// Smoothly scroll the window back to the top. Fire-and-forget.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
