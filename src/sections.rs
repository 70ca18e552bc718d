//! Viewport tracking of in-page sections.
//!
//! A [`SectionObserver`] owns the browser `IntersectionObserver` together
//! with the JS callback it calls into. Dropping it disconnects the
//! observer, so no callback can outlive the navigation bar that created it.

use std::cell::{Cell, RefCell};

use leptos::document;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::{SECTION_ROOT_MARGIN, SECTION_THRESHOLD};
use crate::console;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl SectionObserver {
    /// Observe the elements with the given ids. `on_visible` receives the id
    /// of each section crossing the viewport midline, in batch order.
    ///
    /// Ids without a matching element are skipped. Returns `None` when
    /// nothing could be observed.
    pub fn observe(ids: &[&str], on_visible: impl Fn(String) + 'static) -> Option<Self> {
        let sections: Vec<_> = ids
            .iter()
            .filter_map(|id| {
                let section = document().get_element_by_id(id);
                if section.is_none() {
                    console::debug(&format!("section #{id} not found, not tracking it"));
                }
                section
            })
            .collect();
        if sections.is_empty() {
            return None;
        }

        let callback: EntriesCallback =
            Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch = entries.iter().map(|entry| {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    (entry.target().id(), entry.is_intersecting())
                });
                report_visible(batch, &on_visible);
            });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(SECTION_ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(SECTION_THRESHOLD));

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                console::warn(&format!(
                    "could not create section observer, links will not follow scrolling: {:?}",
                    e
                ));
                return None;
            }
        };

        for section in &sections {
            observer.observe(section);
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

/// Report the intersecting sections of one observer batch, in batch order.
/// When several sections intersect at once the last one reported wins.
pub fn report_visible(
    batch: impl IntoIterator<Item = (String, bool)>,
    on_visible: &impl Fn(String),
) {
    for (id, intersecting) in batch {
        if intersecting {
            on_visible(id);
        }
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Holds the observer of the current navigation context.
///
/// Observers are installed one animation frame after the context changes,
/// once the routed page has rendered its sections. Each [`reset`] bumps a
/// generation so an installation scheduled before a later reset (or
/// before unmount) is discarded instead of resurrecting stale tracking.
///
/// [`reset`]: ObserverSlot::reset
#[derive(Default)]
pub struct ObserverSlot {
    current: RefCell<Option<SectionObserver>>,
    generation: Cell<u64>,
}

impl ObserverSlot {
    /// Disconnect the current observer and return the new generation.
    pub fn reset(&self) -> u64 {
        self.current.borrow_mut().take();
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    /// Store `observer` if no reset happened since `generation` was issued.
    /// A stale observer is dropped, which disconnects it.
    pub fn install(&self, generation: u64, observer: Option<SectionObserver>) {
        if self.is_current(generation) {
            *self.current.borrow_mut() = observer;
        }
    }
}
