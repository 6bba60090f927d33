//! DOM Delegate Utilities
//!
//! jQuery-style event binding for server-rendered pages.
//! Listeners live for the whole page: closures are leaked after binding
//! and nothing is ever unbound.

use std::fmt;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node};

/// Where a listener is attached and which elements it reacts to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Listener on every `container` match, firing for events that bubble up
    /// from descendants matching `target` (including ones inserted later)
    Delegated { container: String, target: String },
    /// Listener on every element matching `selector` at bind time
    Direct { selector: String },
}

impl Trigger {
    pub fn delegated(container: impl Into<String>, target: impl Into<String>) -> Self {
        Trigger::Delegated {
            container: container.into(),
            target: target.into(),
        }
    }

    pub fn direct(selector: impl Into<String>) -> Self {
        Trigger::Direct {
            selector: selector.into(),
        }
    }

    /// Selector the listener itself is attached to
    pub fn anchor(&self) -> &str {
        match self {
            Trigger::Delegated { container, .. } => container,
            Trigger::Direct { selector } => selector,
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Delegated { container, target } => write!(f, "{} > {}", container, target),
            Trigger::Direct { selector } => write!(f, "{}", selector),
        }
    }
}

/// Handler receives the raw event and the element that matched the trigger
/// (the delegate target, or the element the listener sits on)
pub type Handler = Rc<dyn Fn(Event, Element)>;

/// Bind `handler` for `event` according to `trigger`.
/// Returns how many anchor elements received a listener.
pub fn bind(document: &Document, trigger: &Trigger, event: &str, handler: Handler) -> usize {
    let anchors = match document.query_selector_all(trigger.anchor()) {
        Ok(list) => list,
        Err(_) => return 0,
    };

    let mut bound = 0;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let listener = match trigger {
            Trigger::Delegated { target, .. } => make_delegated(anchor.clone(), target.clone(), handler.clone()),
            Trigger::Direct { .. } => make_direct(anchor.clone(), handler.clone()),
        };
        if anchor
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            .is_ok()
        {
            bound += 1;
        }
        listener.forget();
    }
    bound
}

fn make_delegated(container: Element, target: String, handler: Handler) -> Closure<dyn FnMut(Event)> {
    Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let Some(origin) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        // Walk up from the origin; the match must still be inside this container
        if let Ok(Some(matched)) = origin.closest(&target) {
            let node: &Node = matched.as_ref();
            if container.contains(Some(node)) {
                handler(ev, matched);
            }
        }
    })
}

fn make_direct(element: Element, handler: Handler) -> Closure<dyn FnMut(Event)> {
    Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        handler(ev, element.clone());
    })
}
