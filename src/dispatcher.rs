//! UI Action Dispatcher
//!
//! Binds every action once the page has loaded. Handlers are independent:
//! a failing one is logged and leaves the page as it was.

use std::future::Future;
use std::rc::Rc;

use dom_delegate::Trigger;
use leptos::prelude::{document, window};
use any_spawner::Executor;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::actions;
use crate::config::PageConfig;
use crate::context::{PageContext, PageHandle};
use crate::dom;
use crate::error::ActionResult;

pub type ActionFn = Rc<dyn Fn(&PageHandle, &Event, &Element) -> ActionResult>;

/// (trigger selector, delegated target selector, handler)
#[derive(Clone)]
pub struct ActionBinding {
    pub name: &'static str,
    pub event: &'static str,
    pub trigger: Trigger,
    pub run: ActionFn,
}

impl ActionBinding {
    pub fn click<F>(name: &'static str, trigger: Trigger, run: F) -> Self
    where
        F: Fn(&PageHandle, &Event, &Element) -> ActionResult + 'static,
    {
        Self {
            name,
            event: "click",
            trigger,
            run: Rc::new(run),
        }
    }
}

/// Runs once after binding, usually gated on the current path
#[derive(Clone, Copy)]
pub struct LoadAction {
    pub name: &'static str,
    pub run: fn(&PageHandle) -> ActionResult,
}

/// Run an async handler body on the UI thread, logging its failure
pub fn spawn_action<F>(name: &'static str, task: F)
where
    F: Future<Output = ActionResult> + 'static,
{
    spawn_local(async move {
        if let Err(e) = task.await {
            log::warn!("[{}] {}", name, e);
        }
    });
}

fn bind(ctx: &PageHandle, binding: ActionBinding) {
    let ActionBinding { name, event, trigger, run } = binding;
    let handle = ctx.clone();
    let handler: dom_delegate::Handler = Rc::new(move |ev: Event, el: Element| {
        log::debug!("[{}] triggered", name);
        if let Err(e) = run(&handle, &ev, &el) {
            log::warn!("[{}] {}", name, e);
        }
    });
    let bound = dom_delegate::bind(&document(), &trigger, event, handler);
    if bound > 0 {
        log::debug!("[{}] bound on {} ({})", name, trigger, bound);
    }
}

/// Nothing is mounted, so the task executor has to be started by hand
fn init_executor() {
    if Executor::init_wasm_bindgen().is_err() {
        log::debug!("task executor already running");
    }
}

/// Register every binding and run the load actions
pub fn dispatch(ctx: PageHandle) {
    init_executor();
    for binding in actions::bindings() {
        bind(&ctx, binding);
    }
    for load in actions::load_actions() {
        if let Err(e) = (load.run)(&ctx) {
            log::warn!("[{}] {}", load.name, e);
        }
    }
    log::info!("page actions ready on {}", ctx.path);
}

/// Entry point: read the page, install logging, bind once the page is loaded
pub fn start() {
    console_error_panic_hook::set_once();

    let config = PageConfig::from_page();
    if console_logger::init(config.settings.level_filter(), config.settings.log_history).is_err() {
        web_sys::console::warn_1(&"[dispatcher] logger already installed".into());
    }
    let ctx: PageHandle = Rc::new(PageContext::new(config, dom::current_path()));

    if document().ready_state() == "complete" {
        dispatch(ctx);
    } else {
        let on_load = Closure::once(move |_: Event| dispatch(ctx));
        if window()
            .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
            .is_err()
        {
            log::error!("could not wait for page load");
        }
        on_load.forget();
    }
}

/// Recent log lines, callable from the browser console as `siteActionsLog()`
#[wasm_bindgen(js_name = siteActionsLog)]
pub fn log_history() -> js_sys::Array {
    console_logger::history().into_iter().map(JsValue::from).collect()
}
