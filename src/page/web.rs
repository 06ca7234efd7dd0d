use std::cell::RefCell;

use dioxus::{
    logger::tracing::{debug, error, warn},
    prelude::*,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Window};

use super::{
    is_loading_state, run_when_ready, DocumentLifecycle, MountError, NavMount, PageDom,
    FALLBACK_SELECTOR, HOST_ATTRIBUTE, MOUNT_POINT_SELECTOR,
};
use crate::components::AppNav;
use crate::nav::{build_nav, deduce_active_id, NavConfig, NavFragment, PageEnvironment};

const PAGE_MARKER_ATTRIBUTE: &str = "data-page";

thread_local! {
    static NAV_MOUNT: RefCell<NavMount> = RefCell::new(NavMount::new());
}

fn js_error(err: JsValue) -> String {
    format!("{err:?}")
}

#[derive(Clone, Debug)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(element) => element,
            Err(err) => {
                warn!("Could not query {selector}! {}", js_error(err));
                None
            }
        }
    }
}

impl PageEnvironment for WebPage {
    fn current_path(&self) -> String {
        match self.window.location().pathname() {
            Ok(path) => path,
            Err(err) => {
                warn!("Could not read location path! {}", js_error(err));
                String::new()
            }
        }
    }

    fn page_marker(&self) -> Option<String> {
        self.document
            .document_element()
            .and_then(|root| root.get_attribute(PAGE_MARKER_ATTRIBUTE))
    }
}

impl PageDom for WebPage {
    type Node = Element;

    fn nav_container(&self) -> Option<Element> {
        self.query(MOUNT_POINT_SELECTOR)
    }

    fn main_region(&self) -> Option<Element> {
        self.query(FALLBACK_SELECTOR)
    }

    fn create_host(&self) -> Result<Element, MountError> {
        let host = self
            .document
            .create_element("div")
            .map_err(|err| MountError::CouldNotCreateHost(js_error(err)))?;
        host.set_attribute(HOST_ATTRIBUTE, "")
            .map_err(|err| MountError::CouldNotCreateHost(js_error(err)))?;
        Ok(host)
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), MountError> {
        match parent.append_child(child) {
            Ok(_node) => Ok(()),
            Err(err) => Err(MountError::CouldNotInsert(js_error(err))),
        }
    }

    fn prepend_child(&self, parent: &Element, child: &Element) -> Result<(), MountError> {
        let first_child = parent.first_child();
        match parent.insert_before(child, first_child.as_ref()) {
            Ok(_node) => Ok(()),
            Err(err) => Err(MountError::CouldNotInsert(js_error(err))),
        }
    }
}

impl DocumentLifecycle for WebPage {
    fn is_loading(&self) -> bool {
        is_loading_state(&self.document.ready_state())
    }

    fn on_ready(&self, task: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || task());
        if let Err(err) = self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        {
            error!("Could not listen for DOMContentLoaded! {}", js_error(err));
        }
    }
}

#[component]
fn MountedNav() -> Element {
    let fragment = use_context::<NavFragment>();
    rsx! {
        AppNav { fragment }
    }
}

fn mount_and_render(page: &WebPage) {
    let config = NavConfig::global();
    let active_id = deduce_active_id(config, page);
    let fragment = build_nav(config, active_id.as_deref());

    let host = match NAV_MOUNT.with(|mount| mount.borrow_mut().mount(page)) {
        Ok(Some(host)) => host,
        Ok(None) => return,
        Err(err) => {
            error!("Could not mount nav bar! {err}");
            return;
        }
    };

    debug!("Rendering nav bar, active entry: {active_id:?}");
    dioxus::LaunchBuilder::web()
        .with_cfg(dioxus::web::Config::new().rootelement(host))
        .with_context(fragment)
        .launch(MountedNav);
}

/// Mounts the nav bar now, or once the DOM is parsed.
pub fn install() {
    let page = match WebPage::from_window() {
        Some(page) => page,
        None => {
            warn!("No window or document, nav bar not installed.");
            return;
        }
    };

    let ready_page = page.clone();
    let run = run_when_ready(&page, move || mount_and_render(&ready_page));
    debug!("Nav install: {run:?}");
}
