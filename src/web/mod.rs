// SPDX-License-Identifier: MPL-2.0
//! Browser host for the page behaviors.
//!
//! [`WebDom`] implements [`Dom`] over `web-sys`, [`PerformanceClock`] reads
//! `performance.now()`, and [`mount`] runs setup once the document is parsed
//! and wires `gloo` event listeners into [`Page::dispatch`].
//!
//! Mutations that the browser rejects are logged at debug level and skipped;
//! nothing in here panics.

use crate::app::{DomEvent, Page};
use crate::clock::Clock;
use crate::config::Config;
use crate::dom::{Dom, Layout, Selector};
use crate::error::{Error, Result};
use crate::ui::Dispatch;
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlImageElement, KeyboardEvent, NodeList, Performance,
    ScrollBehavior, ScrollToOptions, Window,
};

fn js_error(context: &str, err: &JsValue) -> Error {
    Error::Dom(format!("{context}: {err:?}"))
}

fn report<T>(result: std::result::Result<T, JsValue>, context: &str) {
    if let Err(err) = result {
        log::debug!("{context} failed: {err:?}");
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The live document of the current window.
#[derive(Debug, Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| Error::Dom("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| Error::Dom("window has no document".into()))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn query_all(&self, scope: Option<&Element>, selector: &Selector) -> Result<Vec<Element>> {
        let list = match scope {
            Some(scope) => scope.query_selector_all(selector.as_str()),
            None => self.document.query_selector_all(selector.as_str()),
        }
        .map_err(|err| js_error(selector.as_str(), &err))?;
        Ok(elements(&list))
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &web_sys::Node = node;
        ancestor.contains(Some(node))
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        report(node.class_list().add_1(class), "classList.add");
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        report(node.class_list().remove_1(class), "classList.remove");
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        report(node.set_attribute(name, value), "setAttribute");
    }

    fn remove_attribute(&mut self, node: &Element, name: &str) {
        report(node.remove_attribute(name), "removeAttribute");
    }

    fn set_style(&mut self, node: &Element, property: &str, value: Option<&str>) {
        let Some(html) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = html.style();
        match value {
            Some(value) => report(style.set_property(property, value), "style.setProperty"),
            None => report(style.remove_property(property), "style.removeProperty"),
        }
    }

    fn layout(&self, node: &Element) -> Layout {
        let offset_width = node
            .dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| f64::from(html.offset_width()));
        Layout {
            offset_width,
            client_width: f64::from(node.client_width()),
            scroll_width: f64::from(node.scroll_width()),
            scroll_left: f64::from(node.scroll_left()),
        }
    }

    fn computed_style(&self, node: &Element, property: &str) -> Option<String> {
        self.window
            .get_computed_style(node)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value(property).ok())
            .filter(|value| !value.trim().is_empty())
    }

    fn scroll_to(&mut self, node: &Element, left: f64) {
        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(ScrollBehavior::Smooth);
        node.scroll_to_with_scroll_to_options(&options);
    }

    fn create_element(&mut self, tag: &str) -> Result<Element> {
        self.document
            .create_element(tag)
            .map_err(|err| js_error("createElement", &err))
    }

    fn insert_after(&mut self, reference: &Element, node: &Element) -> bool {
        let Some(parent) = reference.parent_node() else {
            return false;
        };
        let next = reference.next_sibling();
        match parent.insert_before(node, next.as_ref()) {
            Ok(_) => true,
            Err(err) => {
                log::debug!("insertBefore failed: {err:?}");
                false
            }
        }
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }

    fn is_image_complete(&self, node: &Element) -> bool {
        node.dyn_ref::<HtmlImageElement>()
            .is_some_and(HtmlImageElement::complete)
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }
}

/// [`Clock`] backed by the high-resolution `performance.now()` timer.
#[derive(Debug, Clone)]
pub struct PerformanceClock {
    performance: Performance,
}

impl PerformanceClock {
    pub fn new(window: &Window) -> Result<Self> {
        let performance = window
            .performance()
            .ok_or_else(|| Error::Dom("performance timer unavailable".into()))?;
        Ok(Self { performance })
    }
}

impl Clock for PerformanceClock {
    fn now(&self) -> Duration {
        Duration::from_secs_f64(self.performance.now().max(0.0) / 1000.0)
    }
}

struct Host {
    dom: WebDom,
    page: Page<Element, PerformanceClock>,
}

type SharedHost = Rc<RefCell<Host>>;

/// Routes one event; re-entrant deliveries are dropped.
fn deliver(host: &SharedHost, event: DomEvent<Element>) -> Dispatch {
    let Ok(mut host) = host.try_borrow_mut() else {
        log::debug!("re-entrant {} ignored", event.kind());
        return Dispatch::default();
    };
    let Host { dom, page } = &mut *host;
    page.dispatch(dom, event)
}

/// Applies the routing outcome to the original event.
fn apply(event: &Event, outcome: Dispatch) {
    if outcome.stop_propagation {
        event.stop_propagation();
    }
    if outcome.prevent_default {
        event.prevent_default();
    }
}

fn event_target(event: &Event) -> Option<Element> {
    event.target().and_then(|target| target.dyn_into::<Element>().ok())
}

/// `document.readyState` while the document is still being parsed.
fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Click listener on an arrow, the toggle or a caret.
fn control_click(host: &SharedHost, control: &Element) -> EventListener {
    let shared = Rc::clone(host);
    let node = control.clone();
    EventListener::new_with_options(
        control,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            apply(event, deliver(&shared, DomEvent::ControlClick(node.clone())));
        },
    )
}

/// Keydown listener on a caret.
fn caret_key_down(host: &SharedHost, caret: &Element) -> EventListener {
    let shared = Rc::clone(host);
    let node = caret.clone();
    EventListener::new_with_options(
        caret,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let control = node.clone();
            let key = keyboard.key();
            apply(event, deliver(&shared, DomEvent::ControlKeyDown { control, key }));
        },
    )
}

struct Mounted {
    _host: SharedHost,
    _listeners: Vec<EventListener>,
}

fn install(config: &Config) -> Result<Mounted> {
    let mut dom = WebDom::new()?;
    let clock = PerformanceClock::new(dom.window())?;
    let page = Page::setup(&mut dom, config, clock)?;

    let tracks: Vec<Element> = page.galleries().iter().map(|g| g.track().clone()).collect();
    let arrows: Vec<Element> = page
        .galleries()
        .iter()
        .flat_map(|g| g.left_arrow().into_iter().chain(g.right_arrow()))
        .cloned()
        .collect();
    let images: Vec<Element> = page
        .images()
        .iter()
        .filter(|entry| !entry.is_loaded())
        .map(|entry| entry.image().clone())
        .collect();
    let toggle = page.nav().map(|nav| nav.toggle().clone());
    let (items, carets): (Vec<Element>, Vec<Element>) = page
        .nav()
        .map(|nav| {
            let items = nav.submenus().iter().map(|s| s.item.clone()).collect();
            let carets = nav.submenus().iter().filter_map(|s| s.caret.clone()).collect();
            (items, carets)
        })
        .unwrap_or_default();
    let document = dom.document().clone();
    let window = dom.window().clone();

    let host: SharedHost = Rc::new(RefCell::new(Host { dom, page }));
    let mut listeners = Vec::new();

    for control in arrows.iter().chain(&toggle) {
        listeners.push(control_click(&host, control));
    }
    for caret in &carets {
        listeners.push(control_click(&host, caret));
        listeners.push(caret_key_down(&host, caret));
    }

    // Only clicks no control stopped get here.
    let shared = Rc::clone(&host);
    listeners.push(EventListener::new(&document, "click", move |event: &Event| {
        if let Some(target) = event_target(event) {
            deliver(&shared, DomEvent::DocumentClick(target));
        }
    }));

    let shared = Rc::clone(&host);
    listeners.push(EventListener::new(&window, "resize", move |_event: &Event| {
        deliver(&shared, DomEvent::Resize);
    }));

    for track in tracks {
        let shared = Rc::clone(&host);
        let node = track.clone();
        listeners.push(EventListener::new(&track, "scroll", move |_event: &Event| {
            deliver(&shared, DomEvent::Scroll(node.clone()));
        }));
        let shared = Rc::clone(&host);
        let node = track.clone();
        listeners.push(EventListener::new(&track, "scrollend", move |_event: &Event| {
            deliver(&shared, DomEvent::ScrollEnd(node.clone()));
        }));
    }

    for image in images {
        let shared = Rc::clone(&host);
        let node = image.clone();
        listeners.push(EventListener::once(&image, "load", move |_event: &Event| {
            deliver(&shared, DomEvent::ImageLoad(node));
        }));
        let shared = Rc::clone(&host);
        let node = image.clone();
        listeners.push(EventListener::once(&image, "error", move |_event: &Event| {
            deliver(&shared, DomEvent::ImageError(node));
        }));
    }

    for item in items {
        let shared = Rc::clone(&host);
        let node = item.clone();
        listeners.push(EventListener::new(&item, "mouseenter", move |_event: &Event| {
            deliver(&shared, DomEvent::MouseEnter(node.clone()));
        }));
        let shared = Rc::clone(&host);
        let node = item.clone();
        listeners.push(EventListener::new(&item, "mouseleave", move |_event: &Event| {
            deliver(&shared, DomEvent::MouseLeave(node.clone()));
        }));
    }

    log::debug!("mounted with {} listeners", listeners.len());
    Ok(Mounted {
        _host: host,
        _listeners: listeners,
    })
}

/// Handle to the page behaviors running in the browser. Dropping it removes
/// every listener; call [`MountedPage::forget`] to keep them for the lifetime
/// of the page.
pub struct MountedPage {
    slot: Rc<RefCell<Option<Mounted>>>,
    _ready: Option<EventListener>,
}

impl MountedPage {
    /// Whether setup has run.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Leaks the handle so the behaviors stay active.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl fmt::Debug for MountedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedPage")
            .field("ready", &self.is_ready())
            .finish_non_exhaustive()
    }
}

/// Runs setup now if the document is parsed, otherwise on `DOMContentLoaded`.
///
/// Errors found before setup (no window, unsupported markers when setting up
/// immediately) are returned; errors during a deferred setup are logged.
pub fn mount(config: Config) -> Result<MountedPage> {
    let document = WebDom::new()?.document().clone();
    let slot = Rc::new(RefCell::new(None));

    if !still_parsing(&document.ready_state()) {
        *slot.borrow_mut() = Some(install(&config)?);
        return Ok(MountedPage { slot, _ready: None });
    }

    config.compile_markers()?;
    let deferred = Rc::clone(&slot);
    let ready = EventListener::once(&document, "DOMContentLoaded", move |_event: &Event| {
        match install(&config) {
            Ok(mounted) => *deferred.borrow_mut() = Some(mounted),
            Err(err) => log::warn!("page setup failed: {err}"),
        }
    });
    Ok(MountedPage {
        slot,
        _ready: Some(ready),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loading_state_defers_setup() {
        assert!(still_parsing("loading"));
        assert!(!still_parsing("interactive"));
        assert!(!still_parsing("complete"));
    }
}
