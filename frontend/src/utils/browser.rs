use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, Window,
};
use yew::Callback;

use crate::config;
use crate::error::PageError;
use crate::state::visibility::SectionId;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub fn scroll_to_top() -> Result<(), PageError> {
    window()?.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}

/// Smooth-scrolls the section with the given DOM id into view.
pub fn scroll_to_section(id: &str) -> Result<(), PageError> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingSection(id.to_string()))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// A window scroll listener, removed again when dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

/// Reports the vertical scroll offset now and on every scroll event.
pub fn listen_scroll(on_scroll: Callback<f64>) -> Result<ScrollListener, PageError> {
    let window = window()?;
    let callback = Closure::<dyn Fn()>::new({
        let on_scroll = on_scroll.clone();
        move || {
            if let Some(win) = web_sys::window() {
                if let Ok(scroll_y) = win.scroll_y() {
                    on_scroll.emit(scroll_y);
                }
            }
        }
    });
    window
        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        .map_err(|e| PageError::Listener {
            event: "scroll",
            reason: PageError::describe_js(&e),
        })?;
    if let Ok(scroll_y) = window.scroll_y() {
        on_scroll.emit(scroll_y);
    }
    Ok(ScrollListener { window, callback })
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove scroll listener: {}", PageError::describe_js(&e));
        }
    }
}

/// Watches page sections and reports each one the first time it becomes visible.
/// Disconnects when dropped.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

pub fn observe_sections(
    sections: &[SectionId],
    on_seen: Callback<SectionId>,
) -> Result<SectionObserver, PageError> {
    let document = document()?;
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(section) = SectionId::from_dom_id(&target.id()) {
                    // Seen sections never go back, so stop watching them.
                    observer.unobserve(&target);
                    on_seen.emit(section);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| PageError::Observer(PageError::describe_js(&e)))?;

    for section in sections {
        match document.get_element_by_id(section.as_str()) {
            Some(element) => observer.observe(&element),
            None => log::warn!("{}", PageError::MissingSection(section.as_str().to_string())),
        }
    }
    Ok(SectionObserver { observer, _callback: callback })
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
