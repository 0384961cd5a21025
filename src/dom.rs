//! Browser glue: smooth scrolling, Bootstrap widget activation and the
//! optional global chart hook.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::Callback;

/// Smooth-scrolls the element with the given id into view.
pub fn scroll_to_element(id: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(element) = document.get_element_by_id(id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}

/// Re-activates Bootstrap tooltips, popovers and tabs on elements carrying
/// the trigger attributes. No-op when the `bootstrap` global is absent.
pub fn init_widget_library() {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let document = match window.document() {
        Some(document) => document,
        None => return,
    };
    let bootstrap = match js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("bootstrap")) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return,
    };

    for (trigger, widget) in [("tooltip", "Tooltip"), ("popover", "Popover"), ("tab", "Tab")] {
        if let Ok(ctor) = js_sys::Reflect::get(&bootstrap, &JsValue::from_str(widget)) {
            if let Some(ctor) = ctor.dyn_ref::<js_sys::Function>() {
                let selector = format!("[data-bs-toggle=\"{}\"]", trigger);
                activate_all(&document, &selector, ctor);
            }
        }
    }
}

fn activate_all(document: &Document, selector: &str, ctor: &js_sys::Function) {
    if let Ok(nodes) = document.query_selector_all(selector) {
        for index in 0..nodes.length() {
            if let Some(node) = nodes.item(index) {
                let args = js_sys::Array::of1(&JsValue::from(node));
                if let Err(err) = js_sys::Reflect::construct(ctor, &args) {
                    log::warn!("falha ao ativar componente {}: {:?}", selector, err);
                }
            }
        }
    }
}

/// Wraps the global `initCharts` function, when the page provides one, as an
/// injectable refresh capability.
pub fn chart_refresh_hook() -> Option<Callback<()>> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("initCharts")).ok()?;
    let hook = value.dyn_into::<js_sys::Function>().ok()?;
    Some(Callback::from(move |_| {
        if let Err(err) = hook.call0(&JsValue::NULL) {
            log::warn!("falha ao atualizar gráficos: {:?}", err);
        }
    }))
}
