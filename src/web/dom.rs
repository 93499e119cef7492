// src/web/dom.rs
//
// Materializes render output into the live document.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::error::{DictionaryError, Result};
use crate::render::Node;

pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DictionaryError::Dom("no document".to_string()))
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DictionaryError::MissingElement(id.to_string()))
}

/// Replaces every child of `container` with `nodes`.
pub fn mount(container: &Element, nodes: &[Node]) -> Result<()> {
    let document = container
        .owner_document()
        .ok_or_else(|| DictionaryError::Dom("container is detached".to_string()))?;

    container.set_text_content(None);
    for node in nodes {
        append(&document, container, node)?;
    }
    Ok(())
}

fn append(document: &Document, parent: &Element, node: &Node) -> Result<()> {
    match node {
        Node::Text(text) => {
            parent
                .append_child(&document.create_text_node(text))
                .map_err(DictionaryError::dom)?;
        }
        Node::Markup(markup) => {
            parent
                .insert_adjacent_html("beforeend", markup)
                .map_err(DictionaryError::dom)?;
        }
        Node::Element(e) => {
            let el = document.create_element(e.tag).map_err(DictionaryError::dom)?;
            if !e.classes.is_empty() {
                el.set_class_name(&e.classes.join(" "));
            }
            for (name, value) in &e.attributes {
                el.set_attribute(name, value).map_err(DictionaryError::dom)?;
            }
            for child in &e.children {
                append(document, &el, child)?;
            }
            parent.append_child(&el).map_err(DictionaryError::dom)?;
        }
    }
    Ok(())
}

/// Runs `f` now if the DOM is parsed, otherwise on `DOMContentLoaded`.
pub fn when_ready(document: &Document, f: impl FnOnce() + 'static) -> Result<()> {
    let state = js_sys::Reflect::get(document, &"readyState".into())
        .ok()
        .and_then(|v| v.as_string());
    if state.as_deref() != Some("loading") {
        f();
        return Ok(());
    }
    let callback = Closure::once_into_js(f);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(DictionaryError::dom)
}
