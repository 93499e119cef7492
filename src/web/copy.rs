// src/web/copy.rs
//
// Browser side of the copy-link buttons: navigator.clipboard, setTimeout and
// the button element itself.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::console_warn;
use crate::copy_link::{Clipboard, CopyLabels, CopyLinkAction, CopyLinkView, RevertTimer};
use crate::error::{describe_js, DictionaryError, Result};
use crate::render::{COPY_ACTION_CLASS, COPY_URL_ATTRIBUTE};

pub struct NavigatorClipboard;

impl Clipboard for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| DictionaryError::Clipboard("no window".to_string()))?;
        let navigator = window.navigator();

        // Reached through reflection: the typed Clipboard binding is not
        // available on every web-sys feature set.
        let clipboard = js_sys::Reflect::get(&navigator, &"clipboard".into())
            .map_err(|e| DictionaryError::Clipboard(describe_js(&e)))?;
        if clipboard.is_undefined() {
            return Err(DictionaryError::Clipboard("clipboard API unavailable".to_string()));
        }
        let write_text: js_sys::Function = js_sys::Reflect::get(&clipboard, &"writeText".into())
            .map_err(|e| DictionaryError::Clipboard(describe_js(&e)))?
            .dyn_into()
            .map_err(|_| DictionaryError::Clipboard("writeText is not a function".to_string()))?;
        let promise: js_sys::Promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| DictionaryError::Clipboard(describe_js(&e)))?
            .dyn_into()
            .map_err(|_| {
                DictionaryError::Clipboard("writeText did not return a promise".to_string())
            })?;

        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| DictionaryError::Clipboard(describe_js(&e)))
    }
}

pub struct WindowTimer;

impl RevertTimer for WindowTimer {
    type Handle = i32;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<i32> {
        let window =
            web_sys::window().ok_or_else(|| DictionaryError::Dom("no window".to_string()))?;
        let callback = Closure::once_into_js(move || callback());
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
            .map_err(DictionaryError::dom)
    }

    fn cancel(&self, handle: i32) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(handle);
        }
    }
}

/// The `<button class="copy-url">`: a class toggle plus the text of its
/// inner `<span>`.
pub struct ButtonView {
    element: Element,
    copied_class: String,
}

impl CopyLinkView for ButtonView {
    fn set_copied(&self, copied: bool) {
        let classes = self.element.class_list();
        let result = if copied {
            classes.add_1(&self.copied_class)
        } else {
            classes.remove_1(&self.copied_class)
        };
        if let Err(e) = result {
            console_warn!("Could not update copy button class: {}", describe_js(&e));
        }
    }

    fn set_label(&self, label: &str) {
        match self.element.query_selector("span") {
            Ok(Some(span)) => span.set_text_content(Some(label)),
            _ => console_warn!("Copy button has no label span"),
        }
    }
}

/// Wires a click handler onto every copy-link button currently in `document`.
pub fn attach_copy_handlers(document: &Document, config: &SiteConfig) -> Result<usize> {
    let buttons = document
        .query_selector_all(&format!(".{}", COPY_ACTION_CLASS))
        .map_err(DictionaryError::dom)?;

    let labels = CopyLabels {
        idle: config.copy_label.clone(),
        copied: config.copied_label.clone(),
    };

    let mut attached = 0;
    for i in 0..buttons.length() {
        let Some(element) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };

        let view = ButtonView {
            element: element.clone(),
            copied_class: config.copied_class.clone(),
        };
        let action = Rc::new(RefCell::new(CopyLinkAction::new(
            element.get_attribute(COPY_URL_ATTRIBUTE),
            labels.clone(),
            config.copied_revert_ms,
            view,
            WindowTimer,
        )));

        let on_click = Closure::<dyn FnMut()>::new(move || {
            let action = Rc::clone(&action);
            spawn_local(async move {
                // Failures are already reported by `activate`.
                let _ = CopyLinkAction::activate(&action, &NavigatorClipboard).await;
            });
        });
        element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(DictionaryError::dom)?;
        on_click.forget();
        attached += 1;
    }
    Ok(attached)
}
