// src/web/theme.rs

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MediaQueryListEvent, Storage, Window};

use crate::error::{describe_js, DictionaryError, Result};
use crate::theme::{PreferenceSource, Theme, ThemeDisplay, ThemeStore};

/// `localStorage[key]`.
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: &str) -> Self {
        LocalStorageStore { key: key.to_string() }
    }

    fn storage(&self) -> Result<Storage> {
        web_sys::window()
            .ok_or_else(|| DictionaryError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| DictionaryError::Storage(describe_js(&e)))?
            .ok_or_else(|| DictionaryError::Storage("localStorage unavailable".to_string()))
    }
}

impl ThemeStore for LocalStorageStore {
    fn get(&self) -> Result<Option<String>> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| DictionaryError::Storage(describe_js(&e)))
    }

    fn set(&self, theme: Theme) -> Result<()> {
        self.storage()?
            .set_item(&self.key, theme.as_str())
            .map_err(|e| DictionaryError::Storage(describe_js(&e)))
    }
}

/// An attribute (normally `data-theme`) on the theme container.
pub struct AttributeDisplay {
    element: Element,
    attribute: String,
}

impl AttributeDisplay {
    pub fn new(element: Element, attribute: &str) -> Self {
        AttributeDisplay {
            element,
            attribute: attribute.to_string(),
        }
    }
}

impl ThemeDisplay for AttributeDisplay {
    fn current(&self) -> Option<String> {
        self.element.get_attribute(&self.attribute)
    }

    fn apply_value(&self, value: &str) -> Result<()> {
        self.element
            .set_attribute(&self.attribute, value)
            .map_err(DictionaryError::dom)
    }
}

/// `prefers-color-scheme` media queries.
pub struct MediaPreference;

fn query_matches(window: &Window, query: &str) -> bool {
    matches!(window.match_media(query), Ok(Some(list)) if list.matches())
}

impl PreferenceSource for MediaPreference {
    fn current(&self) -> Option<Theme> {
        let window = web_sys::window()?;
        if !query_matches(&window, "(prefers-color-scheme)") {
            return None;
        }
        if query_matches(&window, "(prefers-color-scheme: dark)") {
            Some(Theme::Dark)
        } else {
            Some(Theme::Light)
        }
    }

    fn subscribe(&self, on_change: Box<dyn FnMut(Theme)>) -> Result<()> {
        let window =
            web_sys::window().ok_or_else(|| DictionaryError::Dom("no window".to_string()))?;
        let on_change = Rc::new(RefCell::new(on_change));

        for theme in [Theme::Dark, Theme::Light] {
            let query = format!("(prefers-color-scheme: {})", theme);
            let list = window
                .match_media(&query)
                .map_err(DictionaryError::dom)?
                .ok_or_else(|| {
                    DictionaryError::Dom(format!("matchMedia('{}') returned null", query))
                })?;

            let on_change = Rc::clone(&on_change);
            let listener =
                Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
                    if event.matches() {
                        let mut f = on_change.borrow_mut();
                        (&mut *f)(theme);
                    }
                });
            list.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
                .map_err(DictionaryError::dom)?;
            listener.forget();
        }
        Ok(())
    }
}
