// src/wasm_api.rs
//
// Functions exported to the page script.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::SiteConfig;
use crate::error::{DictionaryError, Result};
use crate::theme::{start_theme, ThemeController};
use crate::web::theme::{AttributeDisplay, LocalStorageStore, MediaPreference};
use crate::web::{dom, render_page};
use crate::{console_error, render_html};

type PageTheme = ThemeController<LocalStorageStore, AttributeDisplay>;

struct Site {
    config: SiteConfig,
    /// `None` when theme setup failed at boot.
    theme: Option<Rc<RefCell<PageTheme>>>,
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Starts the page: applies the theme right away and renders the dictionary
/// once the DOM is ready. `config` may be omitted.
#[wasm_bindgen]
pub fn boot(config: JsValue) -> std::result::Result<(), JsValue> {
    boot_inner(config).map_err(JsValue::from)
}

fn boot_inner(config: JsValue) -> Result<()> {
    if SITE.with(|site| site.borrow().is_some()) {
        return Err(DictionaryError::AlreadyBooted);
    }
    let config = SiteConfig::from_js(config)?;
    SITE.with(|site| {
        *site.borrow_mut() = Some(Site {
            config: config.clone(),
            theme: None,
        })
    });

    let theme_config = config.clone();
    boot_with(
        move || {
            let document = dom::document()?;
            dom::when_ready(&document, move || spawn_local(render_page(config)))
        },
        move || {
            let theme = setup_theme(&theme_config)?;
            SITE.with(|site| {
                if let Some(site) = site.borrow_mut().as_mut() {
                    site.theme = Some(theme);
                }
            });
            Ok(())
        },
    );
    Ok(())
}

/// Runs the two boot flows independently: the dictionary render is scheduled
/// first and theme setup runs after it. A failure in either is logged and
/// does not stop the other.
fn boot_with(
    schedule_render: impl FnOnce() -> Result<()>,
    setup_theme: impl FnOnce() -> Result<()>,
) {
    if let Err(e) = schedule_render() {
        console_error!("Failed to schedule dictionary render: {}", e);
    }
    if let Err(e) = setup_theme() {
        console_error!("Failed to set up theme: {}", e);
    }
}

fn setup_theme(config: &SiteConfig) -> Result<Rc<RefCell<PageTheme>>> {
    let document = dom::document()?;
    let theme_container = dom::element_by_id(&document, &config.theme_container_id)?;
    let controller = ThemeController::new(
        LocalStorageStore::new(&config.storage_key),
        AttributeDisplay::new(theme_container, &config.theme_attribute),
    )
    .follow_platform_after_toggle(config.follow_platform_after_toggle);
    let theme = Rc::new(RefCell::new(controller));
    start_theme(&theme, &MediaPreference)?;
    Ok(theme)
}

/// Flips between light and dark and remembers the choice. Returns the new
/// theme name.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> std::result::Result<String, JsValue> {
    let theme = SITE
        .with(|site| site.borrow().as_ref().map(|s| s.theme.clone()))
        .ok_or(DictionaryError::NotBooted)?
        .ok_or(DictionaryError::ThemeUnavailable)?;

    let result = theme.borrow_mut().toggle();
    match result {
        Ok(next) => Ok(next.as_str().to_string()),
        Err(e) => {
            console_error!("Failed to toggle theme: {}", e);
            Err(e.into())
        }
    }
}

/// Renders a dictionary document to HTML without touching the page. Uses the
/// booted configuration when there is one.
#[wasm_bindgen(js_name = renderToHtml)]
pub fn render_to_html(json: &str) -> std::result::Result<String, JsValue> {
    let config = SITE
        .with(|site| site.borrow().as_ref().map(|s| s.config.clone()))
        .unwrap_or_default();
    render_html(json, &config).map_err(JsValue::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn theme_failure_does_not_block_render() {
        let rendered = Cell::new(false);
        boot_with(
            || {
                rendered.set(true);
                Ok(())
            },
            || Err(DictionaryError::MissingElement("theme-container".to_string())),
        );
        assert!(rendered.get());
    }

    #[test]
    fn render_failure_does_not_block_theme() {
        let themed = Cell::new(false);
        boot_with(
            || Err(DictionaryError::Dom("no document".to_string())),
            || {
                themed.set(true);
                Ok(())
            },
        );
        assert!(themed.get());
    }

    #[test]
    fn render_is_scheduled_before_theme_setup() {
        let order = RefCell::new(Vec::new());
        boot_with(
            || {
                order.borrow_mut().push("render");
                Ok(())
            },
            || {
                order.borrow_mut().push("theme");
                Ok(())
            },
        );
        assert_eq!(*order.borrow(), vec!["render", "theme"]);
    }
}
