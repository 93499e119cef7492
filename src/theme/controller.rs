// src/theme/controller.rs

use std::cell::RefCell;
use std::rc::Rc;

use super::{Theme, ThemeStore};
use crate::error::Result;
use crate::{console_error, console_warn};

/// Where the active theme is shown (the `data-theme` attribute in the page).
pub trait ThemeDisplay {
    /// Raw value currently displayed, if any.
    fn current(&self) -> Option<String>;
    /// Shows `value` as is, even when it is not a known theme name.
    fn apply_value(&self, value: &str) -> Result<()>;

    fn apply(&self, theme: Theme) -> Result<()> {
        self.apply_value(theme.as_str())
    }
}

/// The platform color-scheme preference.
pub trait PreferenceSource {
    /// `None` when the platform does not report a color-scheme preference.
    fn current(&self) -> Option<Theme>;
    /// Registers `on_change` for every later preference change. The
    /// registration is never removed.
    fn subscribe(&self, on_change: Box<dyn FnMut(Theme)>) -> Result<()>;
}

pub struct ThemeController<S, D> {
    store: S,
    display: D,
    user_toggled: bool,
    follow_platform_after_toggle: bool,
}

impl<S: ThemeStore, D: ThemeDisplay> ThemeController<S, D> {
    pub fn new(store: S, display: D) -> Self {
        ThemeController {
            store,
            display,
            user_toggled: false,
            follow_platform_after_toggle: true,
        }
    }

    pub fn follow_platform_after_toggle(mut self, follow: bool) -> Self {
        self.follow_platform_after_toggle = follow;
        self
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn stored_value(&self) -> Option<String> {
        match self.store.get() {
            Ok(raw) => raw,
            Err(e) => {
                console_warn!("Could not read stored theme: {}", e);
                None
            }
        }
    }

    /// Applies the initial theme. Returns the applied theme (if any) and
    /// whether platform preference changes should be followed from now on.
    ///
    /// A stored value always wins and turns off following, even when it is
    /// not a theme this crate knows; it is shown as stored. The platform
    /// preference only fills in when nothing was stored.
    pub fn init(&mut self, preference: Option<Theme>) -> Result<(Option<Theme>, bool)> {
        if let Some(raw) = self.stored_value() {
            return match raw.parse::<Theme>() {
                Ok(theme) => {
                    self.display.apply(theme)?;
                    Ok((Some(theme), false))
                }
                Err(e) => {
                    console_warn!("Applying stored theme as is: {}", e);
                    self.display.apply_value(&raw)?;
                    Ok((None, false))
                }
            };
        }
        if let Some(theme) = preference {
            self.display.apply(theme)?;
        }
        Ok((preference, preference.is_some()))
    }

    pub fn preference_changed(&mut self, theme: Theme) -> Result<()> {
        if self.user_toggled && !self.follow_platform_after_toggle {
            return Ok(());
        }
        self.display.apply(theme)
    }

    /// Flips the displayed theme and persists the new one. If persisting
    /// fails the displayed theme has already changed.
    pub fn toggle(&mut self) -> Result<Theme> {
        let current = self.display.current().and_then(|raw| raw.parse::<Theme>().ok());
        let next = Theme::toggled(current);
        self.display.apply(next)?;
        self.user_toggled = true;
        self.store.set(next)?;
        Ok(next)
    }
}

/// Initializes `controller` and, when no theme was stored and the platform
/// reports a preference, keeps it in sync with preference changes.
pub fn start_theme<S, D, P>(
    controller: &Rc<RefCell<ThemeController<S, D>>>,
    source: &P,
) -> Result<Option<Theme>>
where
    S: ThemeStore + 'static,
    D: ThemeDisplay + 'static,
    P: PreferenceSource,
{
    let (initial, follow) = controller.borrow_mut().init(source.current())?;
    if follow {
        let controller = Rc::clone(controller);
        source.subscribe(Box::new(move |theme| {
            if let Err(e) = controller.borrow_mut().preference_changed(theme) {
                console_error!("Failed to apply theme: {}", e);
            }
        }))?;
    }
    Ok(initial)
}
