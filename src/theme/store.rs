// src/theme/store.rs

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::Theme;
use crate::error::{DictionaryError, Result};

/// Durable home of the user's explicit theme choice.
pub trait ThemeStore {
    /// The raw stored value, if any. Unknown values are the caller's problem.
    fn get(&self) -> Result<Option<String>>;
    fn set(&self, theme: Theme) -> Result<()>;
}

/// In-memory store. Clones share the same slot, so a test can keep one handle
/// and give the other to a controller.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Rc<RefCell<Option<String>>>,
    deny_writes: Rc<Cell<bool>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        let store = Self::default();
        *store.value.borrow_mut() = Some(value.to_string());
        store
    }

    /// Makes every later `set` fail, like a browser with storage disabled.
    pub fn deny_writes(&self) {
        self.deny_writes.set(true);
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn set(&self, theme: Theme) -> Result<()> {
        if self.deny_writes.get() {
            return Err(DictionaryError::Storage("writes denied".to_string()));
        }
        *self.value.borrow_mut() = Some(theme.as_str().to_string());
        Ok(())
    }
}
