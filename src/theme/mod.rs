// src/theme/mod.rs
//
// Light/dark theme: the persisted choice, the platform color-scheme
// preference, and the toggle that flips between them.

mod controller;
mod store;

pub use controller::{start_theme, PreferenceSource, ThemeController, ThemeDisplay};
pub use store::{MemoryThemeStore, ThemeStore};

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The theme a toggle moves to. Only `Dark` goes to `Light`; `Light` and
    /// an unset theme go to `Dark`.
    pub fn toggled(current: Option<Theme>) -> Theme {
        match current {
            Some(Theme::Dark) => Theme::Light,
            Some(Theme::Light) | None => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}
