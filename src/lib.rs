// src/lib.rs
//
// The Climate Dictionary front end: fetches the dictionary document, renders
// it into the page, and runs the copy-link buttons and the light/dark toggle.

pub mod console;
pub mod config;
pub mod copy_link;
pub mod error;
pub mod model;
pub mod render;
pub mod theme;
pub mod wasm_api;
pub mod web;

pub use config::SiteConfig;
pub use error::{DictionaryError, Result};
pub use model::{Dictionary, Part, Section};
pub use render::{nodes_to_html, render_dictionary, Element, Node};
pub use theme::Theme;

/// Parses `json` and renders it to the markup the page would show.
pub fn render_html(json: &str, config: &SiteConfig) -> Result<String> {
    let dictionary = Dictionary::from_json(json)?;
    Ok(nodes_to_html(&render_dictionary(&dictionary, config)))
}
