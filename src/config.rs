// src/config.rs
//
// Page wiring knobs. Everything has a default matching the live site, so
// `boot()` with no argument is the normal case.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{DictionaryError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Relative path of the dictionary document.
    pub data_url: String,
    /// Share links are `<share_base_url>#<part id>`.
    pub share_base_url: String,
    pub container_id: String,
    pub theme_container_id: String,
    pub theme_attribute: String,
    pub storage_key: String,
    pub copy_label: String,
    pub copied_label: String,
    pub copied_class: String,
    pub copied_revert_ms: u32,
    /// Keep following OS color-scheme changes after the user toggled.
    pub follow_platform_after_toggle: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            data_url: "./data/dictionary.json".to_string(),
            share_base_url: "https://theclimatedictionary.com/".to_string(),
            container_id: "sections".to_string(),
            theme_container_id: "theme-container".to_string(),
            theme_attribute: "data-theme".to_string(),
            storage_key: "theme".to_string(),
            copy_label: "Copy link".to_string(),
            copied_label: "Copied".to_string(),
            copied_class: "copied".to_string(),
            copied_revert_ms: 2000,
            follow_platform_after_toggle: true,
        }
    }
}

impl SiteConfig {
    /// Decodes the optional object handed to `boot()`. `undefined` and `null`
    /// mean "all defaults".
    pub fn from_js(value: JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(SiteConfig::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| DictionaryError::Config(e.to_string()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| DictionaryError::Config(e.to_string()))
    }

    pub fn share_url(&self, part_id: Option<&str>) -> String {
        format!("{}#{}", self.share_base_url, part_id.unwrap_or(""))
    }
}
