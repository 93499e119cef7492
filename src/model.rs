// src/model.rs
//
// The dictionary document: sections (one per letter) holding parts (one per
// definition). Read-only once parsed.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use crate::error::{DictionaryError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dictionary {
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    pub title: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, deserialize_with = "non_empty")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub phonetic: Option<String>,
    pub content: Vec<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub source_link: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub source: Option<String>,
}

/// `""` and `null` both count as absent, the way the page has always treated
/// falsy optional fields.
fn non_empty<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl Dictionary {
    /// Parses a document body. A body that is not JSON yields
    /// [`DictionaryError::Syntax`]; JSON of the wrong shape yields
    /// [`DictionaryError::Shape`].
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| DictionaryError::Syntax(e.to_string()))?;
        serde_json::from_value(value).map_err(|e| DictionaryError::Shape(e.to_string()))
    }

    pub fn part_count(&self) -> usize {
        self.sections.iter().map(|s| s.parts.len()).sum()
    }

    /// Section anchors that more than one section lowers to.
    pub fn duplicate_section_ids(&self) -> Vec<String> {
        duplicates(self.sections.iter().map(Section::anchor_id))
    }

    /// Part ids used more than once across the whole dictionary.
    pub fn duplicate_part_ids(&self) -> Vec<String> {
        duplicates(
            self.sections
                .iter()
                .flat_map(|s| s.parts.iter())
                .filter_map(|p| p.id.clone()),
        )
    }
}

impl Section {
    /// Element id of the section block, e.g. `"A"` -> `"a"`.
    pub fn anchor_id(&self) -> String {
        self.title.to_lowercase()
    }
}

fn duplicates(ids: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut order = Vec::new();
    for id in ids {
        let count = seen.entry(id.clone()).or_insert(0);
        *count += 1;
        if *count == 2 {
            order.push(id);
        }
    }
    order
}
