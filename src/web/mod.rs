// src/web/mod.rs
//
// Browser bindings for the pure pieces: DOM mounting, fetch, clipboard,
// timers, localStorage and media queries.

pub mod copy;
pub mod dom;
pub mod fetch;
pub mod theme;

use web_sys::Document;

use crate::config::SiteConfig;
use crate::error::{DictionaryError, Result};
use crate::model::Dictionary;
use crate::render::{render_dictionary, Node};
use crate::{console_error, console_warn};

/// Fetches the dictionary, renders it into the container, then wires the
/// copy-link buttons. Never fails; problems end up in the console.
pub async fn render_page(config: SiteConfig) {
    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            console_error!("Error loading JSON: {}", e);
            return;
        }
    };

    if let Err(e) = load_into(&document, &config).await {
        console_error!("Error loading JSON: {}", e);
    }

    // Buttons already in the page count too, even when loading failed.
    if let Err(e) = copy::attach_copy_handlers(&document, &config) {
        console_error!("Failed to attach copy handlers: {}", e);
    }
}

/// What a fetched body does to the dictionary container.
#[derive(Debug, Clone, PartialEq)]
pub struct MountPlan {
    /// Nodes to mount; `None` leaves the container as it was.
    pub nodes: Option<Vec<Node>>,
    /// Console warnings about the document, in order.
    pub warnings: Vec<String>,
    /// Reported once the container has been handled.
    pub error: Option<DictionaryError>,
}

/// Decides the mount for `body` without touching the page. A body that is
/// not JSON leaves the container untouched. JSON of the wrong shape empties
/// it.
pub fn plan_mount(body: &str, config: &SiteConfig) -> MountPlan {
    let dictionary = match Dictionary::from_json(body) {
        Ok(dictionary) => dictionary,
        Err(e @ DictionaryError::Shape(_)) => {
            return MountPlan {
                nodes: Some(Vec::new()),
                warnings: Vec::new(),
                error: Some(e),
            }
        }
        Err(e) => {
            return MountPlan {
                nodes: None,
                warnings: Vec::new(),
                error: Some(e),
            }
        }
    };

    let mut warnings: Vec<String> = dictionary
        .duplicate_section_ids()
        .into_iter()
        .map(|id| format!("Several sections share the id '{}'", id))
        .collect();
    warnings.extend(
        dictionary
            .duplicate_part_ids()
            .into_iter()
            .map(|id| format!("Several parts share the id '{}'", id)),
    );

    MountPlan {
        nodes: Some(render_dictionary(&dictionary, config)),
        warnings,
        error: None,
    }
}

async fn load_into(document: &Document, config: &SiteConfig) -> Result<()> {
    let container = dom::element_by_id(document, &config.container_id)?;
    let body = fetch::fetch_text(&config.data_url).await?;

    let plan = plan_mount(&body, config);
    for warning in &plan.warnings {
        console_warn!("{}", warning);
    }
    if let Some(nodes) = &plan.nodes {
        dom::mount(&container, nodes)?;
    }
    match plan.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_leaves_container_alone() {
        let plan = plan_mount("<!doctype html><p>Not found</p>", &SiteConfig::default());
        assert_eq!(plan.nodes, None);
        assert!(matches!(plan.error, Some(DictionaryError::Syntax(_))));
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn shape_error_empties_container() {
        let plan = plan_mount(r#"{"sections": {"title": "A"}}"#, &SiteConfig::default());
        assert_eq!(plan.nodes, Some(Vec::new()));
        assert!(matches!(plan.error, Some(DictionaryError::Shape(_))));
    }

    #[test]
    fn document_mounts_one_block_per_section() {
        let body = r#"{"sections":[
            {"title":"A","parts":[{"id":"albedo","title":"Albedo","content":["x"]}]},
            {"title":"B","parts":[]}
        ]}"#;
        let plan = plan_mount(body, &SiteConfig::default());
        assert_eq!(plan.error, None);
        assert!(plan.warnings.is_empty());
        let nodes = plan.nodes.unwrap();
        assert_eq!(nodes.len(), 2);
        assert!(matches!(&nodes[0], Node::Element(e) if e.attribute("id") == Some("a")));
    }

    #[test]
    fn duplicate_ids_warn_but_still_mount() {
        let body = r#"{"sections":[
            {"title":"A","parts":[{"id":"x","title":"1","content":[]}]},
            {"title":"a","parts":[{"id":"x","title":"2","content":[]}]}
        ]}"#;
        let plan = plan_mount(body, &SiteConfig::default());
        assert_eq!(plan.error, None);
        assert_eq!(
            plan.warnings,
            vec![
                "Several sections share the id 'a'".to_string(),
                "Several parts share the id 'x'".to_string(),
            ]
        );
        assert_eq!(plan.nodes.map(|n| n.len()), Some(2));
    }
}
