// src/render/dictionary.rs
//
// Dictionary -> node tree. Pure; the browser mount and `renderToHtml` both
// start from the output of `render_dictionary`.

use super::icons::{EXTERNAL_ICON, LINK_ICON};
use super::node::{Element, Node};
use crate::config::SiteConfig;
use crate::model::{Dictionary, Part, Section};

/// Class carried by every copy-link button; click handlers are attached by it.
pub const COPY_ACTION_CLASS: &str = "copy-url";
pub const COPY_URL_ATTRIBUTE: &str = "data-url";

pub fn render_dictionary(dict: &Dictionary, config: &SiteConfig) -> Vec<Node> {
    dict.sections
        .iter()
        .map(|section| render_section(section, config).into())
        .collect()
}

pub fn render_section(section: &Section, config: &SiteConfig) -> Element {
    let heading = Element::new("p").class("h2").text(section.title.clone());

    Element::new("div")
        .class("section")
        .attr("id", section.anchor_id())
        .child(heading)
        .children(section.parts.iter().map(|p| render_part(p, config).into()))
}

pub fn render_part(part: &Part, config: &SiteConfig) -> Element {
    let mut block = Element::new("div").class("part");
    if let Some(id) = &part.id {
        block = block.attr("id", id.clone());
    }
    block
        .child(primary_column(part))
        .child(secondary_column(part, config))
}

fn primary_column(part: &Part) -> Element {
    let mut title_wrap =
        Element::new("div").child(Element::new("h3").class("h2").text(part.title.clone()));
    if let Some(phonetic) = &part.phonetic {
        title_wrap = title_wrap.child(Element::new("p").class("part-info").text(phonetic.clone()));
    }

    Element::new("div")
        .class("part-content")
        .child(title_wrap)
        .children(
            part.content
                .iter()
                .map(|paragraph| Element::new("p").text(paragraph.clone()).into()),
        )
}

fn secondary_column(part: &Part, config: &SiteConfig) -> Element {
    let copy_button = Element::new("button")
        .class(COPY_ACTION_CLASS)
        .attr(COPY_URL_ATTRIBUTE, config.share_url(part.id.as_deref()))
        .attr("title", "Share this definition")
        .child(Element::new("span").text(config.copy_label.clone()))
        .text(" ")
        .child(Node::Markup(LINK_ICON));

    let mut aside = Element::new("div")
        .class("part-aside")
        .child(Element::new("p").class("h4").text("Share this definition:"))
        .child(copy_button);

    if let Some(link) = &part.source_link {
        let label = part.source.clone().unwrap_or_else(|| link.clone());
        aside = aside
            .child(Element::new("p").class("h4").text("Original source:"))
            .child(
                Element::new("a")
                    .class("has-icon")
                    .attr("href", link.clone())
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer")
                    .text(label)
                    .child(Node::Markup(EXTERNAL_ICON)),
            );
    }
    aside
}
