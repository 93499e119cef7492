// src/render/mod.rs
//
// Dictionary rendering: document -> node descriptors -> HTML or live DOM.

mod dictionary;
mod icons;
mod node;

pub use dictionary::{
    render_dictionary, render_part, render_section, COPY_ACTION_CLASS, COPY_URL_ATTRIBUTE,
};
pub use node::{nodes_to_html, Element, Node};
