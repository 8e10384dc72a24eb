//! Section templates, one per supported block type.
//!
//! Every block produces exactly one `<section>` carrying a `data-block`
//! attribute, including blocks the renderer has no template for.

mod cta;
mod faq;
mod features;
mod hero;
mod pricing;
mod testimonials;

use crate::html::{el, safe_url, Element};
use landly_core::props::{self, Props};
use landly_core::{BlockKind, Phrases};
use serde_json::Value;

/// Render one block of a page. `schema` is the whole document, used for
/// schema-level settings such as payment defaults.
pub fn render_block(block: &Value, schema: &Value, phrases: &Phrases) -> Element {
    let empty = Props::new();
    let block_props = props::as_object(block.get("props")).unwrap_or(&empty);

    match BlockKind::of_block(block) {
        BlockKind::Hero => hero::render(block_props, phrases),
        BlockKind::Features => features::render(block_props, phrases),
        BlockKind::Pricing => {
            let payment = props::as_object(schema.get("payment"));
            pricing::render(block_props, payment, phrases)
        }
        BlockKind::Cta => cta::render(block_props, phrases),
        BlockKind::Testimonials => testimonials::render(block_props, phrases),
        BlockKind::Faq => faq::render(block_props, phrases),
        BlockKind::Unsupported(name) => unsupported(&name, phrases),
    }
}

fn unsupported(name: &str, phrases: &Phrases) -> Element {
    let label = if name.is_empty() { "unknown" } else { name };
    el("section")
        .class("landing-section landing-section--unsupported")
        .attr("data-block", label)
        .child(
            container().child(
                el("div")
                    .class("landing-empty-state landing-unsupported")
                    .text(phrases.unsupported_block(label)),
            ),
        )
}

pub(crate) fn section(kind: &str) -> Element {
    el("section")
        .class(format!("landing-section landing-section--{}", kind))
        .attr("data-block", kind)
}

pub(crate) fn container() -> Element {
    el("div").class("landing-container")
}

pub(crate) fn section_header(title: &str) -> Element {
    el("div")
        .class("landing-section-header")
        .child(el("h2").class("landing-section-title").text(title))
}

pub(crate) fn empty_state(message: &str) -> Element {
    el("div").class("landing-empty-state").text(message)
}

/// Safe `href` for the string under `key`, `#` when missing or rejected
pub(crate) fn link_target(props: &Props, key: &str) -> String {
    props::get_str(props, key)
        .and_then(safe_url)
        .unwrap_or_else(|| "#".to_string())
}

/// `<tag class=..>text</tag>` when the text is not blank
pub(crate) fn optional_text(tag: &'static str, class: &'static str, text: &str) -> Option<Element> {
    (!text.trim().is_empty()).then(|| el(tag).class(class).text(text))
}

pub(crate) fn paragraph(class: &'static str, text: &str) -> Option<Element> {
    optional_text("p", class, text)
}
