//! Full HTML page around the rendered sections.

use crate::blocks;
use crate::html::{el, Element};
use landly_core::props::{self, Props};
use landly_core::{Locale, Phrases};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

const DEFAULT_PALETTE: [(&str, &str); 5] = [
    ("primary", "#2563EB"),
    ("secondary", "#7C3AED"),
    ("accent", "#F97316"),
    ("background", "#FFFFFF"),
    ("text", "#1F2937"),
];

const COLOR_PATTERN: &str = r"^(#[0-9A-Fa-f]{3,8}|[A-Za-z]{3,20}|(rgb|rgba|hsl|hsla)\([0-9.,%\s]{1,40}\))$";

fn color_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(COLOR_PATTERN).ok()).as_ref()
}

fn is_safe_color(value: &str) -> bool {
    color_pattern().map_or(false, |pattern| pattern.is_match(value))
}

/// Inline `style` value exposing the theme palette as CSS custom properties.
///
/// Values that are not plain colors fall back to the default for that slot.
pub(crate) fn palette_style(schema: &Value) -> String {
    let palette = props::as_object(schema.get("theme"))
        .and_then(|theme| props::as_object(theme.get("palette")));

    DEFAULT_PALETTE
        .into_iter()
        .map(|(slot, fallback)| {
            let color = palette
                .and_then(|p| props::non_blank(p, slot))
                .filter(|c| is_safe_color(c))
                .unwrap_or(fallback);
            format!("--landing-{}:{};", slot, color)
        })
        .collect()
}

/// Everything needed to lay out one page file
pub(crate) struct PageContext<'a> {
    pub schema: &'a Value,
    pub locale: Locale,
    /// Relative prefix from the page file back to the build root, e.g. `../`
    pub asset_prefix: &'a str,
}

pub(crate) fn render_page(page: &Props, ctx: &PageContext<'_>) -> String {
    let phrases = ctx.locale.phrases();
    let title = props::non_blank(page, "title").unwrap_or(phrases.default_page_title);
    let description = props::non_blank(page, "description");

    let head = el("head")
        .child(el("meta").attr("charset", "UTF-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(el("title").text(title))
        .maybe(description.map(|d| el("meta").attr("name", "description").attr("content", d)))
        .child(
            el("link")
                .attr("rel", "stylesheet")
                .attr("href", format!("{}styles.css", ctx.asset_prefix)),
        )
        .child(
            el("script")
                .attr("src", format!("{}analytics.js", ctx.asset_prefix))
                .attr("defer", "defer"),
        );

    let main = el("main")
        .class("landing")
        .attr("style", palette_style(ctx.schema))
        .children(sections(page, ctx.schema, phrases));

    let html = el("html")
        .attr("lang", ctx.locale.html_lang())
        .child(head)
        .child(el("body").class("landing-body").child(main));

    format!("<!DOCTYPE html>\n{}\n", html.render())
}

fn sections(page: &Props, schema: &Value, phrases: &Phrases) -> Vec<Element> {
    let blocks = page.get("blocks").and_then(Value::as_array);
    match blocks {
        Some(blocks) if !blocks.is_empty() => blocks
            .iter()
            .map(|block| blocks::render_block(block, schema, phrases))
            .collect(),
        _ => vec![el("section")
            .class("landing-section landing-section--empty")
            .attr("data-empty-state", "true")
            .child(
                el("div")
                    .class("landing-container")
                    .child(el("div").class("landing-empty-state").text(phrases.empty_page)),
            )],
    }
}
