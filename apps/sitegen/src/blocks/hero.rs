use super::{container, link_target, optional_text, paragraph, section};
use crate::html::{el, safe_url, Element};
use landly_core::props::{self, Props};
use landly_core::Phrases;

pub(super) fn render(props: &Props, phrases: &Phrases) -> Element {
    let headline = props::non_blank(props, "headline").unwrap_or(phrases.hero_headline);
    let subheadline = props::string_or(props, "subheadline", "");
    let eyebrow = props::string_or(props, "eyebrow", phrases.hero_eyebrow);
    let cta_text = props::string_or(props, "ctaText", "");
    let secondary_text = props::string_or(props, "secondaryCtaText", phrases.hero_secondary_cta);
    let image = props::get_str(props, "image").and_then(safe_url);
    let image_alt = props::string_or(props, "imageAlt", headline);

    let mut actions = el("div").class("landing-actions landing-actions--hero");
    if !cta_text.trim().is_empty() {
        actions = actions.child(
            el("a")
                .class("landing-button landing-button--primary")
                .attr("href", link_target(props, "ctaUrl"))
                .attr("data-track", "cta_click")
                .text(cta_text),
        );
    }
    if !secondary_text.trim().is_empty() {
        actions = actions.child(
            el("a")
                .class("landing-button landing-button--ghost")
                .attr("href", link_target(props, "secondaryCtaUrl"))
                .attr("data-track", "cta_secondary")
                .text(secondary_text),
        );
    }

    let content = el("div")
        .class("landing-hero-content")
        .maybe(optional_text("span", "landing-eyebrow", eyebrow))
        .child(el("h1").class("landing-hero-title").text(headline))
        .maybe(paragraph("landing-hero-subtitle", subheadline))
        .child(actions);

    let media = image.map(|src| {
        el("div").class("landing-hero-media").child(
            el("div")
                .class("landing-hero-media-card")
                .child(el("img").attr("src", src).attr("alt", image_alt).attr("loading", "lazy")),
        )
    });

    section("hero").child(el("div").class("landing-hero-overlay")).child(
        container()
            .child(topbar(props, phrases))
            .child(el("div").class("landing-hero-grid").child(content).maybe(media)),
    )
}

fn topbar(props: &Props, phrases: &Phrases) -> Element {
    let brand = props::string_or(props, "brand", phrases.brand);
    let action_text = props::string_or(props, "navActionText", phrases.nav_action);

    let mut nav_items = props::string_list(props.get("navItems"));
    if nav_items.is_empty() {
        nav_items = phrases.nav_items.to_vec();
    }

    let nav = el("nav").class("landing-nav").children(
        nav_items
            .into_iter()
            .filter(|item| !item.trim().is_empty())
            .map(|item| el("a").attr("href", "#").text(item)),
    );

    el("div")
        .class("landing-topbar")
        .child(el("span").class("landing-brand").text(brand))
        .child(nav)
        .maybe((!action_text.trim().is_empty()).then(|| {
            el("a")
                .class("landing-nav-action")
                .attr("href", link_target(props, "navActionUrl"))
                .text(action_text)
        }))
}
