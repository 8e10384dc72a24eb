use super::{container, empty_state, optional_text, paragraph, section, section_header};
use crate::html::{el, Element};
use landly_core::props::{self, Props};
use landly_core::Phrases;

pub(super) fn render(props: &Props, phrases: &Phrases) -> Element {
    let title = props::string_or(props, "title", phrases.features_title);
    let items = props::object_list(props.get("items"));

    let body = if items.is_empty() {
        empty_state(phrases.features_empty)
    } else {
        el("div")
            .class("landing-features__grid")
            .children(items.into_iter().map(feature_card))
    };

    section("features").child(container().child(section_header(title)).child(body))
}

fn feature_card(item: &Props) -> Element {
    let icon = props::string_or(item, "icon", "");
    let title = props::string_or(item, "title", "");
    let description = props::string_or(item, "description", "");

    el("article")
        .class("landing-card landing-feature-card")
        .maybe(optional_text("div", "landing-feature-icon", icon))
        .child(el("h3").text(title))
        .maybe(paragraph("landing-feature-text", description))
}
