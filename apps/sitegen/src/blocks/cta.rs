use super::{container, link_target, paragraph, section};
use crate::html::{el, Element};
use landly_core::props::{self, Props};
use landly_core::Phrases;

pub(super) fn render(props: &Props, phrases: &Phrases) -> Element {
    let title = props::string_or(props, "title", phrases.cta_title);
    let description = props::string_or(props, "description", "");
    let button_text = props::string_or(props, "buttonText", phrases.contact_button);
    let secondary_text = props::string_or(props, "secondaryButtonText", "");

    let actions = el("div")
        .class("landing-actions")
        .child(
            el("a")
                .class("landing-button landing-button--primary")
                .attr("href", link_target(props, "buttonUrl"))
                .attr("data-track", "cta_click")
                .text(button_text),
        )
        .maybe((!secondary_text.trim().is_empty()).then(|| {
            el("a")
                .class("landing-button landing-button--secondary")
                .attr("href", link_target(props, "secondaryButtonUrl"))
                .attr("data-track", "cta_secondary")
                .text(secondary_text)
        }));

    section("cta").child(
        container().child(
            el("div")
                .class("landing-cta")
                .child(el("h2").class("landing-section-title").text(title))
                .maybe(paragraph("landing-cta-text", description))
                .child(actions),
        ),
    )
}
