use super::{container, empty_state, section, section_header};
use crate::html::{el, Element};
use landly_core::props::{self, Props};
use landly_core::Phrases;

pub(super) fn render(props: &Props, phrases: &Phrases) -> Element {
    let title = props::string_or(props, "title", phrases.testimonials_title);
    let items = props::object_list(props.get("items"));

    let body = if items.is_empty() {
        empty_state(phrases.testimonials_empty)
    } else {
        el("div")
            .class("landing-testimonials__grid")
            .children(items.into_iter().map(testimonial_card))
    };

    section("testimonials").child(container().child(section_header(title)).child(body))
}

fn testimonial_card(item: &Props) -> Element {
    let text = props::string_or(item, "text", "");
    let author = props::string_or(item, "author", "");
    let role = props::string_or(item, "role", "");
    let rating = props::scalar_text(item, "rating").filter(|r| !r.trim().is_empty());

    el("article")
        .class("landing-card landing-testimonial-card")
        .maybe((!text.trim().is_empty()).then(|| {
            el("p")
                .class("landing-testimonial-quote")
                .text(format!("“{}”", text))
        }))
        .child(
            el("div")
                .class("landing-testimonial-author")
                .maybe((!author.trim().is_empty()).then(|| el("strong").text(author)))
                .maybe((!role.trim().is_empty()).then(|| el("span").text(role))),
        )
        .maybe(rating.map(|r| {
            el("div")
                .class("landing-testimonial-rating")
                .text(format!("⭐ {}", r))
        }))
}
