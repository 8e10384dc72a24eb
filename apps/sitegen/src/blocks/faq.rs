use super::{container, empty_state, optional_text, section, section_header};
use crate::html::{el, Element};
use landly_core::props::{self, Props};
use landly_core::Phrases;

pub(super) fn render(props: &Props, phrases: &Phrases) -> Element {
    let title = props::string_or(props, "title", phrases.faq_title);
    let items = props::object_list(props.get("items"));

    let body = if items.is_empty() {
        empty_state(phrases.faq_empty)
    } else {
        el("div").class("landing-faq__list").children(items.into_iter().map(|item| {
            let answer = props::string_or(item, "answer", "");
            el("div")
                .class("faq-item")
                .child(el("div").class("faq-question").text(props::string_or(item, "question", "")))
                .maybe(optional_text("div", "faq-answer", answer))
        }))
    };

    section("faq").child(container().child(section_header(title)).child(body))
}
