use super::{container, empty_state, optional_text, section, section_header};
use crate::html::{el, safe_url, Element};
use landly_core::props::{self, Props};
use landly_core::Phrases;

/// Button defaults taken from the schema-level `payment` object
struct PlanDefaults<'a> {
    button_text: &'a str,
    url: &'a str,
}

pub(super) fn render(props: &Props, payment: Option<&Props>, phrases: &Phrases) -> Element {
    let title = props::string_or(props, "title", phrases.pricing_title);
    let plans = props::object_list(props.get("plans"));
    let defaults = PlanDefaults {
        button_text: payment
            .and_then(|p| props::non_blank(p, "buttonText"))
            .unwrap_or(phrases.pricing_button),
        url: payment.and_then(|p| props::non_blank(p, "url")).unwrap_or(""),
    };

    let body = if plans.is_empty() {
        empty_state(phrases.pricing_empty)
    } else {
        el("div")
            .class("landing-pricing__grid")
            .children(plans.into_iter().map(|plan| plan_card(plan, &defaults)))
    };

    section("pricing").child(container().child(section_header(title)).child(body))
}

fn plan_card(plan: &Props, defaults: &PlanDefaults<'_>) -> Element {
    let featured = props::flag(plan, "featured");
    let name = props::string_or(plan, "name", "");
    let price = props::scalar_text(plan, "price").unwrap_or_default();
    let currency = props::string_or(plan, "currency", "");
    let period = props::string_or(plan, "period", "");
    let description = props::string_or(plan, "description", "");
    let features = props::string_list(plan.get("features"));
    let button_text = props::non_blank(plan, "buttonText").unwrap_or(defaults.button_text);
    let button_url = props::non_blank(plan, "url").unwrap_or(defaults.url);

    let class = if featured {
        "landing-card pricing-card pricing-card--featured"
    } else {
        "landing-card pricing-card"
    };

    let price_line = el("div")
        .class("pricing-price")
        .child(el("span").class("pricing-price__value").text(format!("{}{}", price, currency)))
        .maybe((!period.trim().is_empty()).then(|| {
            el("span")
                .class("pricing-price__period")
                .text(format!("/{}", period))
        }));

    let feature_list = (!features.is_empty()).then(|| {
        el("ul").class("pricing-features").children(features.into_iter().map(|feature| {
            el("li")
                .class("pricing-feature")
                .child(el("span").class("pricing-feature__icon").text("✓"))
                .child(el("span").text(feature))
        }))
    });

    // a plan without a usable target still gets a visible, inert button
    let action = match safe_url(button_url) {
        Some(href) => el("a")
            .class("landing-button landing-button--primary pricing-action")
            .attr("href", href)
            .attr("target", "_blank")
            .attr("rel", "noopener")
            .attr("data-track", "pay_click")
            .text(button_text),
        None => el("button")
            .class("landing-button landing-button--primary pricing-action")
            .attr("type", "button")
            .text(button_text),
    };

    el("article")
        .class(class)
        .attr("data-featured", if featured { "true" } else { "false" })
        .child(el("h3").class("pricing-name").text(name))
        .child(price_line)
        .maybe(optional_text("p", "pricing-description", description))
        .maybe(feature_list)
        .child(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use landly_core::Locale;
    use serde_json::{json, Value};

    fn render_with(props: Value, payment: Option<Value>) -> String {
        let payment = payment.and_then(|p| p.as_object().cloned());
        render(props.as_object().unwrap(), payment.as_ref(), Locale::En.phrases()).render()
    }

    #[test]
    fn plans_fall_back_to_payment_defaults() {
        let html = render_with(
            json!({ "plans": [{ "name": "Basic", "price": "990", "currency": "₽", "period": "month" }] }),
            Some(json!({ "url": "https://pay.example/checkout", "buttonText": "Pay" })),
        );
        assert!(html.contains("<h3 class=\"pricing-name\">Basic</h3>"));
        assert!(html.contains("990₽"));
        assert!(html.contains("/month"));
        assert!(html.contains("href=\"https://pay.example/checkout\""));
        assert!(html.contains("data-track=\"pay_click\">Pay</a>"));
    }

    #[test]
    fn plan_values_override_payment_defaults() {
        let html = render_with(
            json!({ "plans": [{ "name": "Pro", "price": 49, "url": "https://pro.example", "buttonText": "Go Pro" }] }),
            Some(json!({ "url": "https://pay.example", "buttonText": "Pay" })),
        );
        assert!(html.contains("href=\"https://pro.example\""));
        assert!(html.contains(">Go Pro</a>"));
        assert!(html.contains(">49<"));
        assert!(!html.contains("pay.example"));
    }

    #[test]
    fn missing_url_renders_inert_button() {
        let html = render_with(json!({ "plans": [{ "name": "Free" }] }), None);
        assert!(html.contains("<button class=\"landing-button landing-button--primary pricing-action\" type=\"button\">"));
        assert!(html.contains(Locale::En.phrases().pricing_button));
        assert!(!html.contains("pay_click"));
    }

    #[test]
    fn featured_plan_is_marked() {
        let html = render_with(
            json!({ "plans": [
                { "name": "A", "featured": true, "features": ["One", "Two"] },
                { "name": "B", "featured": "false" }
            ] }),
            None,
        );
        assert_eq!(html.matches("pricing-card--featured").count(), 1);
        assert!(html.contains("data-featured=\"true\""));
        assert!(html.contains("data-featured=\"false\""));
        assert_eq!(html.matches("class=\"pricing-feature\"").count(), 2);
    }
}
