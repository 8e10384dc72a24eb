//! Business-rule auto-fixes applied to structurally valid page schemas.
//!
//! Every rule only reads and writes map entries of the generic document, so
//! normalization cannot fail. Each rule is written so that its own output never
//! triggers it again, which keeps a second pass free of fixes.

use crate::ir::BlockKind;
use crate::locale::Phrases;
use crate::props::{self, Props};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Length limits and floors enforced by normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeLimits {
    /// Maximum page title length in code points
    pub title_max: usize,
    /// Maximum page description length in code points
    pub description_max: usize,
    /// Maximum hero headline length in code points
    pub headline_max: usize,
    /// Maximum hero subheadline length in code points
    pub subheadline_max: usize,
    /// Minimum number of items in a features block
    pub min_feature_items: usize,
}

impl Default for NormalizeLimits {
    fn default() -> Self {
        Self {
            title_max: 90,
            description_max: 160,
            headline_max: 90,
            subheadline_max: 160,
            min_feature_items: 3,
        }
    }
}

/// Effective payment target shared by every CTA-like block of the document
#[derive(Debug, Clone, PartialEq, Eq)]
struct PaymentDefaults {
    url: String,
    button_text: String,
}

impl PaymentDefaults {
    fn resolve(payment: Option<&Value>, phrases: &Phrases) -> Self {
        let payment = props::as_object(payment);
        let url = payment.and_then(|p| props::non_blank(p, "url")).unwrap_or("#");
        let button_text = payment
            .and_then(|p| props::non_blank(p, "buttonText"))
            .unwrap_or(phrases.contact_button);
        Self {
            url: url.to_string(),
            button_text: button_text.to_string(),
        }
    }
}

/// Apply all business rules in order and return the fix identifiers, possibly
/// with repeats. A non-object document is left untouched.
pub fn apply_business_rules(
    doc: &mut Value,
    limits: &NormalizeLimits,
    phrases: &Phrases,
) -> Vec<String> {
    let root = match doc.as_object_mut() {
        Some(root) => root,
        None => return Vec::new(),
    };

    let mut fixes = Vec::new();
    let payment = PaymentDefaults::resolve(root.get("payment"), phrases);

    let has_pages = root
        .get("pages")
        .and_then(Value::as_array)
        .map_or(false, |pages| !pages.is_empty());
    if !has_pages {
        root.insert(
            "pages".to_string(),
            json!([{ "path": "/", "title": phrases.default_page_title, "blocks": [] }]),
        );
        fixes.push("default_page_added".to_string());
    }

    if let Some(pages) = root.get_mut("pages").and_then(Value::as_array_mut) {
        for (index, page) in pages.iter_mut().enumerate() {
            let page = match page.as_object_mut() {
                Some(page) => page,
                None => continue,
            };
            fixes.extend(normalize_page_path(page, index));
            fixes.extend(fit_text(
                page,
                "title",
                limits.title_max,
                &format!("page_{}_title_truncated", index),
            ));
            fixes.extend(fit_text(
                page,
                "description",
                limits.description_max,
                &format!("page_{}_description_truncated", index),
            ));
            normalize_blocks(page, &payment, limits, phrases, &mut fixes);
        }
    }

    fixes
}

fn normalize_page_path(page: &mut Props, index: usize) -> Option<String> {
    let raw = props::get_str(page, "path").unwrap_or_default().to_string();
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        let path = if index == 0 {
            "/".to_string()
        } else {
            format!("/page-{}", index + 1)
        };
        page.insert("path".to_string(), Value::String(path));
        return Some(format!("page_{}_path_defaulted", index));
    }

    let normalized = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };
    if normalized != raw {
        page.insert("path".to_string(), Value::String(normalized));
        return Some(format!("page_{}_path_normalized", index));
    }
    None
}

/// Trim and cap a text field at `limit` code points.
///
/// Returns `reason` when the value had to be cut, `reason_trimmed` when only
/// surrounding whitespace was removed. Absent, non-string and all-whitespace
/// values are left alone.
fn fit_text(map: &mut Props, key: &str, limit: usize, reason: &str) -> Option<String> {
    let value = props::get_str(map, key)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.chars().count() > limit {
        let cut = truncate_chars(trimmed, limit);
        map.insert(key.to_string(), Value::String(cut));
        return Some(reason.to_string());
    }

    if trimmed != value {
        let trimmed = trimmed.to_string();
        map.insert(key.to_string(), Value::String(trimmed));
        return Some(format!("{}_trimmed", reason));
    }
    None
}

/// First `limit` code points, with whitespace exposed by the cut removed
pub fn truncate_chars(input: &str, limit: usize) -> String {
    let cut: String = input.chars().take(limit).collect();
    cut.trim_end().to_string()
}

fn normalize_blocks(
    page: &mut Props,
    payment: &PaymentDefaults,
    limits: &NormalizeLimits,
    phrases: &Phrases,
    fixes: &mut Vec<String>,
) {
    let blocks = match page.get_mut("blocks").and_then(Value::as_array_mut) {
        Some(blocks) => blocks,
        None => return,
    };

    for (index, block) in blocks.iter_mut().enumerate() {
        let kind = BlockKind::of_block(block);
        let block = match block.as_object_mut() {
            Some(block) => block,
            None => continue,
        };
        let mut block_props = match block.remove("props") {
            Some(Value::Object(map)) => map,
            _ => Props::new(),
        };

        match kind {
            BlockKind::Hero => {
                default_if_blank(
                    &mut block_props,
                    "ctaText",
                    &payment.button_text,
                    "hero_cta_text_defaulted",
                    fixes,
                );
                default_if_blank(
                    &mut block_props,
                    "ctaUrl",
                    &payment.url,
                    "hero_cta_url_defaulted",
                    fixes,
                );
                fixes.extend(fit_text(
                    &mut block_props,
                    "headline",
                    limits.headline_max,
                    &format!("block_{}_hero_headline_truncated", index),
                ));
                fixes.extend(fit_text(
                    &mut block_props,
                    "subheadline",
                    limits.subheadline_max,
                    &format!("block_{}_hero_subheadline_truncated", index),
                ));
            }
            BlockKind::Features => {
                fixes.extend(fill_feature_items(
                    &mut block_props,
                    limits.min_feature_items,
                    phrases,
                ));
            }
            BlockKind::Cta => {
                default_if_blank(
                    &mut block_props,
                    "buttonText",
                    &payment.button_text,
                    "cta_button_text_defaulted",
                    fixes,
                );
                default_if_blank(
                    &mut block_props,
                    "buttonUrl",
                    &payment.url,
                    "cta_button_url_defaulted",
                    fixes,
                );
            }
            BlockKind::Pricing => {
                if let Some(plans) = block_props.get_mut("plans").and_then(Value::as_array_mut) {
                    for plan in plans.iter_mut().filter_map(Value::as_object_mut) {
                        default_if_blank(
                            plan,
                            "buttonText",
                            &payment.button_text,
                            "pricing_button_text_defaulted",
                            fixes,
                        );
                        default_if_blank(
                            plan,
                            "url",
                            &payment.url,
                            "pricing_button_url_defaulted",
                            fixes,
                        );
                    }
                }
            }
            BlockKind::Testimonials | BlockKind::Faq | BlockKind::Unsupported(_) => {}
        }

        block.insert("props".to_string(), Value::Object(block_props));
    }
}

fn default_if_blank(map: &mut Props, key: &str, value: &str, fix: &str, fixes: &mut Vec<String>) {
    if props::is_blank(map, key) {
        map.insert(key.to_string(), Value::String(value.to_string()));
        fixes.push(fix.to_string());
    }
}

fn fill_feature_items(
    block_props: &mut Props,
    minimum: usize,
    phrases: &Phrases,
) -> Option<String> {
    let present = block_props
        .get("items")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    if present >= minimum {
        return None;
    }

    let mut items = match block_props.remove("items") {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    };
    let templates = &phrases.feature_templates;
    while items.len() < minimum {
        let template = &templates[items.len() % templates.len()];
        items.push(json!({
            "icon": template.icon,
            "title": template.title,
            "description": template.description,
        }));
    }
    block_props.insert("items".to_string(), Value::Array(items));
    Some("features_autofilled".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    fn run(mut doc: Value) -> (Value, Vec<String>) {
        let fixes = apply_business_rules(&mut doc, &NormalizeLimits::default(), Locale::En.phrases());
        (doc, fixes)
    }

    #[test]
    fn missing_pages_get_a_default_page() {
        let (doc, fixes) = run(json!({ "version": "1.0" }));
        assert_eq!(fixes, vec!["default_page_added"]);
        assert_eq!(doc["pages"][0]["path"], "/");
        assert_eq!(doc["pages"][0]["title"], "Landing page");
        assert_eq!(doc["pages"][0]["blocks"], json!([]));
    }

    #[test]
    fn paths_are_defaulted_by_position() {
        let (doc, fixes) = run(json!({ "pages": [{ "path": "" }, { "title": "Second" }] }));
        assert_eq!(doc["pages"][0]["path"], "/");
        assert_eq!(doc["pages"][1]["path"], "/page-2");
        assert!(fixes.contains(&"page_0_path_defaulted".to_string()));
        assert!(fixes.contains(&"page_1_path_defaulted".to_string()));
    }

    #[test]
    fn relative_and_padded_paths_are_normalized() {
        let (doc, fixes) = run(json!({ "pages": [{ "path": "/" }, { "path": "about" }, { "path": " /team " }] }));
        assert_eq!(doc["pages"][1]["path"], "/about");
        assert_eq!(doc["pages"][2]["path"], "/team");
        assert_eq!(fixes, vec!["page_1_path_normalized", "page_2_path_normalized"]);
    }

    #[test]
    fn trim_only_change_gets_trimmed_suffix() {
        let (doc, fixes) = run(json!({ "pages": [{ "path": "/", "title": "  Home  " }] }));
        assert_eq!(doc["pages"][0]["title"], "Home");
        assert_eq!(fixes, vec!["page_0_title_truncated_trimmed"]);
    }

    #[test]
    fn truncation_counts_code_points() {
        let title = "я".repeat(100);
        let (doc, fixes) = run(json!({ "pages": [{ "path": "/", "title": title }] }));
        assert_eq!(doc["pages"][0]["title"].as_str().map(|t| t.chars().count()), Some(90));
        assert_eq!(fixes, vec!["page_0_title_truncated"]);
    }

    #[test]
    fn truncation_does_not_leave_trailing_space() {
        let title = format!("{} {}", "a".repeat(89), "b".repeat(20));
        let (doc, _) = run(json!({ "pages": [{ "path": "/", "title": title }] }));
        assert_eq!(doc["pages"][0]["title"], "a".repeat(89));
    }

    #[test]
    fn blank_text_is_left_alone() {
        let (doc, fixes) = run(json!({ "pages": [{ "path": "/", "title": "   ", "description": 7 }] }));
        assert!(fixes.is_empty());
        assert_eq!(doc["pages"][0]["title"], "   ");
        assert_eq!(doc["pages"][0]["description"], 7);
    }

    #[test]
    fn payment_defaults_are_trimmed() {
        let (doc, fixes) = run(json!({
            "payment": { "url": "  https://pay.example  ", "buttonText": "   " },
            "pages": [{ "path": "/", "blocks": [{ "type": "cta" }] }]
        }));
        let props = &doc["pages"][0]["blocks"][0]["props"];
        assert_eq!(props["buttonUrl"], "https://pay.example");
        assert_eq!(props["buttonText"], "Contact");
        assert_eq!(fixes, vec!["cta_button_text_defaulted", "cta_button_url_defaulted"]);
    }

    #[test]
    fn hero_defaults_use_hash_without_payment() {
        let (doc, _) = run(json!({ "pages": [{ "path": "/", "blocks": [{ "type": "Hero", "props": { "ctaText": " " } }] }] }));
        let props = &doc["pages"][0]["blocks"][0]["props"];
        assert_eq!(props["ctaText"], "Contact");
        assert_eq!(props["ctaUrl"], "#");
    }

    #[test]
    fn hero_headline_is_truncated_with_block_index() {
        let (doc, fixes) = run(json!({ "pages": [{ "path": "/", "blocks": [
            { "type": "faq" },
            { "type": "hero", "props": { "ctaText": "Go", "ctaUrl": "#", "headline": "h".repeat(95), "subheadline": " sub " } }
        ] }] }));
        let props = &doc["pages"][0]["blocks"][1]["props"];
        assert_eq!(props["headline"].as_str().map(str::len), Some(90));
        assert_eq!(props["subheadline"], "sub");
        assert_eq!(
            fixes,
            vec!["block_1_hero_headline_truncated", "block_1_hero_subheadline_truncated_trimmed"]
        );
    }

    #[test]
    fn pricing_defaults_apply_per_plan() {
        let (doc, fixes) = run(json!({
            "payment": { "url": "https://pay.example", "buttonText": "Buy" },
            "pages": [{ "path": "/", "blocks": [{ "type": "pricing", "props": { "plans": [
                { "name": "Basic" },
                { "name": "Pro", "buttonText": "Go pro", "url": "https://pro.example" },
                "not a plan"
            ] } }] }]
        }));
        let plans = &doc["pages"][0]["blocks"][0]["props"]["plans"];
        assert_eq!(plans[0]["buttonText"], "Buy");
        assert_eq!(plans[0]["url"], "https://pay.example");
        assert_eq!(plans[1]["buttonText"], "Go pro");
        assert_eq!(plans[2], "not a plan");
        assert_eq!(fixes, vec!["pricing_button_text_defaulted", "pricing_button_url_defaulted"]);
    }

    #[test]
    fn features_are_padded_cyclically() {
        let (doc, fixes) = run(json!({ "pages": [{ "path": "/", "blocks": [
            { "type": "features", "props": { "items": [{ "title": "Own" }] } },
            { "type": "features", "props": { "items": "broken" } }
        ] }] }));
        let first = doc["pages"][0]["blocks"][0]["props"]["items"].as_array().cloned().unwrap_or_default();
        assert_eq!(first.len(), 3);
        assert_eq!(first[0]["title"], "Own");
        assert_eq!(first[1]["title"], "Persuasive copy");
        assert_eq!(first[2]["title"], "Higher conversion");
        let second = doc["pages"][0]["blocks"][1]["props"]["items"].as_array().cloned().unwrap_or_default();
        assert_eq!(second[0]["title"], "Fast launch");
        assert_eq!(fixes, vec!["features_autofilled", "features_autofilled"]);
    }

    #[test]
    fn missing_props_become_an_empty_object() {
        let (doc, fixes) = run(json!({ "pages": [{ "path": "/", "blocks": [{ "type": "gallery" }] }] }));
        assert_eq!(doc["pages"][0]["blocks"][0]["props"], json!({}));
        assert!(fixes.is_empty());
    }

    #[test]
    fn custom_limits_are_honoured() {
        let limits = NormalizeLimits {
            title_max: 5,
            min_feature_items: 1,
            ..NormalizeLimits::default()
        };
        let mut doc = json!({ "pages": [{ "path": "/", "title": "Landing", "blocks": [
            { "type": "features", "props": { "items": [{ "title": "one" }] } }
        ] }] });
        let fixes = apply_business_rules(&mut doc, &limits, Locale::En.phrases());
        assert_eq!(doc["pages"][0]["title"], "Landi");
        assert_eq!(fixes, vec!["page_0_title_truncated"]);
    }
}
