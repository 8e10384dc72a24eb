use landly_core::{Locale, NormalizeLimits, Validator};
use serde_json::{json, Value};

fn validator() -> Validator {
    Validator::with_options(NormalizeLimits::default(), Locale::Ru).expect("bundled schema compiles")
}

fn normalize(doc: &Value) -> (Value, Vec<String>) {
    let raw = serde_json::to_vec(doc).expect("encode fixture");
    let validated = validator().validate(&raw).expect("fixture is schema-valid");
    let normalized = serde_json::from_str(&validated.normalized).expect("normalized output is JSON");
    (normalized, validated.auto_fixes)
}

fn fixtures() -> Vec<Value> {
    vec![
        json!({ "pages": [] }),
        json!({ "version": "1.0" }),
        json!({
            "version": "1.0",
            "payment": { "url": "https://pay.example", "buttonText": "Buy" },
            "pages": [
                { "path": "", "title": format!("  {}  ", "t".repeat(120)), "description": "d".repeat(200), "blocks": [
                    { "type": "hero", "props": { "headline": format!("{} {}", "w".repeat(89), "tail"), "subheadline": "  s  " } },
                    { "type": "features" },
                    { "type": "pricing", "props": { "plans": [{ "name": "A" }, { "name": "B", "url": " " }] } },
                    { "type": "CTA", "props": { "buttonText": "" } },
                    { "type": "gallery", "props": { "images": [] } }
                ] },
                { "path": "about", "title": "About", "blocks": [] },
                { "title": "No path" }
            ]
        }),
        json!({
            "theme": { "palette": { "primary": "#000" } },
            "payment": { "buttonText": "   " },
            "pages": [{ "path": " /x ", "blocks": [
                { "type": "features", "props": { "items": [{ "title": "a" }, { "title": "b" }] } },
                { "type": "testimonials", "props": { "items": "oops" } },
                { "type": "faq" }
            ] }]
        }),
    ]
}

#[test]
fn empty_pages_get_default_page() {
    let (doc, fixes) = normalize(&json!({ "pages": [] }));
    let pages = doc["pages"].as_array().expect("pages array");
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0]["path"], "/");
    assert_eq!(pages[0]["title"], "Лендинг");
    assert!(fixes.contains(&"default_page_added".to_string()));
}

#[test]
fn absent_pages_get_default_page() {
    let (doc, fixes) = normalize(&json!({ "version": "1.0", "theme": { "font": "inter" } }));
    assert_eq!(doc["pages"].as_array().map(Vec::len), Some(1));
    assert_eq!(doc["pages"][0]["path"], "/");
    assert_eq!(doc["theme"]["font"], "inter");
    assert_eq!(fixes, vec!["default_page_added".to_string()]);
}

#[test]
fn hero_cta_falls_back_to_payment() {
    let (doc, fixes) = normalize(&json!({
        "payment": { "url": "https://pay.example", "buttonText": "Buy" },
        "pages": [{ "path": "/", "title": "Home", "blocks": [
            { "type": "hero", "props": { "headline": "Hi", "ctaText": "", "ctaUrl": "  " } }
        ] }]
    }));
    let props = &doc["pages"][0]["blocks"][0]["props"];
    assert_eq!(props["ctaText"], "Buy");
    assert_eq!(props["ctaUrl"], "https://pay.example");
    assert!(fixes.contains(&"hero_cta_text_defaulted".to_string()));
    assert!(fixes.contains(&"hero_cta_url_defaulted".to_string()));
}

#[test]
fn single_feature_is_padded_to_three() {
    let (doc, fixes) = normalize(&json!({
        "pages": [{ "path": "/", "blocks": [
            { "type": "features", "props": { "items": [{ "icon": "*", "title": "Only", "description": "one" }] } }
        ] }]
    }));
    let items = doc["pages"][0]["blocks"][0]["props"]["items"].as_array().expect("items array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["title"], "Only");
    assert_eq!(fixes.iter().filter(|f| *f == "features_autofilled").count(), 1);
}

#[test]
fn long_title_is_cut_to_ninety() {
    let (doc, fixes) = normalize(&json!({ "pages": [{ "path": "/", "title": "x".repeat(120) }] }));
    assert_eq!(doc["pages"][0]["title"].as_str().map(|t| t.chars().count()), Some(90));
    assert!(fixes.contains(&"page_0_title_truncated".to_string()));
}

#[test]
fn normalization_is_idempotent() {
    for fixture in fixtures() {
        let (first, _) = normalize(&fixture);
        let (second, fixes) = normalize(&first);
        assert!(fixes.is_empty(), "second pass applied fixes {:?} to {}", fixes, first);
        assert_eq!(first, second);
    }
}

#[test]
fn normalized_documents_hold_invariants() {
    let limits = NormalizeLimits::default();
    for fixture in fixtures() {
        let (doc, _) = normalize(&fixture);
        let pages = doc["pages"].as_array().expect("pages array");
        assert!(!pages.is_empty());

        for page in pages {
            assert!(page["path"].as_str().map_or(false, |p| p.starts_with('/')));
            if let Some(title) = page["title"].as_str() {
                assert!(title.chars().count() <= limits.title_max);
            }
            if let Some(description) = page["description"].as_str() {
                assert!(description.chars().count() <= limits.description_max);
            }

            for block in page["blocks"].as_array().into_iter().flatten() {
                let props = &block["props"];
                assert!(props.is_object(), "props missing on {}", block);
                match block["type"].as_str().map(str::to_lowercase).as_deref() {
                    Some("features") => {
                        let count = props["items"].as_array().map_or(0, Vec::len);
                        assert!(count >= limits.min_feature_items);
                    }
                    Some("hero") => {
                        if let Some(headline) = props["headline"].as_str() {
                            assert!(headline.chars().count() <= limits.headline_max);
                        }
                        if let Some(sub) = props["subheadline"].as_str() {
                            assert!(sub.chars().count() <= limits.subheadline_max);
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

#[test]
fn pages_keep_their_order_and_positions() {
    let (doc, fixes) = normalize(&fixtures()[1]);
    let paths: Vec<&str> = doc["pages"]
        .as_array()
        .expect("pages array")
        .iter()
        .filter_map(|p| p["path"].as_str())
        .collect();
    assert_eq!(paths, vec!["/", "/about", "/page-3"]);
    assert_eq!(
        &fixes[..3],
        &["page_0_path_defaulted", "page_0_title_truncated", "page_0_description_truncated"]
    );
}

#[test]
fn schema_failures_are_not_fixed() {
    let err = validator()
        .validate(br#"{"pages": [{"path": 5}]}"#)
        .unwrap_err();
    assert!(err.to_string().starts_with("LS1002"));
}
