//! The model deserializes the camelCase form state the editing layer
//! persists, normalizing historical gaps (missing specifications, missing
//! include flags, stale template names) on the way in.

use sitespark_core::{SiteContent, TemplateKind, generate_html};

#[test]
fn persisted_form_state_round_trips_into_a_render() {
    let json = r##"{
        "nicheTitle": "Best Standing Desks",
        "products": [
            {
                "id": 1,
                "name": "DeskPro",
                "imageUrl": "https://img/desk.png",
                "tagline": "Sturdy and quiet",
                "pros": ["Stable"],
                "cons": ["Heavy"],
                "affiliateLink": "https://shop/deskpro",
                "specifications": [
                    {"id": 1, "key": "Height", "value": "120 cm"},
                    {"id": 2, "key": "InternalCode", "value": "SKU-9931", "include": false}
                ]
            },
            {
                "id": 2,
                "name": "DeskLite",
                "imageUrl": "",
                "tagline": "Budget pick",
                "pros": [],
                "cons": [],
                "affiliateLink": "https://shop/desklite"
            }
        ],
        "primaryColor": "#112233",
        "secondaryColor": "#445566",
        "includeBranding": true,
        "template": "grid"
    }"##;

    let content: SiteContent = serde_json::from_str(json).expect("deserialize");
    assert_eq!(content.template, TemplateKind::Grid);
    // Missing include flag defaults to true; missing specifications list
    // normalizes to empty.
    assert!(content.products[0].specifications[0].include);
    assert!(!content.products[0].specifications[1].include);
    assert!(content.products[1].specifications.is_empty());

    let html = generate_html(&content);
    assert!(html.contains("DeskPro"));
    assert!(html.contains("Height"));
    assert!(!html.contains("SKU-9931"));
    assert!(html.contains("DeskLite"));
    assert!(html.contains("--primary-color: #112233;"));
}

#[test]
fn stale_template_names_fall_back_to_classic() {
    let json = r##"{"nicheTitle": "Best Kettles", "template": "magazine"}"##;
    let content: SiteContent = serde_json::from_str(json).expect("deserialize");
    assert_eq!(content.template, TemplateKind::Classic);

    let html = generate_html(&content);
    assert!(html.contains("<h1>Best Kettles</h1>"));
}

#[test]
fn omitted_fields_take_brand_defaults() {
    let json = r##"{"nicheTitle": "Best Kettles"}"##;
    let content: SiteContent = serde_json::from_str(json).expect("deserialize");
    assert_eq!(content.primary_color, "#4f46e5");
    assert_eq!(content.secondary_color, "#10b981");
    assert!(content.include_branding);
    assert_eq!(content.template, TemplateKind::Classic);
    assert!(content.products.is_empty());
}
