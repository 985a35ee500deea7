//! User-supplied text must never break out of the generated markup.

use sitespark_core::{Product, SiteContent, TemplateKind, generate_html};

// The document ships exactly three developer-authored script tags: the two
// CDN includes and the inline animation init.
const FIXED_SCRIPT_TAGS: usize = 3;

#[test]
fn injected_script_tags_are_neutralized_in_every_template() {
    for kind in [
        TemplateKind::Classic,
        TemplateKind::Table,
        TemplateKind::Grid,
        TemplateKind::Analyst,
    ] {
        let mut content = hostile_content();
        content.template = kind;
        let html = generate_html(&content);
        assert_eq!(
            html.matches("<script").count(),
            FIXED_SCRIPT_TAGS,
            "extra script tag in {}",
            kind.name()
        );
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

#[test]
fn quotes_cannot_escape_attribute_context() {
    let mut content = hostile_content();
    content.products[0].affiliate_link = "https://x/buy\" onclick=\"steal()".to_string();
    let html = generate_html(&content);
    assert!(!html.contains("onclick=\"steal()\""));
    assert!(!html.contains("\" onclick="));
}

#[test]
fn ampersands_and_angles_render_as_entities() {
    let mut content = hostile_content();
    content.products[0].name = "Widget <X> & Co".to_string();
    let html = generate_html(&content);
    assert!(html.contains("Widget &lt;X&gt; &amp; Co"));
    assert!(!html.contains("Widget <X>"));
}

fn hostile_content() -> SiteContent {
    SiteContent::new(
        "<script>alert('title')</script>",
        vec![Product {
            id: 1,
            name: "Widget".to_string(),
            image_url: "https://x/img.png".to_string(),
            tagline: "<img src=x onerror=alert(1)>".to_string(),
            pros: vec!["<b>bold</b>".to_string()],
            cons: vec!["5 < 7 & 9 > 3".to_string()],
            affiliate_link: "https://x/buy".to_string(),
            specifications: Vec::new(),
        }],
    )
}
