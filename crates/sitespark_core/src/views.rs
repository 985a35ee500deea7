//! Template view construction.
//!
//! All cross-template content rules live here, before the template engine
//! sees a product: specification rows are filtered by `include`, pros/cons
//! keep their input order, compact layouts cap list lengths, and the analyst
//! layout gets its position-indexed verdict sentence.

use serde::Serialize;

use crate::model::{Product, TemplateKind};

/// Open Graph image used when the site has no products yet.
pub(crate) const STOCK_OG_IMAGE: &str =
    "https://images.unsplash.com/photo-1498049794561-7780e7231661?auto=format&fit=crop&w=1200&q=80";

// Fixed per-position filler, not derived from product content.
const VERDICTS: [&str; 3] = [
    "Our top recommendation for most users. Offers the best balance of performance, features, and value.",
    "An excellent alternative with unique strengths. Perfect for users with specific requirements.",
    "A solid choice with distinct advantages. Great for budget-conscious buyers or niche use cases.",
];
const GENERIC_VERDICT: &str = "A quality option worth considering for the right user.";

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SpecView {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ProductView {
    pub name: String,
    pub image_url: String,
    pub tagline: String,
    pub affiliate_link: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub specifications: Vec<SpecView>,
    pub verdict: &'static str,
}

struct ViewLimits {
    pros: Option<usize>,
    cons: Option<usize>,
    specs: Option<usize>,
}

impl ViewLimits {
    fn for_template(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::Classic | TemplateKind::Analyst => Self {
                pros: None,
                cons: None,
                specs: None,
            },
            TemplateKind::Table => Self {
                pros: Some(3),
                cons: Some(3),
                specs: None,
            },
            TemplateKind::Grid => Self {
                pros: Some(3),
                cons: Some(3),
                specs: Some(4),
            },
        }
    }
}

pub(crate) fn product_views(products: &[Product], kind: TemplateKind) -> Vec<ProductView> {
    let limits = ViewLimits::for_template(kind);
    products
        .iter()
        .enumerate()
        .map(|(index, product)| ProductView {
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            tagline: product.tagline.clone(),
            affiliate_link: product.affiliate_link.clone(),
            pros: capped(&product.pros, limits.pros),
            cons: capped(&product.cons, limits.cons),
            specifications: included_specs(product, limits.specs),
            verdict: verdict_for_position(index),
        })
        .collect()
}

fn capped(items: &[String], limit: Option<usize>) -> Vec<String> {
    match limit {
        Some(limit) => items.iter().take(limit).cloned().collect(),
        None => items.to_vec(),
    }
}

fn included_specs(product: &Product, limit: Option<usize>) -> Vec<SpecView> {
    let included = product
        .specifications
        .iter()
        .filter(|spec| spec.include)
        .map(|spec| SpecView {
            key: spec.key.clone(),
            value: spec.value.clone(),
        });
    match limit {
        Some(limit) => included.take(limit).collect(),
        None => included.collect(),
    }
}

pub(crate) fn verdict_for_position(index: usize) -> &'static str {
    VERDICTS.get(index).copied().unwrap_or(GENERIC_VERDICT)
}

pub(crate) fn meta_description(niche_title: &str) -> String {
    format!(
        "Discover the best {} with our expert reviews and comparisons. \
         We break down the top picks to help you choose with confidence.",
        niche_title.to_lowercase()
    )
}

pub(crate) fn og_image(products: &[Product]) -> String {
    products
        .first()
        .map(|product| product.image_url.clone())
        .unwrap_or_else(|| STOCK_OG_IMAGE.to_string())
}
