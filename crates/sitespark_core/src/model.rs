//! Render input model.
//!
//! The surrounding application owns editing and persistence; this crate only
//! consumes an assembled [`SiteContent`]. Field names deserialize from the
//! camelCase form state the editing layer persists.

use serde::{Deserialize, Serialize};

use crate::color::{DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR};

/// One product attribute row. Rows with `include = false` stay editable in
/// the source UI but are filtered out before any rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    pub id: u64,
    pub key: String,
    pub value: String,
    #[serde(default = "default_true")]
    pub include: bool,
}

/// One reviewed item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub affiliate_link: String,
    /// Always a sequence, possibly empty. Records persisted before the
    /// specifications feature existed deserialize to an empty list.
    #[serde(default)]
    pub specifications: Vec<Specification>,
}

/// Closed set of page layouts. Unknown names resolve to `Classic` rather
/// than failing, so stale persisted selections still render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TemplateKind {
    #[default]
    Classic,
    Table,
    Grid,
    Analyst,
}

impl TemplateKind {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "table" => TemplateKind::Table,
            "grid" => TemplateKind::Grid,
            "analyst" => TemplateKind::Analyst,
            _ => TemplateKind::Classic,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Classic => "classic",
            TemplateKind::Table => "table",
            TemplateKind::Grid => "grid",
            TemplateKind::Analyst => "analyst",
        }
    }

    pub(crate) fn template_file(self) -> &'static str {
        match self {
            TemplateKind::Classic => "classic.html",
            TemplateKind::Table => "table.html",
            TemplateKind::Grid => "grid.html",
            TemplateKind::Analyst => "analyst.html",
        }
    }
}

impl From<String> for TemplateKind {
    fn from(name: String) -> Self {
        TemplateKind::from_name(&name)
    }
}

/// Everything a single render call needs. Constructed fresh per call by the
/// caller; the generator never retains it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub niche_title: String,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
    #[serde(default = "default_true")]
    pub include_branding: bool,
    #[serde(default)]
    pub template: TemplateKind,
}

impl SiteContent {
    /// Content with the default template, brand colors and branding flag.
    pub fn new(niche_title: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            niche_title: niche_title.into(),
            products,
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            include_branding: true,
            template: TemplateKind::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_primary_color() -> String {
    DEFAULT_PRIMARY_COLOR.to_string()
}

fn default_secondary_color() -> String {
    DEFAULT_SECONDARY_COLOR.to_string()
}
