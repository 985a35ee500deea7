//! Template environment and document rendering.
//!
//! The four page layouts are minijinja templates extending a shared
//! `base.html` (head, hero, branding footer, closing scripts). Auto-escaping
//! is on for every `*.html` template, so user-supplied text can never break
//! out of the generated markup; only the developer-authored CSS constants
//! are injected unescaped.

use minijinja::value::Value;
use minijinja::{AutoEscape, Environment, context};

use crate::color::Palette;
use crate::error::RenderError;
use crate::escape::escape_html;
use crate::model::{SiteContent, TemplateKind};
use crate::views::{self, product_views};

const COMMON_CSS: &str = include_str!("../templates/css/common.css");
const CLASSIC_CSS: &str = include_str!("../templates/css/classic.css");
const TABLE_CSS: &str = include_str!("../templates/css/table.css");
const GRID_CSS: &str = include_str!("../templates/css/grid.css");
const ANALYST_CSS: &str = include_str!("../templates/css/analyst.css");

const TEMPLATE_SOURCES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("classic.html", include_str!("../templates/classic.html")),
    ("table.html", include_str!("../templates/table.html")),
    ("grid.html", include_str!("../templates/grid.html")),
    ("analyst.html", include_str!("../templates/analyst.html")),
    ("partials/hero.html", include_str!("../templates/partials/hero.html")),
    ("partials/footer.html", include_str!("../templates/partials/footer.html")),
    ("partials/closing.html", include_str!("../templates/partials/closing.html")),
];

fn template_env() -> Result<Environment<'static>, RenderError> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|name| {
        if name.ends_with(".html") {
            AutoEscape::Html
        } else {
            AutoEscape::None
        }
    });
    env.add_filter("url_attr", url_attr);
    for &(name, source) in TEMPLATE_SOURCES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

/// Attribute-safe URL escaping. The stock HTML auto-escape also encodes `/`,
/// which would mangle every URL; this escapes only the markup-significant
/// characters and marks the result safe so auto-escape leaves it alone.
fn url_attr(value: String) -> Value {
    Value::from_safe_string(escape_html(&value))
}

fn template_css(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Classic => CLASSIC_CSS,
        TemplateKind::Table => TABLE_CSS,
        TemplateKind::Grid => GRID_CSS,
        TemplateKind::Analyst => ANALYST_CSS,
    }
}

pub(crate) fn render_document(
    content: &SiteContent,
    palette: &Palette,
) -> Result<String, RenderError> {
    let env = template_env()?;
    let template = env.get_template(content.template.template_file())?;
    let products = product_views(&content.products, content.template);
    let html = template.render(context! {
        niche_title => content.niche_title.clone(),
        meta_description => views::meta_description(&content.niche_title),
        og_image => views::og_image(&content.products),
        palette => palette,
        common_css => COMMON_CSS,
        template_styles => template_css(content.template),
        include_branding => content.include_branding,
        products => products,
    })?;
    Ok(html)
}
