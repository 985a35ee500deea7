//! Entry point: always returns a document, never an error.

use crate::color::{DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, Palette};
use crate::error::RenderError;
use crate::fallback;
use crate::model::SiteContent;
use crate::templates::render_document;

/// Renders the selected layout for `content` and returns the complete HTML
/// document. Degraded inputs are recovered locally: malformed brand colors
/// fall back to the defaults, and a template failure falls back to a minimal
/// classic-equivalent document. Both are logged, neither is propagated.
pub fn generate_html(content: &SiteContent) -> String {
    render_or_fallback(content, render_document)
}

// The render seam is generic so tests can force the failure branch; the
// bundled templates render any `SiteContent` and cannot fail on their own.
fn render_or_fallback<F>(content: &SiteContent, render: F) -> String
where
    F: Fn(&SiteContent, &Palette) -> Result<String, RenderError>,
{
    let palette = resolve_palette(content);
    match render(content, &palette) {
        Ok(html) => html,
        Err(err) => {
            log::warn!(
                "{} template failed to render, serving classic fallback: {err}",
                content.template.name()
            );
            fallback::render_fallback(content, &palette)
        }
    }
}

fn resolve_palette(content: &SiteContent) -> Palette {
    match Palette::resolve(&content.primary_color, &content.secondary_color) {
        Ok(palette) => palette,
        Err(err) => {
            log::warn!("using default brand colors: {err}");
            Palette::resolve(DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR)
                .expect("default brand colors parse")
        }
    }
}
