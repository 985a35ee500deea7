//! Last-resort document builder.
//!
//! Assembled with plain strings and manual escaping so it works even when
//! the template environment itself is the thing that failed. Intentionally
//! simpler than the classic layout: no specifications block, no animation
//! includes.

use std::fmt::Write as _;

use crate::color::Palette;
use crate::escape::escape_html;
use crate::model::SiteContent;

pub(crate) fn render_fallback(content: &SiteContent, palette: &Palette) -> String {
    let title = escape_html(&content.niche_title);
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"UTF-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(out, "<title>{title}</title>");
    let _ = writeln!(
        out,
        "<style>\n:root {{\n  --primary-color: {};\n  --primary-color-hover: {};\n  --secondary-color: {};\n  --secondary-color-light: {};\n}}\n{FALLBACK_CSS}</style>",
        palette.primary, palette.primary_hover, palette.secondary, palette.secondary_light,
    );
    out.push_str("</head>\n<body>\n<div class=\"container\">\n");
    let _ = writeln!(out, "<div class=\"hero\"><h1>{title}</h1></div>");

    for product in &content.products {
        out.push_str("<div class=\"product-card\">\n");
        let _ = writeln!(
            out,
            "<img src=\"{}\" alt=\"{}\" class=\"product-image\">",
            escape_html(&product.image_url),
            escape_html(&product.name),
        );
        let _ = writeln!(out, "<h2>{}</h2>", escape_html(&product.name));
        let _ = writeln!(out, "<p><em>{}</em></p>", escape_html(&product.tagline));
        push_list(&mut out, "Pros", &product.pros);
        push_list(&mut out, "Cons", &product.cons);
        let _ = writeln!(
            out,
            "<a href=\"{}\" class=\"buy-button\" target=\"_blank\" rel=\"noopener noreferrer\">Check Price</a>",
            escape_html(&product.affiliate_link),
        );
        out.push_str("</div>\n");
    }

    out.push_str("</div>\n");
    if content.include_branding {
        out.push_str(
            "<div class=\"branding-footer\"><p>Powered by <a href=\"https://sitespark.app\" target=\"_blank\" rel=\"noopener noreferrer\">SiteSpark</a></p></div>\n",
        );
    }
    out.push_str("</body>\n</html>");
    out
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    let _ = writeln!(out, "<h4>{heading}</h4>\n<ul>");
    for item in items {
        let _ = writeln!(out, "<li>{}</li>", escape_html(item));
    }
    out.push_str("</ul>\n");
}

const FALLBACK_CSS: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Helvetica, Arial, sans-serif; margin: 0; background-color: #f9fafb; color: #111827; }
.container { max-width: 900px; margin: 0 auto; padding: 20px; }
.hero { text-align: center; padding: 40px 20px; background-color: var(--secondary-color-light); border-radius: 8px; margin-bottom: 30px; }
.product-card { background-color: #ffffff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 20px; margin-bottom: 20px; }
.product-image { max-width: 200px; max-height: 200px; object-fit: cover; border-radius: 4px; }
.buy-button { display: inline-block; background-color: var(--primary-color); color: #ffffff; padding: 12px 24px; text-decoration: none; border-radius: 4px; font-weight: bold; margin-top: 15px; }
.buy-button:hover { background-color: var(--primary-color-hover); }
.branding-footer { text-align: center; padding: 20px; color: #6b7280; font-size: 14px; }
";
