//! Core HTML generator for SiteSpark niche review sites.
//!
//! Takes normalized site content (a niche title, a list of reviewed products
//! and two brand colors) and renders a complete, self-contained HTML document
//! in one of four layouts. The generator is a pure function of its inputs:
//! no I/O, no shared state, deterministic output.

mod color;
mod error;
mod escape;
mod fallback;
mod generate;
mod model;
mod templates;
mod views;

pub use color::{DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, Palette, derive_shade};
pub use error::{ColorError, RenderError};
pub use generate::generate_html;
pub use model::{Product, SiteContent, Specification, TemplateKind};
