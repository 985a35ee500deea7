use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex color '{0}': expected three hex byte pairs")]
    InvalidFormat(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
