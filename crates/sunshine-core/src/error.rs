use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("smoothing factor `{name}` must be in (0, 1], got {value}")]
    SmoothingFactor { name: &'static str, value: f32 },

    #[error("duration `{name}` must be positive")]
    Duration { name: &'static str },

    #[error("scramble glyph set is empty")]
    EmptyGlyphs,

    #[error("selector `{0}` is empty")]
    EmptySelector(&'static str),
}

#[derive(Error, Debug)]
pub enum FxError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("DOM error: {0}")]
    Dom(String),
}
