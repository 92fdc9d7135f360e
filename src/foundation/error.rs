pub type GlyphwarpResult<T> = Result<T, GlyphwarpError>;

#[derive(thiserror::Error, Debug)]
pub enum GlyphwarpError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("outline error: {0}")]
    Outline(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphwarpError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn outline(msg: impl Into<String>) -> Self {
        Self::Outline(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
