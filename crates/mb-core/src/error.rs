use thiserror::Error;

pub type Result<T> = std::result::Result<T, SurfaceError>;

/// Failures raised while resolving or configuring a surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("no element with id `{id}` in the host document")]
    NotFound { id: String },

    #[error("element `{id}` is not a canvas")]
    NotACanvas { id: String },

    #[error("invalid adapter config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl SurfaceError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn not_a_canvas(id: impl Into<String>) -> Self {
        Self::NotACanvas { id: id.into() }
    }
}
