use thiserror::Error;

pub type SceneResult<T> = Result<T, SceneError>;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid primitive: {0}")]
    InvalidPrimitive(String),

    #[error("locale error: {0}")]
    Locale(String),

    #[error("unknown element kind: {0}")]
    UnknownElementKind(String),
}
