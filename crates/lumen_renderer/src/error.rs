use lumen_math::MathError;
use thiserror::Error;

/// Errors raised while building or rendering a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("scene cannot be prepared for rendering twice")]
    AlreadyFinalized,

    #[error("scene must be finalized before rendering")]
    NotFinalized,

    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("antialiasing factor must be between 1 and 256, got {0}")]
    InvalidAntialiasing(u32),

    #[error("pixel sink is {sink_width}x{sink_height} but the image is {width}x{height}")]
    SinkTooSmall {
        width: u32,
        height: u32,
        sink_width: u32,
        sink_height: u32,
    },

    #[error("invalid transform: {0}")]
    Transform(#[from] MathError),

    #[error("invalid render settings: {0}")]
    Settings(#[from] serde_json::Error),
}
