/// Error type for gallery startup and platform failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("failed to open X11 display")]
    DisplayUnavailable,

    #[error("window title contains a NUL byte")]
    InvalidTitle(#[from] std::ffi::NulError),

    #[error("failed to create Cairo context for window")]
    RenderContext,

    #[error("smooth scroll unavailable: {0}")]
    SmoothScrollUnavailable(String),

    #[error("invalid value for {flag}: {value:?}")]
    InvalidArgument { flag: String, value: String },

    #[error(transparent)]
    Cairo(#[from] cairo::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
