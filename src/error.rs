use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum DeckError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to read an image's intrinsic dimensions
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// A JSON source or sink failed to parse / serialize
    Json(#[from] serde_json::Error),

    /// A slide referenced by the presentation order is missing from the
    /// document
    #[error("slide missing from document")]
    SlideMissing,
}
