use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning an image file into an inline data URL
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The image path does not exist
    #[error("image file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The path exists but could not be read
    #[error("failed to read image file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EncodeError {
    /// Path of the image that failed to encode
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } => path,
        }
    }
}

/// Errors returned by [`crate::Classifier`].
///
/// Inference failures are carried as the client's own error value, untouched.
#[derive(Debug, Error)]
pub enum ClassifyError<E>
where
    E: std::error::Error + 'static,
{
    /// An exemplar or the query image could not be encoded; nothing was sent
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The inference client failed
    #[error(transparent)]
    Inference(E),
}

impl<E> ClassifyError<E>
where
    E: std::error::Error + 'static,
{
    /// Whether the failure is a missing image file
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Encode(EncodeError::NotFound { .. }))
    }

    /// The inference client's error, if that is what failed
    pub fn as_inference(&self) -> Option<&E> {
        match self {
            Self::Inference(e) => Some(e),
            Self::Encode(_) => None,
        }
    }
}
