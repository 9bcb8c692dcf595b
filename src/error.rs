use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon size must be positive, got {0}")]
    InvalidSize(u32),

    #[error("icon size {0} is too large for an in-memory buffer")]
    TooLarge(u32),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl IconError {
    /// Classify an error from `image` as either a filesystem or an encoding failure
    pub fn from_image(path: impl Into<PathBuf>, err: image::ImageError) -> Self {
        let path = path.into();
        match err {
            image::ImageError::IoError(source) => IconError::Io { path, source },
            source => IconError::Encoding { path, source },
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, IconError::Io { .. })
    }

    pub fn is_encoding(&self) -> bool {
        matches!(self, IconError::Encoding { .. })
    }
}
