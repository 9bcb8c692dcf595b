use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::error::IconError;
use crate::icon::create_icon;

/// Icon sizes listed in the extension manifest
pub const STANDARD_SIZES: [u32; 3] = [16, 48, 128];

/// Default output directory, relative to the working directory
pub const DEFAULT_OUT_DIR: &str = "icons";

/// File name used for an icon of the given size (e.g. "icon48.png")
pub fn icon_filename(size: u32) -> String {
    format!("icon{}.png", size)
}

/// A single icon to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub path: PathBuf,
}

/// Ordered collection of icons written one after another
#[derive(Debug, Clone)]
pub struct IconSet {
    icons: Vec<IconSpec>,
    verbose: bool,
}

impl IconSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            icons: Vec::new(),
            verbose: false,
        }
    }

    /// The 16/48/128 icons under `dir`
    pub fn standard(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        STANDARD_SIZES
            .iter()
            .fold(Self::new(), |set, &size| set.add_icon(size, dir.join(icon_filename(size))))
    }

    /// Log every written icon at info level instead of debug
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn add_icon(mut self, size: u32, path: impl Into<PathBuf>) -> Self {
        self.icons.push(IconSpec {
            size,
            path: path.into(),
        });
        self
    }

    pub fn icons(&self) -> &[IconSpec] {
        &self.icons
    }

    pub fn paths(&self) -> Vec<&Path> {
        self.icons.iter().map(|icon| icon.path.as_path()).collect()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Write every icon in order, stopping at the first failure.
    ///
    /// Icons written before the failure stay on disk.
    pub fn write_all(&self) -> Result<Vec<PathBuf>, IconError> {
        let mut written = Vec::with_capacity(self.icons.len());

        for (i, icon) in self.icons.iter().enumerate() {
            create_icon(icon.size, &icon.path)?;

            if self.verbose {
                info!("[{}/{}] {}x{} -> {}", i + 1, self.icons.len(),
                    icon.size, icon.size, icon.path.display());
            } else {
                debug!("[{}/{}] {}", i + 1, self.icons.len(), icon.path.display());
            }
            written.push(icon.path.clone());
        }

        info!("wrote {} icons", written.len());
        Ok(written)
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::standard(DEFAULT_OUT_DIR)
    }
}
