use extension_icons::ICON_COLOR;
use image::RgbImage;
use std::path::Path;
use tempfile::TempDir;

/// Creates a temp working directory with an empty `icons/` subdirectory.
/// Keep the returned TempDir alive for as long as the files are needed.
pub fn create_workdir_with_icons() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::create_dir(dir.path().join("icons")).expect("Failed to create icons directory");
    dir
}

/// Creates an empty temp working directory (no `icons/`)
pub fn create_empty_workdir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Decodes an image file back into RGB8
pub fn load_rgb(path: &Path) -> RgbImage {
    image::open(path)
        .unwrap_or_else(|e| panic!("Failed to decode {}: {}", path.display(), e))
        .to_rgb8()
}

/// Asserts the file at `path` is a `size` x `size` image of ICON_COLOR
pub fn assert_solid_icon(path: &Path, size: u32) {
    let img = load_rgb(path);
    assert_eq!(img.dimensions(), (size, size), "wrong dimensions for {}", path.display());
    for (x, y, pixel) in img.enumerate_pixels() {
        assert_eq!(*pixel, ICON_COLOR, "pixel ({}, {}) of {} differs", x, y, path.display());
    }
}

/// Sorted file names in `dir`
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| entry.expect("Failed to read entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub const STANDARD_FILES: [&str; 3] = ["icon128.png", "icon16.png", "icon48.png"];
