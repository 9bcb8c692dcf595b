use image::{Rgb, RgbImage};
use log::trace;
use std::path::Path;

use crate::error::IconError;

/// Fill color of every icon (#1DA1F2)
pub const ICON_COLOR: Rgb<u8> = Rgb([29, 161, 242]);

/// Build a square icon of `size` pixels filled with [`ICON_COLOR`]
pub fn render_icon(size: u32) -> Result<RgbImage, IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize(size));
    }
    let side = size as usize;
    if side.checked_mul(side).and_then(|n| n.checked_mul(3)).is_none() {
        return Err(IconError::TooLarge(size));
    }
    Ok(RgbImage::from_pixel(size, size, ICON_COLOR))
}

/// Encode an icon and write it to `path`, replacing any existing file.
///
/// The format comes from the path's extension.
pub fn save_icon(img: &RgbImage, path: impl AsRef<Path>) -> Result<(), IconError> {
    let path = path.as_ref();
    img.save(path)
        .map_err(|e| IconError::from_image(path, e))?;
    trace!("wrote {}x{} icon to {}", img.width(), img.height(), path.display());
    Ok(())
}

/// Render a `size` x `size` icon and save it to `path`
pub fn create_icon(size: u32, path: impl AsRef<Path>) -> Result<(), IconError> {
    let img = render_icon(size)?;
    save_icon(&img, path)
}
