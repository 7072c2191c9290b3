// SPDX-License-Identifier: MPL-2.0
//! Window icon loading.
//!
//! The theme controller writes an icon path into the document; this module
//! turns that path into an RGBA window icon by rasterizing the matching
//! embedded SVG.

use crate::error::{Error, Result};
use crate::theming::{DARK_ICON, LIGHT_ICON};
use iced::window::{icon, Icon};
use resvg::usvg;

const ICON_SIZE: u32 = 128;

const CAMERA_WHITE_SVG: &str = include_str!("../assets/branding/camera_white.svg");
const CAMERA_BLACK_SVG: &str = include_str!("../assets/branding/camera_black.svg");

/// SVG source for an icon path, `None` for unknown paths.
#[must_use]
pub fn svg_source(icon_path: &str) -> Option<&'static str> {
    match icon_path {
        DARK_ICON => Some(CAMERA_WHITE_SVG),
        LIGHT_ICON => Some(CAMERA_BLACK_SVG),
        _ => None,
    }
}

/// Rasterizes the icon for `icon_path` into a square RGBA buffer.
pub fn rasterize(icon_path: &str) -> Result<(Vec<u8>, u32)> {
    let source = svg_source(icon_path)
        .ok_or_else(|| Error::Icon(format!("no icon for {}", icon_path)))?;

    let tree = usvg::Tree::from_data(source.as_bytes(), &usvg::Options::default())
        .map_err(|err| Error::Icon(err.to_string()))?;

    let orig_size = tree.size();
    let scale_x = ICON_SIZE as f32 / orig_size.width();
    let scale_y = ICON_SIZE as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)
        .ok_or_else(|| Error::Icon("cannot allocate pixmap".to_string()))?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok((pixmap.data().to_vec(), ICON_SIZE))
}

/// Builds the window icon for `icon_path`.
pub fn load_window_icon(icon_path: &str) -> Result<Icon> {
    let (rgba, size) = rasterize(icon_path)?;
    icon::from_rgba(rgba, size, size).map_err(|err| Error::Icon(err.to_string()))
}
