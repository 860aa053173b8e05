// SPDX-License-Identifier: MIT
//! Window icon.
//!
//! The SVG is embedded in the binary and rasterized at startup. Any failure
//! leaves the window with the platform default icon.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/photo_sorter.svg");

/// Edge length of the rasterized icon in pixels.
const ICON_SIZE: u32 = 128;

/// Rasterizes the embedded SVG into a square RGBA buffer.
fn rasterize(size: u32) -> Option<Vec<u8>> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::warn!(error = %err, "window icon could not be parsed");
            return None;
        }
    };

    let original = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / original.width(),
        size as f32 / original.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap.data().to_vec())
}

/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let rgba = rasterize(ICON_SIZE)?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_svg_rasterizes() {
        let rgba = rasterize(ICON_SIZE).expect("icon should render");
        assert_eq!(rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
        assert!(rgba.chunks(4).any(|pixel| pixel[3] > 0));
    }

    #[test]
    fn window_icon_loads() {
        assert!(load_window_icon().is_some());
    }
}
