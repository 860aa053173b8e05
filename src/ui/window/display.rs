// SPDX-License-Identifier: MIT
//! Fixed-size image display area.
//!
//! Whatever the controller hands over is fitted into a transparent canvas of
//! exactly [`IMAGE_DISPLAY_WIDTH`] x [`IMAGE_DISPLAY_HEIGHT`] pixels, so the
//! layout never moves when photos of different shapes are shown.

use crate::config::{IMAGE_DISPLAY_HEIGHT, IMAGE_DISPLAY_WIDTH};
use iced::widget::image;
use image_rs::imageops::{self, FilterType};
use image_rs::{DynamicImage, RgbaImage};

/// What currently occupies the display area.
#[derive(Debug, Clone, Default)]
pub enum DisplayImage {
    #[default]
    Placeholder,
    Image(FittedImage),
}

impl DisplayImage {
    /// Size of the area on screen. Identical for both variants.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            DisplayImage::Placeholder => (IMAGE_DISPLAY_WIDTH, IMAGE_DISPLAY_HEIGHT),
            DisplayImage::Image(fitted) => (fitted.width, fitted.height),
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, DisplayImage::Placeholder)
    }
}

/// An image already fitted and centred on the display canvas.
#[derive(Debug, Clone)]
pub struct FittedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Size of the photo itself inside the canvas.
    pub content: (u32, u32),
}

impl FittedImage {
    #[must_use]
    pub fn from_image(source: &DynamicImage) -> Self {
        let canvas = fit_to_canvas(source, IMAGE_DISPLAY_WIDTH, IMAGE_DISPLAY_HEIGHT);
        let content = fitted_size(
            (source.width(), source.height()),
            (IMAGE_DISPLAY_WIDTH, IMAGE_DISPLAY_HEIGHT),
        );
        let (width, height) = canvas.dimensions();
        Self {
            handle: image::Handle::from_rgba(width, height, canvas.into_raw()),
            width,
            height,
            content,
        }
    }
}

/// Size of `source` scaled down to fit inside `bounds`, keeping its aspect
/// ratio. Images already smaller than `bounds` keep their size.
#[must_use]
pub fn fitted_size(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (width, height) = source;
    if width == 0 || height == 0 || bounds.0 == 0 || bounds.1 == 0 {
        return (0, 0);
    }
    let scale = (f64::from(bounds.0) / f64::from(width))
        .min(f64::from(bounds.1) / f64::from(height))
        .min(1.0);
    let scaled = |side: u32, limit: u32| ((f64::from(side) * scale).round() as u32).clamp(1, limit);
    (scaled(width, bounds.0), scaled(height, bounds.1))
}

/// Renders `source` centred on a transparent `width` x `height` canvas.
#[must_use]
pub fn fit_to_canvas(source: &DynamicImage, width: u32, height: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    let (fit_width, fit_height) = fitted_size((source.width(), source.height()), (width, height));
    if fit_width == 0 || fit_height == 0 {
        return canvas;
    }

    let rgba = source.to_rgba8();
    let content = if (fit_width, fit_height) == rgba.dimensions() {
        rgba
    } else {
        imageops::resize(&rgba, fit_width, fit_height, FilterType::Triangle)
    };

    let x = i64::from((width - fit_width) / 2);
    let y = i64::from((height - fit_height) / 2);
    imageops::overlay(&mut canvas, &content, x, y);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;

    fn solid(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([200, 10, 10, 255])))
    }

    #[test]
    fn landscape_is_limited_by_width() {
        assert_eq!(fitted_size((1152, 360), (576, 360)), (576, 180));
    }

    #[test]
    fn portrait_is_limited_by_height() {
        assert_eq!(fitted_size((720, 1440), (576, 360)), (180, 360));
    }

    #[test]
    fn small_images_are_not_enlarged() {
        assert_eq!(fitted_size((100, 50), (576, 360)), (100, 50));
    }

    #[test]
    fn degenerate_source_has_no_content() {
        assert_eq!(fitted_size((0, 100), (576, 360)), (0, 0));
    }

    #[test]
    fn zero_bounds_give_empty_canvas() {
        assert_eq!(fitted_size((10, 10), (0, 10)), (0, 0));
        assert_eq!(fitted_size((10, 10), (10, 0)), (0, 0));
        let canvas = fit_to_canvas(&solid(10, 10), 0, 10);
        assert_eq!(canvas.dimensions(), (0, 10));
    }

    #[test]
    fn canvas_always_has_display_dimensions() {
        for source in [solid(4000, 3000), solid(10, 10), solid(300, 2000)] {
            let canvas = fit_to_canvas(&source, IMAGE_DISPLAY_WIDTH, IMAGE_DISPLAY_HEIGHT);
            assert_eq!(canvas.dimensions(), (IMAGE_DISPLAY_WIDTH, IMAGE_DISPLAY_HEIGHT));
        }
    }

    #[test]
    fn content_is_centred_with_transparent_margins() {
        let canvas = fit_to_canvas(&solid(100, 50), 300, 150);
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);
        assert_eq!(canvas.get_pixel(150, 75), &Rgba([200, 10, 10, 255]));
        assert_eq!(canvas.get_pixel(99, 50)[3], 0);
        assert_eq!(canvas.get_pixel(100, 50)[3], 255);
    }

    #[test]
    fn fitted_image_reports_content_size() {
        let fitted = FittedImage::from_image(&solid(1152, 720));
        assert_eq!((fitted.width, fitted.height), (576, 360));
        assert_eq!(fitted.content, (576, 360));
    }

    #[test]
    fn placeholder_and_image_share_dimensions() {
        let placeholder = DisplayImage::Placeholder;
        let image = DisplayImage::Image(FittedImage::from_image(&solid(20, 20)));
        assert_eq!(placeholder.dimensions(), image.dimensions());
        assert!(placeholder.is_placeholder());
        assert!(!image.is_placeholder());
    }
}
