//! Preview rendering for the generated artifact.

use iced::widget::image::Handle;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, RgbaImage};

/// Scale `image` to a `size` x `size` RGBA square.
pub fn scale_for_preview(image: &GrayImage, size: u32) -> RgbaImage {
    let scaled = imageops::resize(image, size, size, FilterType::Lanczos3);
    DynamicImage::ImageLuma8(scaled).to_rgba8()
}

/// Build the widget handle for the preview frame.
pub fn preview_handle(image: &GrayImage, size: u32) -> Handle {
    let rgba = scale_for_preview(image, size);
    let (width, height) = rgba.dimensions();
    Handle::from_rgba(width, height, rgba.into_raw())
}
