use image::imageops::FilterType;
use image::DynamicImage;

use crate::core::model::ImageMetadata;

/// The engine reads a reduced raster; boxes come back in the reduced
/// coordinate space and are mapped to display space by the rescaler.
pub const RECOGNITION_DOWNSCALE: u32 = 2;

pub fn downscale_for_recognition(raster: &DynamicImage) -> DynamicImage {
    let width = (raster.width() / RECOGNITION_DOWNSCALE).max(1);
    let height = (raster.height() / RECOGNITION_DOWNSCALE).max(1);
    raster.resize_exact(width, height, FilterType::Triangle)
}

pub fn recognition_metadata(raster: &DynamicImage) -> ImageMetadata {
    ImageMetadata {
        width: raster.width() as f32,
        height: raster.height() as f32,
    }
}
