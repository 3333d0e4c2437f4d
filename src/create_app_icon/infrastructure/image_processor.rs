use super::error::InfrastructureError;
use crate::domain::geometry::{corner_radius_for, padded_size, padding_for};
use crate::domain::image::{ImageInfo, ProcessedIcon};
use crate::domain::image_processor_trait::IconProcessor;
use crate::domain::percentage::{CornerRadiusPercent, PaddingPercent};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{imageops, ColorType, DynamicImage, GrayImage, ImageEncoder, Luma, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use std::io::Cursor;
use tracing::debug;

/// `IconProcessor` backed by the `image` codecs and `imageproc` drawing primitives.
pub struct DefaultIconProcessor;

impl DefaultIconProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DefaultIconProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl IconProcessor for DefaultIconProcessor {
    fn add_padding(
        &self,
        image_bytes: Vec<u8>,
        percent: PaddingPercent,
    ) -> Result<ProcessedIcon, InfrastructureError> {
        let img = decode(image_bytes)?;
        let source = image_info(&img)?;

        let padding = padding_for(source.width, source.height, percent);
        let (new_width, new_height) = padded_size(source.width, source.height, padding)?;
        debug!(
            "padding {} {} ({}): {}px -> {}x{}",
            source,
            source.mode(),
            percent,
            padding,
            new_width,
            new_height
        );

        let mut canvas = RgbaImage::from_pixel(new_width, new_height, Rgba([0, 0, 0, 0]));
        // キャンバスは完全に透明なので、アルファ付きの元画像もそのままコピーすれば
        // アルファをマスクにした貼り付けと同じ見た目になる
        imageops::replace(&mut canvas, &img.to_rgba8(), padding as i64, padding as i64);

        let data = encode_png(&canvas)?;
        Ok(ProcessedIcon {
            data,
            source,
            result: ImageInfo::new(new_width, new_height, true),
            amount_px: padding,
        })
    }

    fn add_rounded_corners(
        &self,
        image_bytes: Vec<u8>,
        percent: CornerRadiusPercent,
    ) -> Result<ProcessedIcon, InfrastructureError> {
        let img = decode(image_bytes)?;
        let source = image_info(&img)?;
        let rgba = img.to_rgba8();

        let radius = corner_radius_for(source.width, source.height, percent);
        debug!(
            "rounding {} {} ({}): radius {}px",
            source,
            source.mode(),
            percent,
            radius
        );
        let mask = rounded_rect_mask(source.width, source.height, radius);

        let mut output = RgbaImage::new(source.width, source.height);
        imageops::replace(&mut output, &rgba, 0, 0);
        apply_alpha_mask(&mut output, &mask);

        let data = encode_png(&output)?;
        Ok(ProcessedIcon {
            data,
            source,
            result: ImageInfo::new(source.width, source.height, true),
            amount_px: radius,
        })
    }
}

fn decode(image_bytes: Vec<u8>) -> Result<DynamicImage, InfrastructureError> {
    let reader = image::io::Reader::new(Cursor::new(image_bytes))
        .with_guessed_format()
        .map_err(InfrastructureError::IoError)?;
    let img = reader.decode().map_err(InfrastructureError::ImageLibError)?;
    Ok(img)
}

fn image_info(img: &DynamicImage) -> Result<ImageInfo, InfrastructureError> {
    if img.width() == 0 || img.height() == 0 {
        return Err(InfrastructureError::ImageProcessingError(format!(
            "image has no pixels ({}x{})",
            img.width(),
            img.height()
        )));
    }
    Ok(ImageInfo::new(img.width(), img.height(), img.color().has_alpha()))
}

/// Encodes as RGBA PNG with the strongest compression and adaptive row filters.
fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, InfrastructureError> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive);
    encoder
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)
        .map_err(InfrastructureError::ImageLibError)?;
    Ok(buffer.into_inner())
}

/// Single-channel mask: 255 inside a rounded rectangle spanning the whole
/// `width` x `height` area, 0 in the cut-off corners.
///
/// The shape is a horizontal band, a vertical band and one filled circle per
/// corner, centred `radius` pixels in from both edges.
pub(crate) fn rounded_rect_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    if width == 0 || height == 0 {
        return mask;
    }

    // 帯の幅が 0 にならないよう半径を抑える
    let radius = radius.min((width.min(height) - 1) / 2);
    let opaque = Luma([255u8]);
    let r = radius as i32;

    draw_filled_rect_mut(
        &mut mask,
        Rect::at(r, 0).of_size(width - 2 * radius, height),
        opaque,
    );
    draw_filled_rect_mut(
        &mut mask,
        Rect::at(0, r).of_size(width, height - 2 * radius),
        opaque,
    );

    if radius > 0 {
        let right = width as i32 - 1 - r;
        let bottom = height as i32 - 1 - r;
        for center in [(r, r), (right, r), (r, bottom), (right, bottom)] {
            draw_filled_circle_mut(&mut mask, center, r, opaque);
        }
    }
    mask
}

/// Replaces the alpha channel of `img` with the mask values.
fn apply_alpha_mask(img: &mut RgbaImage, mask: &GrayImage) {
    for (pixel, alpha) in img.pixels_mut().zip(mask.pixels()) {
        pixel.0[3] = alpha.0[0];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage, Rgb};

    fn png_bytes(img: DynamicImage) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    fn decode_output(icon: &ProcessedIcon) -> RgbaImage {
        let img = image::load_from_memory_with_format(&icon.data, ImageFormat::Png).unwrap();
        assert_eq!(img.color(), ColorType::Rgba8);
        img.to_rgba8()
    }

    fn solid_square(size: u32, color: [u8; 4]) -> Vec<u8> {
        png_bytes(DynamicImage::ImageRgba8(RgbaImage::from_pixel(size, size, Rgba(color))))
    }

    // 半透明を含むグラデーション画像
    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 6) as u8, (y * 9) as u8, ((x + y) * 3) as u8, (x * y % 256) as u8])
        })
    }

    #[test]
    fn test_add_padding_red_square() {
        let processor = DefaultIconProcessor::new();
        let icon = processor
            .add_padding(solid_square(512, [255, 0, 0, 255]), PaddingPercent::default())
            .unwrap();

        assert_eq!(icon.amount_px, 76);
        assert_eq!(icon.source, ImageInfo::new(512, 512, true));
        assert_eq!(icon.result, ImageInfo::new(664, 664, true));

        let out = decode_output(&icon);
        assert_eq!(out.dimensions(), (664, 664));
        for (x, y, pixel) in out.enumerate_pixels() {
            let inside = (76..588).contains(&x) && (76..588).contains(&y);
            if inside {
                assert_eq!(*pixel, Rgba([255, 0, 0, 255]), "at ({}, {})", x, y);
            } else {
                assert_eq!(pixel.0[3], 0, "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_add_padding_center_crop_matches_source() {
        let source = gradient(40, 25);
        let processor = DefaultIconProcessor::new();
        let icon = processor
            .add_padding(
                png_bytes(DynamicImage::ImageRgba8(source.clone())),
                PaddingPercent::new(0.15).unwrap(),
            )
            .unwrap();

        assert_eq!(icon.amount_px, 6);
        let out = decode_output(&icon);
        assert_eq!(out.dimensions(), (52, 37));
        let crop = imageops::crop_imm(&out, 6, 6, 40, 25).to_image();
        assert_eq!(crop, source);
    }

    #[test]
    fn test_add_padding_opaque_source_without_alpha() {
        let source = RgbImage::from_pixel(10, 20, Rgb([0, 200, 0]));
        let processor = DefaultIconProcessor::new();
        let icon = processor
            .add_padding(png_bytes(DynamicImage::ImageRgb8(source)), PaddingPercent::new(0.5).unwrap())
            .unwrap();

        assert!(!icon.source.has_alpha);
        assert_eq!(icon.amount_px, 10);
        let out = decode_output(&icon);
        assert_eq!(out.dimensions(), (30, 40));
        assert_eq!(*out.get_pixel(10, 10), Rgba([0, 200, 0, 255]));
        assert_eq!(*out.get_pixel(19, 29), Rgba([0, 200, 0, 255]));
        assert_eq!(*out.get_pixel(9, 10), Rgba([0, 0, 0, 0]));
        assert_eq!(*out.get_pixel(20, 29), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_add_padding_twice_keeps_growing() {
        let processor = DefaultIconProcessor::new();
        let percent = PaddingPercent::default();
        let first = processor
            .add_padding(png_bytes(DynamicImage::ImageRgba8(gradient(30, 30))), percent)
            .unwrap();
        let second = processor.add_padding(first.data.clone(), percent).unwrap();

        // 30 -> 30 + 2*4 = 38 -> 38 + 2*5 = 48
        assert_eq!(first.result, ImageInfo::new(38, 38, true));
        assert_eq!(second.amount_px, 5);
        assert_eq!(second.result, ImageInfo::new(48, 48, true));

        let previous = decode_output(&first);
        let out = decode_output(&second);
        let crop = imageops::crop_imm(&out, 5, 5, 38, 38).to_image();
        assert_eq!(crop, previous);
    }

    #[test]
    fn test_add_rounded_corners_blue_square() {
        let processor = DefaultIconProcessor::new();
        let icon = processor
            .add_rounded_corners(solid_square(512, [0, 0, 255, 255]), CornerRadiusPercent::default())
            .unwrap();

        assert_eq!(icon.amount_px, 112);
        assert_eq!(icon.result, ImageInfo::new(512, 512, true));

        let out = decode_output(&icon);
        assert_eq!(out.dimensions(), (512, 512));
        for (x, y) in [(0, 0), (511, 0), (0, 511), (511, 511)] {
            assert_eq!(out.get_pixel(x, y).0[3], 0, "corner ({}, {})", x, y);
        }
        // 色はそのまま、アルファだけ置き換わる
        assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 255, 0]));
        assert_eq!(*out.get_pixel(256, 256), Rgba([0, 0, 255, 255]));
        assert_eq!(out.get_pixel(0, 256).0[3], 255);
        assert_eq!(out.get_pixel(256, 0).0[3], 255);
    }

    #[test]
    fn test_add_rounded_corners_interior_is_opaque() {
        let (width, height) = (40u32, 30u32);
        let processor = DefaultIconProcessor::new();
        let icon = processor
            .add_rounded_corners(
                png_bytes(DynamicImage::ImageRgba8(gradient(width, height))),
                CornerRadiusPercent::new(0.22).unwrap(),
            )
            .unwrap();
        let radius = icon.amount_px as f64;
        assert_eq!(icon.amount_px, 6);

        let out = decode_output(&icon);
        assert_eq!(out.dimensions(), (width, height));
        let corners = [
            (0.0, 0.0),
            ((width - 1) as f64, 0.0),
            (0.0, (height - 1) as f64),
            ((width - 1) as f64, (height - 1) as f64),
        ];
        for (x, y, pixel) in out.enumerate_pixels() {
            let nearest = corners
                .iter()
                .map(|(cx, cy)| ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt())
                .fold(f64::INFINITY, f64::min);
            if nearest > radius {
                assert_eq!(pixel.0[3], 255, "at ({}, {})", x, y);
            }
        }
        for (cx, cy) in corners {
            assert_eq!(out.get_pixel(cx as u32, cy as u32).0[3], 0);
        }
    }

    #[test]
    fn test_add_rounded_corners_replaces_source_alpha() {
        let processor = DefaultIconProcessor::new();
        let icon = processor
            .add_rounded_corners(solid_square(50, [10, 20, 30, 40]), CornerRadiusPercent::default())
            .unwrap();
        let out = decode_output(&icon);
        assert_eq!(*out.get_pixel(25, 25), Rgba([10, 20, 30, 255]));
        assert_eq!(*out.get_pixel(0, 0), Rgba([10, 20, 30, 0]));
    }

    #[test]
    fn test_add_rounded_corners_zero_radius_keeps_everything() {
        let processor = DefaultIconProcessor::new();
        let icon = processor
            .add_rounded_corners(solid_square(16, [1, 2, 3, 4]), CornerRadiusPercent::new(0.0).unwrap())
            .unwrap();
        assert_eq!(icon.amount_px, 0);
        let out = decode_output(&icon);
        assert!(out.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_rounded_rect_mask_single_pixel() {
        let mask = rounded_rect_mask(1, 1, 3);
        assert_eq!(mask.get_pixel(0, 0).0[0], 255);
    }

    #[test]
    fn test_rounded_rect_mask_edges_are_straight_between_corners() {
        let mask = rounded_rect_mask(100, 60, 10);
        for x in 10..90 {
            assert_eq!(mask.get_pixel(x, 0).0[0], 255);
            assert_eq!(mask.get_pixel(x, 59).0[0], 255);
        }
        for y in 10..50 {
            assert_eq!(mask.get_pixel(0, y).0[0], 255);
            assert_eq!(mask.get_pixel(99, y).0[0], 255);
        }
        assert_eq!(mask.get_pixel(0, 0).0[0], 0);
        assert_eq!(mask.get_pixel(99, 59).0[0], 0);
    }

    #[test]
    fn test_invalid_image_data() {
        let processor = DefaultIconProcessor::new();
        let result = processor.add_padding(vec![1, 2, 3, 4], PaddingPercent::default());
        match result {
            Err(InfrastructureError::ImageLibError(_)) | Err(InfrastructureError::IoError(_)) => {}
            other => panic!("Expected ImageLibError or IoError, got {:?}", other),
        }
        let result = processor.add_rounded_corners(Vec::new(), CornerRadiusPercent::default());
        assert!(result.is_err());
    }
}
