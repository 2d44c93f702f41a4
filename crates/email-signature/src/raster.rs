//! Rasterization of downloaded icons into square PNG assets.

use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use resvg::{tiny_skia, usvg};

use crate::types::{IconError, IconResult};

/// Turns source image bytes into PNG bytes of a fixed square size.
pub trait IconRasterizer: Send + Sync {
    fn rasterize(&self, bytes: &[u8], size: u32) -> IconResult<Vec<u8>>;
}

/// Renders SVG with resvg; falls back to the `image` crate for bitmap input.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResvgRasterizer;

impl IconRasterizer for ResvgRasterizer {
    fn rasterize(&self, bytes: &[u8], size: u32) -> IconResult<Vec<u8>> {
        if size == 0 {
            return Err(IconError::Render("icon size must be non-zero".to_string()));
        }

        if image::guess_format(bytes).is_ok() {
            resize_bitmap(bytes, size)
        } else {
            render_svg(bytes, size)
        }
    }
}

/// Render an SVG scaled to cover a `size`×`size` square, centred.
fn render_svg(bytes: &[u8], size: u32) -> IconResult<Vec<u8>> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| IconError::Decode(format!("Invalid SVG: {e}")))?;

    let svg_w = tree.size().width();
    let svg_h = tree.size().height();
    let target = size as f32;
    let scale = (target / svg_w).max(target / svg_h);
    let tx = (target - svg_w * scale) / 2.0;
    let ty = (target - svg_h * scale) / 2.0;

    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| IconError::Render(format!("Failed to allocate {size}x{size} pixmap")))?;
    let transform = tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, tx, ty);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| IconError::Render(format!("PNG encoding failed: {e}")))
}

/// Decode a bitmap, crop-resize it to fill the square, re-encode as PNG.
fn resize_bitmap(bytes: &[u8], size: u32) -> IconResult<Vec<u8>> {
    let img = image::load_from_memory(bytes)?;
    let resized = img.resize_to_fill(size, size, FilterType::Lanczos3);

    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    resized
        .write_with_encoder(encoder)
        .map_err(|e| IconError::Render(format!("PNG encoding failed: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    const ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24"><path d="M20 4H4c-1.1 0-2 .9-2 2v12c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2z"/></svg>"#;

    fn png_of(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::new_rgb8(width, height);
        let mut buf = Vec::new();
        img.write_with_encoder(PngEncoder::new(&mut buf)).unwrap();
        buf
    }

    #[test]
    fn test_svg_renders_at_size() {
        let png = ResvgRasterizer.rasterize(ICON_SVG.as_bytes(), 24).unwrap();
        let loaded = image::load_from_memory(&png).unwrap();
        assert_eq!(loaded.dimensions(), (24, 24));
    }

    #[test]
    fn test_svg_upscales() {
        let png = ResvgRasterizer.rasterize(ICON_SVG.as_bytes(), 96).unwrap();
        let loaded = image::load_from_memory(&png).unwrap();
        assert_eq!(loaded.dimensions(), (96, 96));
        // The path covers most of the viewBox, so something was drawn.
        assert!(loaded.to_rgba8().pixels().any(|p| p.0[3] > 0));
    }

    #[test]
    fn test_bitmap_is_cropped_square() {
        let png = ResvgRasterizer.rasterize(&png_of(100, 50), 24).unwrap();
        let loaded = image::load_from_memory(&png).unwrap();
        assert_eq!(loaded.dimensions(), (24, 24));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = ResvgRasterizer.rasterize(b"not an image", 24).unwrap_err();
        assert!(matches!(err, IconError::Decode(_)));
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = ResvgRasterizer.rasterize(ICON_SVG.as_bytes(), 0).unwrap_err();
        assert!(matches!(err, IconError::Render(_)));
    }
}
