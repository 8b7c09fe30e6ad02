use crate::error::RenderError;
use mosaic_core::{PixelBuffer, Rgb};
use std::io::Cursor;

/// The eight bytes every PNG stream starts with
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Decode PNG bytes into an opaque RGB pixel buffer.
///
/// Palette and low-bit images are expanded and 16-bit channels stripped to
/// 8 bits. Grayscale is widened to RGB and alpha is composited onto white.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, RenderError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| RenderError::Decode(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| RenderError::Decode(e.to_string()))?;

    if info.bit_depth != png::BitDepth::Eight {
        return Err(RenderError::UnsupportedImage(format!(
            "bit depth {:?} after expansion",
            info.bit_depth
        )));
    }

    let to_rgb: fn(&[u8]) -> Rgb = match info.color_type {
        png::ColorType::Rgb => |p| Rgb::new(p[0], p[1], p[2]),
        png::ColorType::Rgba => |p| composite_on_white([p[0], p[1], p[2]], p[3]),
        png::ColorType::Grayscale => |p| Rgb::new(p[0], p[0], p[0]),
        png::ColorType::GrayscaleAlpha => |p| composite_on_white([p[0], p[0], p[0]], p[1]),
        other => {
            return Err(RenderError::UnsupportedImage(format!(
                "color type {:?}",
                other
            )))
        }
    };

    let width = info.width as usize;
    let height = info.height as usize;
    let channels = info.color_type.samples();

    let mut pixels = Vec::with_capacity(width * height);
    for row in buf[..info.buffer_size()].chunks(info.line_size).take(height) {
        pixels.extend(row[..width * channels].chunks_exact(channels).map(to_rgb));
    }

    Ok(PixelBuffer::new(pixels, width, height)?)
}

/// Blend a straight-alpha color over a white background
fn composite_on_white(rgb: [u8; 3], alpha: u8) -> Rgb {
    let a = alpha as u32;
    let blend = |c: u8| ((c as u32 * a + 255 * (255 - a) + 127) / 255) as u8;
    Rgb::new(blend(rgb[0]), blend(rgb[1]), blend(rgb[2]))
}

/// Encode an 8-bit RGBA raster as PNG.
///
/// Uses fast settings; pass the result through [`optimize_png`] for a
/// smaller file.
pub fn encode_rgba(rgba: &[u8], width: usize, height: usize) -> Result<Vec<u8>, RenderError> {
    if rgba.len() != width * height * 4 {
        return Err(RenderError::Encode(format!(
            "expected {} RGBA bytes for {}x{}, got {}",
            width * height * 4,
            width,
            height,
            rgba.len()
        )));
    }
    let w = u32::try_from(width).map_err(|e| RenderError::Encode(e.to_string()))?;
    let h = u32::try_from(height).map_err(|e| RenderError::Encode(e.to_string()))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, w, h);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        writer
            .write_image_data(rgba)
            .map_err(|e| RenderError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Re-compress with oxipng, keeping the input if optimization fails
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => optimized,
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping fast encoding");
            png_bytes
        }
    }
}
