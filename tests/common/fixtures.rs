//! Test images and configuration snippets.

use base64::Engine;
use std::path::{Path, PathBuf};

/// Encode 8-bit pixel data as PNG with the given color type
pub fn encode_png(data: &[u8], width: u32, height: u32, color: png::ColorType) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(data).expect("PNG data");
    }
    buf
}

/// Horizontal red ramp over a vertical blue ramp, RGB
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 255 / (width - 1).max(1)) as u8);
            data.push(96);
            data.push((y * 255 / (height - 1).max(1)) as u8);
        }
    }
    encode_png(&data, width, height, png::ColorType::Rgb)
}

/// Single-color RGB image
pub fn solid_png(rgb: [u8; 3], width: u32, height: u32) -> Vec<u8> {
    let data: Vec<u8> = (0..width * height).flat_map(|_| rgb).collect();
    encode_png(&data, width, height, png::ColorType::Rgb)
}

/// Wrap PNG bytes the way a browser upload does
pub fn data_url(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}

/// Write `contents` to `name` inside `dir` and return the path
pub fn write_file(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

/// Small configuration used by the CLI-level tests
pub const SMALL_CONFIG: &str = r#"
grid_width: 8
grid_height: 12
block_size: 4
optimize_png: false
variants:
  - EUKLID
  - CIEDE_FLOYD_GRAYSCALES
"#;
