//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert bytes are a PNG of the given size, returning the decoded pixels
pub fn assert_png(bytes: &[u8], width: u32, height: u32) -> Vec<u8> {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );

    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::ALPHA);
    let mut reader = decoder.read_info().expect("decodable PNG");
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("PNG frame");

    assert_eq!((info.width, info.height), (width, height), "PNG dimensions");
    buf.truncate(info.buffer_size());
    buf
}
