pub mod input;
pub mod png_codec;

pub use input::{decode_input, load_image};
pub use png_codec::{decode_png, encode_rgba, optimize_png};
