//! Binary PPM (P6) codec, maxval 255.

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;
