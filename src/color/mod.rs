mod utils;

use smart_leds::RGB8;

pub use utils::{color24_to_16bit, interpolate, pack, rgb_from_u32, rgb_to_u32, unpack, wheel};

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
