use crate::color::Rgb;
use crate::math8::lerp8;

/// Pack three channels into a 24-bit color value (`0xRRGGBB`)
#[inline]
pub const fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Split a 24-bit color value into its `(r, g, b)` channels
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    let (r, g, b) = unpack(color);
    Rgb { r, g, b }
}

/// Convert an RGB color to a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    pack(color.r, color.g, color.b)
}

/// Rainbow color wheel
///
/// Walks red -> blue -> green -> red in three 85-step segments, so
/// `wheel(255)` and `wheel(0)` are neighbours on a closed loop.
pub const fn wheel(position: u8) -> Rgb {
    let mut pos = 255 - position;
    if pos < 85 {
        return Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        };
    }
    if pos < 170 {
        pos -= 85;
        return Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        };
    }
    pos -= 170;
    Rgb {
        r: pos * 3,
        g: 255 - pos * 3,
        b: 0,
    }
}

/// Move `from` towards `to` by `factor` (0.0 = stay, 1.0 = arrive)
///
/// Every channel uses [`lerp8`], so a non-zero factor always advances by at
/// least one step and never overshoots.
#[inline]
pub fn interpolate(from: Rgb, to: Rgb, factor: f32) -> Rgb {
    Rgb {
        r: lerp8(from.r, to.r, factor),
        g: lerp8(from.g, to.g, factor),
        b: lerp8(from.b, to.b, factor),
    }
}

/// Down-sample a color to RGB565 by keeping the high bits of each channel
#[inline]
pub const fn color24_to_16bit(color: Rgb) -> u16 {
    ((color.r as u16 & 0xF8) << 8) | ((color.g as u16 & 0xFC) << 3) | (color.b as u16 >> 3)
}
