//! 3x5 pixel glyphs for the matrix
//!
//! Each glyph is five rows, top first. Bit 2 of a row is the left column.

/// Glyph width in pixels
pub const GLYPH_WIDTH: u8 = 3;
/// Glyph height in pixels
pub const GLYPH_HEIGHT: u8 = 5;

pub type Glyph = [u8; GLYPH_HEIGHT as usize];

/// Digits 0-9
pub static DIGITS: [Glyph; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

const CHAR_I: Glyph = [0b111, 0b010, 0b010, 0b010, 0b111];
const CHAR_P: Glyph = [0b111, 0b101, 0b111, 0b100, 0b100];

/// Glyph for a digit
pub fn digit(number: u8) -> Option<&'static Glyph> {
    DIGITS.get(usize::from(number))
}

/// Glyph for a letter
///
/// Only `I` and `P` exist; anything else renders as `I`.
pub const fn letter(character: char) -> &'static Glyph {
    match character {
        'P' => &CHAR_P,
        _ => &CHAR_I,
    }
}

/// Iterate the lit `(column, row)` offsets of a glyph
pub fn lit_pixels(glyph: &Glyph) -> impl Iterator<Item = (u8, u8)> + '_ {
    (0..GLYPH_HEIGHT).flat_map(move |row| {
        (0..GLYPH_WIDTH).filter_map(move |column| {
            let bit = GLYPH_WIDTH - 1 - column;
            ((glyph[usize::from(row)] >> bit) & 1 == 1).then_some((column, row))
        })
    })
}
