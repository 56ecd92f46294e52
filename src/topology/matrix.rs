use super::Topology;
use crate::color::{Rgb, color24_to_16bit};

/// Number of minute indicator LEDs wired after the grid
pub const INDICATOR_COUNT: usize = 4;

/// Coordinate in the matrix driver's own addressing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPoint {
    pub x: u8,
    pub y: u8,
}

/// `W x H` grid followed by [`INDICATOR_COUNT`] indicator pixels
///
/// Grid pixel `(x, y)` is logical index `y * W + x`. Indicator `i` is logical
/// index `W * H + i` and sits at `(W - 1 - i, H)`, the row below the grid.
/// `W` must be at least [`INDICATOR_COUNT`]; narrower grids fail to compile.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixTopology<const W: usize, const H: usize>;

impl<const W: usize, const H: usize> MatrixTopology<W, H> {
    const FITS_INDICATORS: () = assert!(
        W >= INDICATOR_COUNT,
        "matrix is narrower than the indicator row"
    );

    /// Total logical pixels, grid plus indicators
    pub const PIXELS: usize = {
        let () = Self::FITS_INDICATORS;
        W * H + INDICATOR_COUNT
    };

    /// Logical index of a grid coordinate, if it is inside the grid
    pub const fn grid_index(x: u8, y: u8) -> Option<usize> {
        let (x, y) = (x as usize, y as usize);
        if x < W && y < H {
            Some(y * W + x)
        } else {
            None
        }
    }

    /// Logical index of indicator `i`
    pub const fn indicator_index(indicator: usize) -> Option<usize> {
        if indicator < INDICATOR_COUNT {
            Some(W * H + indicator)
        } else {
            None
        }
    }
}

impl<const W: usize, const H: usize> Topology for MatrixTopology<W, H> {
    type Address = GridPoint;
    type Color = u16;

    fn pixel_count(&self) -> usize {
        Self::PIXELS
    }

    #[allow(clippy::cast_possible_truncation)]
    fn address(&self, index: usize) -> GridPoint {
        let grid = W * H;
        if index < grid {
            GridPoint {
                x: (index % W) as u8,
                y: (index / W) as u8,
            }
        } else {
            let () = Self::FITS_INDICATORS;
            let indicator = index - grid;
            GridPoint {
                x: (W - 1 - indicator) as u8,
                y: H as u8,
            }
        }
    }

    fn encode(color: Rgb) -> u16 {
        color24_to_16bit(color)
    }
}
