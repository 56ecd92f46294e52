//! Concrete LED devices built on the generic [`Device`](crate::Device)

mod calendar;
mod matrix;
mod ring;

use crate::config::{MATRIX_HEIGHT, MATRIX_PIXEL_COUNT, MATRIX_WIDTH, RING_LED_COUNT};
use crate::device::Device;
use crate::topology::{CALENDAR_LED_COUNT, MatrixTopology, RotatedStrip};

/// Calendar strip: weekday, day of month and month zones
pub type Calendar<D, L> = Device<RotatedStrip, D, L, CALENDAR_LED_COUNT>;

/// Ring clock face
pub type Ring<D, L> = Device<RotatedStrip, D, L, RING_LED_COUNT>;

/// 11x11 word clock matrix with four minute indicators
pub type Matrix<D, L> =
    Device<MatrixTopology<MATRIX_WIDTH, MATRIX_HEIGHT>, D, L, MATRIX_PIXEL_COUNT>;
