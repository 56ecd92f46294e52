#![allow(dead_code)]

use myrtio_frame_engine::{GridPoint, Logger, OutputDriver};

/// Strip driver that remembers everything it was asked to do
#[derive(Debug, Default)]
pub struct StripRecorder {
    pub begun: bool,
    pub pixels: Vec<(u16, u32)>,
    pub brightness: Vec<u8>,
    pub shows: usize,
}

impl StripRecorder {
    pub fn last_brightness(&self) -> Option<u8> {
        self.brightness.last().copied()
    }

    /// Color staged for `address` during the most recent frame
    pub fn staged(&self, address: u16) -> Option<u32> {
        self.pixels
            .iter()
            .rev()
            .find(|(staged, _)| *staged == address)
            .map(|(_, color)| *color)
    }
}

impl OutputDriver for StripRecorder {
    type Address = u16;
    type Color = u32;

    fn begin(&mut self) {
        self.begun = true;
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness.push(brightness);
    }

    fn set_pixel(&mut self, address: u16, color: u32) {
        self.pixels.push((address, color));
    }

    fn show(&mut self) {
        self.shows += 1;
    }
}

/// Matrix driver that remembers everything it was asked to do
#[derive(Debug, Default)]
pub struct MatrixRecorder {
    pub pixels: Vec<(GridPoint, u16)>,
    pub brightness: Vec<u8>,
    pub shows: usize,
}

impl OutputDriver for MatrixRecorder {
    type Address = GridPoint;
    type Color = u16;

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness.push(brightness);
    }

    fn set_pixel(&mut self, address: GridPoint, color: u16) {
        self.pixels.push((address, color));
    }

    fn show(&mut self) {
        self.shows += 1;
    }
}

/// Logger that keeps every line
#[derive(Debug, Default)]
pub struct RecordingLogger {
    pub lines: Vec<String>,
}

impl Logger for RecordingLogger {
    fn log(&mut self, message: &str) {
        self.lines.push(message.to_owned());
    }
}
