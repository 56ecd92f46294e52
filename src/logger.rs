//! Logging collaborator
//!
//! Log delivery is fire-and-forget: the engine never inspects the outcome.

use core::fmt::{Display, Write};

use heapless::String;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Maximum length of a single log line, longer messages are cut
pub const LOG_LINE_CAPACITY: usize = 64;

/// Sink for diagnostic messages
pub trait Logger {
    /// Deliver one message
    fn log(&mut self, message: &str);
}

impl<L: Logger + ?Sized> Logger for &mut L {
    fn log(&mut self, message: &str) {
        (**self).log(message);
    }
}

/// Logger that drops every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&mut self, _message: &str) {}
}

/// Logger that prints to the serial console
#[cfg(feature = "esp32-log")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintLogger;

#[cfg(feature = "esp32-log")]
impl Logger for PrintLogger {
    fn log(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Format `value` into a fixed line and send it to `logger`
pub(crate) fn log_display<L: Logger, T: Display>(logger: &mut L, value: &T) {
    let mut line: String<LOG_LINE_CAPACITY> = String::new();
    // A full buffer only truncates the line
    let _ = write!(line, "{}", value);
    logger.log(&line);
}
