//! Device access shared between tasks or interrupts.
//!
//! Every setter and draw pass runs inside a critical section, so a draw
//! never observes a half-written target buffer.

use core::cell::RefCell;

use critical_section::Mutex;

/// A device guarded by a critical section
///
/// Writes arriving between two draws coalesce: only the latest target
/// values are rendered.
pub struct SharedDevice<Dev> {
    inner: Mutex<RefCell<Dev>>,
}

impl<Dev> SharedDevice<Dev> {
    /// Wrap a device
    pub const fn new(device: Dev) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(device)),
        }
    }

    /// Run `f` with exclusive access to the device
    ///
    /// Calls must not nest.
    pub fn with<R>(&self, f: impl FnOnce(&mut Dev) -> R) -> R {
        critical_section::with(|cs| {
            let mut device = self.inner.borrow(cs).borrow_mut();
            f(&mut device)
        })
    }

    /// Take the device back
    pub fn into_inner(self) -> Dev {
        self.inner.into_inner().into_inner()
    }
}
