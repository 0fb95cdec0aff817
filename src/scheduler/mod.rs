//! Frame and timer scheduling.
//!
//! Components never touch `requestAnimationFrame` or `setTimeout` directly.
//! They receive an `Rc<dyn FrameScheduler>` / `Rc<dyn Timers>` at construction,
//! which the page wires to [`BrowserFrames`] / [`BrowserTimers`] and unit tests
//! wire to the manual schedulers in `testing`.
//!
//! Everything runs on the page's single event loop: callbacks run to completion
//! and are never re-entered, so shared state lives in `Rc<Cell<_>>` /
//! `Rc<RefCell<_>>` rather than behind locks.

mod browser;
mod debounce;
mod frame_loop;
#[cfg(test)]
pub(crate) mod testing;

pub use browser::{BrowserFrames, BrowserTimers};
pub use debounce::Debouncer;
pub use frame_loop::FrameLoop;

/// Handle to a pending animation-frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(i32);

impl FrameHandle {
	pub(crate) fn new(id: i32) -> Self {
		Self(id)
	}

	/// Raw id as returned by the host.
	pub fn id(self) -> i32 {
		self.0
	}
}

/// Handle to a pending timeout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(i32);

impl TimerHandle {
	pub(crate) fn new(id: i32) -> Self {
		Self(id)
	}

	/// Raw id as returned by the host.
	pub fn id(self) -> i32 {
		self.0
	}
}

/// Schedules a callback to run before the next repaint.
pub trait FrameScheduler {
	/// Queue `callback` for the next frame. Returns `None` if the host refused.
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle>;

	/// Drop a queued callback. Unknown or already-fired handles are ignored.
	fn cancel_frame(&self, handle: FrameHandle);
}

/// Schedules a callback after a delay.
pub trait Timers {
	/// Run `callback` after `delay_ms` milliseconds. Returns `None` if the host refused.
	fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Option<TimerHandle>;

	/// Drop a pending timeout. Unknown or already-fired handles are ignored.
	fn clear_timeout(&self, handle: TimerHandle);
}
