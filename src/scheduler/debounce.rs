//! Trailing-edge debounce.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;

use super::{TimerHandle, Timers};

/// Collapses a burst of triggers into one call of `action`, fired once no
/// trigger has arrived for `quiet_ms`.
///
/// Each trigger clears the pending timeout and arms a fresh one. If the host
/// refuses the timeout, `action` runs right away. Clones share the same
/// pending timer and action.
#[derive(Clone)]
pub struct Debouncer {
	timers: Rc<dyn Timers>,
	quiet_ms: u32,
	pending: Rc<Cell<Option<TimerHandle>>>,
	action: Rc<RefCell<dyn FnMut()>>,
}

impl Debouncer {
	/// Debouncer running `action` after `quiet_ms` without triggers.
	pub fn new(timers: Rc<dyn Timers>, quiet_ms: u32, action: impl FnMut() + 'static) -> Self {
		Self {
			timers,
			quiet_ms,
			pending: Rc::new(Cell::new(None)),
			action: Rc::new(RefCell::new(action)),
		}
	}

	/// Restart the quiet window.
	pub fn trigger(&self) {
		self.cancel();
		let (pending, action) = (Rc::clone(&self.pending), Rc::clone(&self.action));
		let handle = self.timers.set_timeout(
			self.quiet_ms,
			Box::new(move || {
				pending.set(None);
				(&mut *action.borrow_mut())();
			}),
		);
		if handle.is_none() {
			warn!("portfolio-motion: could not arm debounce timer, running now");
			(&mut *self.action.borrow_mut())();
			return;
		}
		self.pending.set(handle);
	}

	/// Drop the pending call, if any.
	pub fn cancel(&self) {
		if let Some(handle) = self.pending.take() {
			self.timers.clear_timeout(handle);
		}
	}

	/// Whether a call is armed.
	pub fn is_pending(&self) -> bool {
		self.pending.get().is_some()
	}
}
