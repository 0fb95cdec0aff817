//! Deterministic schedulers for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::{FrameHandle, FrameScheduler, TimerHandle, Timers};

/// Frame scheduler stepped by hand with [`ManualFrames::run_frame`].
#[derive(Default)]
pub struct ManualFrames {
	next_id: Cell<i32>,
	queue: RefCell<Vec<(FrameHandle, Box<dyn FnOnce()>)>>,
	refuse: Cell<bool>,
}

impl ManualFrames {
	/// Make every following `request_frame` fail.
	pub fn refuse(&self, refuse: bool) {
		self.refuse.set(refuse);
	}

	/// Run every callback queued before this call. Returns how many ran.
	pub fn run_frame(&self) -> usize {
		let batch = std::mem::take(&mut *self.queue.borrow_mut());
		let ran = batch.len();
		for (_, callback) in batch {
			callback();
		}
		ran
	}

	/// Callbacks still queued.
	pub fn pending(&self) -> usize {
		self.queue.borrow().len()
	}
}

impl FrameScheduler for ManualFrames {
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle> {
		if self.refuse.get() {
			return None;
		}
		let id = self.next_id.get() + 1;
		self.next_id.set(id);
		let handle = FrameHandle::new(id);
		self.queue.borrow_mut().push((handle, callback));
		Some(handle)
	}

	fn cancel_frame(&self, handle: FrameHandle) {
		self.queue.borrow_mut().retain(|(h, _)| *h != handle);
	}
}

/// Timer queue on a virtual millisecond clock moved with [`ManualTimers::advance`].
#[derive(Default)]
pub struct ManualTimers {
	now: Cell<u64>,
	next_id: Cell<i32>,
	/// Keyed by (due time, id) so equal deadlines fire in scheduling order.
	queue: RefCell<BTreeMap<(u64, i32), Box<dyn FnOnce()>>>,
}

impl ManualTimers {
	/// Current virtual time in milliseconds.
	pub fn now(&self) -> u64 {
		self.now.get()
	}

	/// Move the clock forward, firing due callbacks in deadline order.
	/// Callbacks scheduled while advancing fire too if they fall inside the step.
	pub fn advance(&self, ms: u64) {
		let target = self.now.get() + ms;
		loop {
			let next_due = self.queue.borrow().keys().next().map(|&(due, _)| due);
			let Some(due) = next_due.filter(|&due| due <= target) else {
				break;
			};
			let Some((_, callback)) = self.queue.borrow_mut().pop_first() else {
				break;
			};
			self.now.set(due);
			callback();
		}
		self.now.set(target);
	}

	/// Timeouts not yet fired or cleared.
	pub fn pending(&self) -> usize {
		self.queue.borrow().len()
	}
}

impl Timers for ManualTimers {
	fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Option<TimerHandle> {
		let id = self.next_id.get() + 1;
		self.next_id.set(id);
		let due = self.now.get() + u64::from(delay_ms);
		self.queue.borrow_mut().insert((due, id), callback);
		Some(TimerHandle::new(id))
	}

	fn clear_timeout(&self, handle: TimerHandle) {
		self.queue.borrow_mut().retain(|&(_, id), _| id != handle.id());
	}
}

/// Timer source that refuses every timeout.
pub struct RefusingTimers;

impl Timers for RefusingTimers {
	fn set_timeout(&self, _delay_ms: u32, _callback: Box<dyn FnOnce()>) -> Option<TimerHandle> {
		None
	}

	fn clear_timeout(&self, _handle: TimerHandle) {}
}
