//! Self-rescheduling per-frame loop with explicit start/stop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{FrameHandle, FrameScheduler};

type Tick = Rc<RefCell<dyn FnMut()>>;

struct LoopShared {
	scheduler: Rc<dyn FrameScheduler>,
	/// Bumped on every start/stop; callbacks from older generations do nothing.
	generation: Cell<u64>,
	handle: Cell<Option<FrameHandle>>,
	running: Cell<bool>,
}

/// Runs a tick once per animation frame until stopped.
///
/// Starting an already running loop replaces it: the pending frame of the old
/// loop is cancelled before the new tick is installed, so the two never both
/// run in the same frame.
pub struct FrameLoop {
	shared: Rc<LoopShared>,
}

impl FrameLoop {
	/// Idle loop on `scheduler`.
	pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
		Self {
			shared: Rc::new(LoopShared {
				scheduler,
				generation: Cell::new(0),
				handle: Cell::new(None),
				running: Cell::new(false),
			}),
		}
	}

	/// Run `tick` now and then once per frame.
	pub fn start(&self, tick: impl FnMut() + 'static) {
		self.stop();
		let generation = self.shared.generation.get();
		self.shared.running.set(true);
		let tick: Tick = Rc::new(RefCell::new(tick));
		run_frame(Rc::clone(&self.shared), generation, tick);
	}

	/// Cancel the pending frame, if any.
	pub fn stop(&self) {
		let shared = &self.shared;
		shared.generation.set(shared.generation.get().wrapping_add(1));
		shared.running.set(false);
		if let Some(handle) = shared.handle.take() {
			shared.scheduler.cancel_frame(handle);
		}
	}

	/// Whether a tick is scheduled.
	pub fn is_running(&self) -> bool {
		self.shared.running.get()
	}
}

fn run_frame(shared: Rc<LoopShared>, generation: u64, tick: Tick) {
	if shared.generation.get() != generation {
		return;
	}
	shared.handle.set(None);
	(&mut *tick.borrow_mut())();

	// The tick itself may have stopped or restarted the loop.
	if shared.generation.get() != generation {
		return;
	}
	let next = Rc::clone(&shared);
	let handle = shared
		.scheduler
		.request_frame(Box::new(move || run_frame(next, generation, tick)));
	if handle.is_none() {
		shared.running.set(false);
	}
	shared.handle.set(handle);
}
