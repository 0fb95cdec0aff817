//! `window`-backed schedulers.
//!
//! Callbacks are handed to the browser as one-shot closures; wasm-bindgen frees
//! them after they run. A cancelled closure is never invoked and stays leaked,
//! which only happens on loop restarts and debounce resets.

use js_sys::Function;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::{FrameHandle, FrameScheduler, TimerHandle, Timers};

/// `requestAnimationFrame` / `cancelAnimationFrame`.
pub struct BrowserFrames {
	window: Window,
}

impl BrowserFrames {
	/// Bind to the global window. `None` outside a browser context.
	pub fn new() -> Option<Self> {
		Some(Self {
			window: web_sys::window()?,
		})
	}
}

impl FrameScheduler for BrowserFrames {
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle> {
		let closure = Closure::once_into_js(move || callback());
		let function: &Function = closure.unchecked_ref();
		match self.window.request_animation_frame(function) {
			Ok(id) => Some(FrameHandle::new(id)),
			Err(e) => {
				warn!("portfolio-motion: requestAnimationFrame failed: {:?}", e);
				None
			}
		}
	}

	fn cancel_frame(&self, handle: FrameHandle) {
		let _ = self.window.cancel_animation_frame(handle.id());
	}
}

/// `setTimeout` / `clearTimeout`.
pub struct BrowserTimers {
	window: Window,
}

impl BrowserTimers {
	/// Bind to the global window. `None` outside a browser context.
	pub fn new() -> Option<Self> {
		Some(Self {
			window: web_sys::window()?,
		})
	}
}

impl Timers for BrowserTimers {
	fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Option<TimerHandle> {
		let closure = Closure::once_into_js(move || callback());
		let function: &Function = closure.unchecked_ref();
		let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
		match self
			.window
			.set_timeout_with_callback_and_timeout_and_arguments_0(function, delay)
		{
			Ok(id) => Some(TimerHandle::new(id)),
			Err(e) => {
				warn!("portfolio-motion: setTimeout failed: {:?}", e);
				None
			}
		}
	}

	fn clear_timeout(&self, handle: TimerHandle) {
		self.window.clear_timeout_with_handle(handle.id());
	}
}
