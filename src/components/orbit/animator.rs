//! Per-frame driver moving the orbiting elements.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use web_sys::HtmlElement;

use super::metrics::SharedRadii;
use super::state::{OrbitParams, OrbitState, Translation};
use crate::scheduler::{FrameLoop, FrameScheduler};

/// Something the animator can move.
pub trait OrbitTarget {
	/// Place the element at `translation` from the orbit center.
	fn translate(&self, translation: Translation);
}

impl OrbitTarget for HtmlElement {
	fn translate(&self, translation: Translation) {
		let _ = self.style().set_property("transform", &translation.to_css());
	}
}

/// Owns the orbit state and the frame loop that advances it.
pub struct OrbitAnimator<E: OrbitTarget + 'static> {
	state: Rc<RefCell<OrbitState>>,
	elements: Rc<[E]>,
	params: OrbitParams,
	frame_loop: FrameLoop,
}

impl<E: OrbitTarget + 'static> OrbitAnimator<E> {
	/// `None` when there is nothing to orbit.
	pub fn new(
		elements: Vec<E>,
		radii: SharedRadii,
		params: OrbitParams,
		frames: Rc<dyn FrameScheduler>,
	) -> Option<Self> {
		if elements.is_empty() {
			return None;
		}
		let state = OrbitState::new(elements.len(), radii);
		Some(Self {
			state: Rc::new(RefCell::new(state)),
			elements: elements.into(),
			params,
			frame_loop: FrameLoop::new(frames),
		})
	}

	/// Start (or restart) the loop. A running loop is cancelled first.
	pub fn start(&self) {
		let (state, elements, params) = (
			Rc::clone(&self.state),
			Rc::clone(&self.elements),
			self.params,
		);
		self.frame_loop.start(move || {
			let mut state = state.borrow_mut();
			state.advance(&params);
			for (element, translation) in elements.iter().zip(state.translations(&params)) {
				element.translate(translation);
			}
		});
		info!(
			"portfolio-motion: orbit running with {} elements",
			self.elements.len()
		);
	}

	/// Stop moving; elements keep their last placement.
	pub fn stop(&self) {
		self.frame_loop.stop();
	}

	/// Whether a frame is scheduled.
	pub fn is_running(&self) -> bool {
		self.frame_loop.is_running()
	}

	/// Current orbit angle.
	pub fn angle(&self) -> f64 {
		self.state.borrow().angle()
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;
	use crate::components::orbit::metrics::OrbitRadii;
	use crate::scheduler::testing::ManualFrames;

	#[derive(Default)]
	struct Icon {
		moves: Cell<u32>,
		last: Cell<Translation>,
	}

	impl OrbitTarget for Rc<Icon> {
		fn translate(&self, translation: Translation) {
			self.moves.set(self.moves.get() + 1);
			self.last.set(translation);
		}
	}

	const PARAMS: OrbitParams = OrbitParams {
		speed: 0.005,
		bobbing_amplitude: 10.0,
		bobbing_speed: 2.0,
	};

	fn setup(n: usize) -> (Rc<ManualFrames>, Vec<Rc<Icon>>, OrbitAnimator<Rc<Icon>>) {
		let frames = Rc::new(ManualFrames::default());
		let icons: Vec<Rc<Icon>> = (0..n).map(|_| Rc::new(Icon::default())).collect();
		let animator = OrbitAnimator::new(
			icons.clone(),
			SharedRadii::new(OrbitRadii { x: 100.0, y: 80.0 }),
			PARAMS,
			frames.clone(),
		)
		.unwrap();
		(frames, icons, animator)
	}

	#[test]
	fn no_elements_no_animator() {
		let frames = Rc::new(ManualFrames::default());
		let animator = OrbitAnimator::<Rc<Icon>>::new(
			Vec::new(),
			SharedRadii::default(),
			PARAMS,
			frames.clone(),
		);
		assert!(animator.is_none());
		assert_eq!(frames.pending(), 0);
	}

	#[test]
	fn every_frame_moves_every_element_once() {
		let (frames, icons, animator) = setup(3);
		animator.start();
		for _ in 0..4 {
			frames.run_frame();
		}
		for icon in &icons {
			assert_eq!(icon.moves.get(), 5);
		}
		assert!((animator.angle() - 5.0 * 0.005).abs() < 1e-12);
	}

	#[test]
	fn restart_does_not_double_update() {
		let (frames, icons, animator) = setup(2);
		animator.start();
		animator.start();
		animator.start();
		assert_eq!(frames.pending(), 1);

		frames.run_frame();
		// Three immediate ticks from the starts plus one frame.
		assert_eq!(icons[0].moves.get(), 4);
		frames.run_frame();
		assert_eq!(icons[0].moves.get(), 5);
	}

	#[test]
	fn stop_freezes_positions() {
		let (frames, icons, animator) = setup(2);
		animator.start();
		animator.stop();
		let before = icons[1].last.get();

		frames.run_frame();
		assert!(!animator.is_running());
		assert_eq!(icons[1].last.get(), before);
	}

	#[test]
	fn applied_translation_matches_orbit_math() {
		let (_frames, icons, animator) = setup(2);
		animator.start();

		let angle = animator.angle();
		let theta = angle + std::f64::consts::PI;
		let bob = (angle * 2.0 + 1.0).sin() * 10.0;
		let t = icons[1].last.get();
		assert!((t.x - 100.0 * theta.cos()).abs() < 1e-9);
		assert!((t.y - (80.0 * theta.sin() + bob)).abs() < 1e-9);
	}
}
