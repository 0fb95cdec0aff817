//! Tab navigation as a pure state machine.
//!
//! A click runs a two-phase timed transition:
//!
//! 1. on click: swap the button highlight, fade the old panel out, and
//!    schedule [`NavEvent::Swap`] after the fade-out delay
//! 2. on `Swap`: hide the old panel, show the new one (the active panel flips
//!    here, not earlier), and schedule [`NavEvent::Settle`] after the settle
//!    delay
//! 3. on `Settle`: back to idle
//!
//! Clicks are only accepted while idle. Anything arriving mid-transition is
//! dropped, never queued. [`transition`] produces the next state plus the
//! [`Effect`]s to carry out; timers are themselves effects, so the whole
//! protocol can be stepped without a clock.

use std::collections::BTreeSet;

use crate::config::NavigationConfig;

/// Id of a content panel (the element id in the host page).
pub type PanelId = String;

/// Position of a button among the navigation buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(pub usize);

/// Inputs to the machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
	/// The user clicked a button.
	Select(ButtonId),
	/// Fade-out finished; swap the panels.
	Swap,
	/// Fade-in finished; accept navigation again.
	Settle,
}

/// Which half of a transition is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
	/// Old panel fading out; waiting for [`NavEvent::Swap`].
	FadingOut,
	/// New panel fading in; waiting for [`NavEvent::Settle`].
	FadingIn,
}

/// Where the machine is. `Transitioning` covers the whole span from an
/// accepted click to its settle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
	/// Accepting clicks.
	Idle,
	/// A switch is running; clicks are dropped.
	Transitioning {
		/// Panel being left, if one was active.
		from: Option<PanelId>,
		/// Panel being opened.
		to: PanelId,
		/// Current half of the transition.
		stage: Stage,
	},
}

/// Work requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
	/// Style a button as the current tab.
	ActivateButton(ButtonId),
	/// Style a button as inactive.
	DeactivateButton(ButtonId),
	/// Start the fade-out of a still-visible panel.
	FadeOutPanel(PanelId),
	/// Clear the panel's active/fade-out marks and hide it.
	HidePanel(PanelId),
	/// Unhide, force a layout read, then mark active so the fade-in plays.
	ShowPanel(PanelId),
	/// Scroll the panel into view unless it already fits.
	RevealPanel(PanelId),
	/// Feed `event` back into the machine after `delay_ms`.
	Schedule {
		/// Delay in milliseconds.
		delay_ms: u32,
		/// Event to deliver.
		event: NavEvent,
	},
}

/// Phase delays in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
	/// Click to panel swap.
	pub fade_out_ms: u32,
	/// Panel swap to accepting clicks again.
	pub settle_ms: u32,
}

impl Default for Timing {
	fn default() -> Self {
		Self::from(&NavigationConfig::default())
	}
}

impl From<&NavigationConfig> for Timing {
	fn from(config: &NavigationConfig) -> Self {
		Self {
			fade_out_ms: config.fade_out_ms,
			settle_ms: config.settle_ms,
		}
	}
}

/// Bookkeeping for the tab navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
	active_panel: Option<PanelId>,
	active_button: Option<ButtonId>,
	phase: Phase,
	panels: BTreeSet<PanelId>,
	/// Target panel of each button, indexed by `ButtonId`.
	targets: Vec<PanelId>,
	timing: Timing,
}

impl NavigationState {
	/// Idle state over the given panels and button targets.
	///
	/// An initial panel or button that does not exist is treated as absent.
	pub fn new(
		panels: impl IntoIterator<Item = PanelId>,
		targets: Vec<PanelId>,
		initial_panel: Option<PanelId>,
		initial_button: Option<ButtonId>,
		timing: Timing,
	) -> Self {
		let panels: BTreeSet<PanelId> = panels.into_iter().collect();
		let active_panel = initial_panel.filter(|p| panels.contains(p));
		let active_button = initial_button.filter(|b| b.0 < targets.len());
		Self {
			active_panel,
			active_button,
			phase: Phase::Idle,
			panels,
			targets,
			timing,
		}
	}

	/// Panel currently shown.
	pub fn active_panel(&self) -> Option<&str> {
		self.active_panel.as_deref()
	}

	/// Button currently styled active.
	pub fn active_button(&self) -> Option<ButtonId> {
		self.active_button
	}

	/// Current phase.
	pub fn phase(&self) -> &Phase {
		&self.phase
	}

	/// Whether a switch is in flight.
	pub fn is_transitioning(&self) -> bool {
		!matches!(self.phase, Phase::Idle)
	}

	/// Button count.
	pub fn buttons(&self) -> usize {
		self.targets.len()
	}

	/// Effects putting the page in line with the initial state: the active
	/// panel shown, every other button styled inactive.
	pub fn bootstrap(&self) -> Vec<Effect> {
		let mut effects = Vec::new();
		if let Some(panel) = &self.active_panel {
			effects.push(Effect::ShowPanel(panel.clone()));
		}
		effects.extend(
			(0..self.targets.len())
				.map(ButtonId)
				.filter(|b| Some(*b) != self.active_button)
				.map(Effect::DeactivateButton),
		);
		effects
	}

	/// Apply `event` in place and return the effects to run.
	pub fn handle(&mut self, event: NavEvent) -> Vec<Effect> {
		match event {
			NavEvent::Select(button) => self.select(button),
			NavEvent::Swap => self.swap(),
			NavEvent::Settle => self.settle(),
		}
	}

	fn select(&mut self, button: ButtonId) -> Vec<Effect> {
		if self.is_transitioning() || self.active_button == Some(button) {
			return Vec::new();
		}
		let Some(target) = self.targets.get(button.0) else {
			return Vec::new();
		};
		if !self.panels.contains(target) || self.active_panel.as_ref() == Some(target) {
			return Vec::new();
		}
		let target = target.clone();

		let mut effects = Vec::with_capacity(4);
		if let Some(old) = self.active_button {
			effects.push(Effect::DeactivateButton(old));
		}
		effects.push(Effect::ActivateButton(button));
		if let Some(panel) = &self.active_panel {
			effects.push(Effect::FadeOutPanel(panel.clone()));
		}
		effects.push(Effect::Schedule {
			delay_ms: self.timing.fade_out_ms,
			event: NavEvent::Swap,
		});

		self.active_button = Some(button);
		self.phase = Phase::Transitioning {
			from: self.active_panel.clone(),
			to: target,
			stage: Stage::FadingOut,
		};
		effects
	}

	fn swap(&mut self) -> Vec<Effect> {
		let Phase::Transitioning { from, to, stage } = &mut self.phase else {
			return Vec::new();
		};
		if *stage != Stage::FadingOut {
			return Vec::new();
		}
		*stage = Stage::FadingIn;

		let mut effects = Vec::with_capacity(4);
		if let Some(old) = from {
			effects.push(Effect::HidePanel(old.clone()));
		}
		effects.push(Effect::ShowPanel(to.clone()));
		effects.push(Effect::RevealPanel(to.clone()));
		effects.push(Effect::Schedule {
			delay_ms: self.timing.settle_ms,
			event: NavEvent::Settle,
		});
		self.active_panel = Some(to.clone());
		effects
	}

	fn settle(&mut self) -> Vec<Effect> {
		if matches!(
			self.phase,
			Phase::Transitioning {
				stage: Stage::FadingIn,
				..
			}
		) {
			self.phase = Phase::Idle;
		}
		Vec::new()
	}
}

/// `(state, event) -> (next state, effects)`.
pub fn transition(state: &NavigationState, event: NavEvent) -> (NavigationState, Vec<Effect>) {
	let mut next = state.clone();
	let effects = next.handle(event);
	(next, effects)
}
