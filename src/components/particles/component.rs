//! Leptos view for the particle layer.

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Node};

use super::generator::{ParticleSpec, generate_from};
use crate::config::PortfolioConfig;
use crate::host;

/// Renders one `div.particle` per spec. The float animation itself is CSS.
#[component]
pub fn ParticleField(specs: Vec<ParticleSpec>) -> impl IntoView {
	specs
		.into_iter()
		.map(|spec| view! { <div class="particle" style=spec.style() /> })
		.collect_view()
}

/// Node operations used to move rendered particles into the page.
pub trait BatchNode: Sized {
	/// Detach and return the first child.
	fn take_first_child(&self) -> Option<Self>;
	/// Append `child` as the last child.
	fn append(&self, child: &Self) -> bool;
}

impl BatchNode for Node {
	fn take_first_child(&self) -> Option<Self> {
		let child = self.first_child()?;
		self.remove_child(&child).ok()
	}

	fn append(&self, child: &Self) -> bool {
		self.append_child(child).is_ok()
	}
}

/// Move every child of `staging` into `batch`, then attach `batch` to
/// `container` with one append. Returns the number of moved nodes, or `None`
/// if the final append failed.
pub fn attach_in_one_batch<N: BatchNode>(staging: &N, batch: &N, container: &N) -> Option<usize> {
	let mut moved = 0;
	while let Some(child) = staging.take_first_child() {
		if !batch.append(&child) {
			break;
		}
		moved += 1;
	}
	container.append(batch).then_some(moved)
}

/// Generate the configured particles and mount them into the particle
/// container in a single insertion. No-op if the container is absent.
pub fn mount_particles(document: &Document, config: &PortfolioConfig) -> Option<usize> {
	let Some(container) = host::element_by_id(document, &config.selectors.particle_container)
	else {
		debug!(
			"portfolio-motion: no #{}, skipping particles",
			config.selectors.particle_container
		);
		return None;
	};

	let specs = generate_from(&mut fastrand::Rng::new(), &config.particles);
	let count = specs.len();

	// Render off-document so the live container sees one insertion.
	let staging: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
	leptos::mount::mount_to(staging.clone(), move || view! { <ParticleField specs=specs /> })
		.forget();
	let batch = document.create_document_fragment();
	if attach_in_one_batch::<Node>(&staging, &batch, &container).is_none() {
		warn!("portfolio-motion: failed to attach particles");
		return None;
	}
	info!("portfolio-motion: mounted {} particles", count);
	Some(count)
}
