//! portfolio-motion: animations for a personal portfolio page.
//!
//! This crate attaches to existing page markup and drives three effects:
//! floating background particles, icons orbiting a container on a bobbing
//! ellipse, and tabbed content panels switched with a timed fade.

use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement};

pub mod components;
pub mod config;
pub mod host;
mod portfolio;
pub mod scheduler;

pub use config::PortfolioConfig;
pub use portfolio::Portfolio;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-motion: logging initialized");
}

/// Load configuration from the script element with id="portfolio-config".
/// Falls back to defaults when the element is absent or unparsable.
pub fn load_config(document: &Document) -> PortfolioConfig {
	let Some(json_text) = document
		.get_element_by_id(CONFIG_ELEMENT_ID)
		.and_then(|e| e.dyn_into::<HtmlScriptElement>().ok())
		.and_then(|script| script.text().ok())
	else {
		return PortfolioConfig::default();
	};

	match PortfolioConfig::from_json(&json_text) {
		Ok(config) => {
			info!("portfolio-motion: loaded config from #{}", CONFIG_ELEMENT_ID);
			config
		}
		Err(e) => {
			warn!("portfolio-motion: failed to parse config: {}", e);
			PortfolioConfig::default()
		}
	}
}

/// Start all components once the document is ready.
pub fn run() {
	host::on_ready(|| {
		let Some(document) = host::document() else {
			return;
		};
		let config = load_config(&document);
		if let Some(portfolio) = Portfolio::mount(&document, &config) {
			portfolio.keep_alive();
		}
	});
}
