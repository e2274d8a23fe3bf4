use std::fmt;
use std::io;
use std::path::PathBuf;

use log::{info, warn};

use crate::config::RenderConfig;
use super::chart::FallbackRenderer;
use super::{RenderMode, Renderer};

/// Reasons the word-cloud capability is unavailable.
#[derive(Debug)]
pub enum ProbeError {
	/// Built without the `wordcloud` feature.
	FeatureDisabled,
	/// Render parameters the layout engine cannot work with.
	InvalidConfig(String),
	/// The font file could not be read.
	Io(PathBuf, io::Error),
	/// The file was read but is not a usable font.
	InvalidFont(PathBuf, String),
}

impl fmt::Display for ProbeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::FeatureDisabled => write!(f, "built without the wordcloud feature"),
			Self::InvalidConfig(err) => write!(f, "invalid render configuration: {err}"),
			Self::Io(path, err) => write!(f, "cannot read font {}: {err}", path.display()),
			Self::InvalidFont(path, err) => write!(f, "invalid font {}: {err}", path.display()),
		}
	}
}

impl std::error::Error for ProbeError {}

/// Outcome of the start-up probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
	pub mode: RenderMode,
	/// Why the primary mode is unavailable, `None` in primary mode.
	pub reason: Option<String>,
}

impl Capability {
	/// Whether word clouds can be drawn.
	pub fn available(&self) -> bool {
		self.mode == RenderMode::Primary
	}
}

#[cfg(feature = "wordcloud")]
fn load_primary(config: &RenderConfig) -> Result<Box<dyn Renderer>, ProbeError> {
	use super::cloud::PrimaryRenderer;

	let renderer = match &config.font_path {
		Some(path) => {
			let renderer = PrimaryRenderer::from_font_file(path, config.clone())?;
			info!("Word cloud font: {}", path.display());
			renderer
		}
		None => PrimaryRenderer::new(config.clone())?,
	};
	Ok(Box::new(renderer))
}

#[cfg(not(feature = "wordcloud"))]
fn load_primary(_config: &RenderConfig) -> Result<Box<dyn Renderer>, ProbeError> {
	Err(ProbeError::FeatureDisabled)
}

/// Probes the word-cloud capability once and returns the matching renderer.
///
/// The probe never fails: any problem selects the fallback renderer and is
/// reported through `Capability::reason` and a single warning.
pub fn select_renderer(config: &RenderConfig) -> (Box<dyn Renderer>, Capability) {
	match load_primary(config) {
		Ok(renderer) => {
			info!("Render mode: {}", RenderMode::Primary);
			(renderer, Capability { mode: RenderMode::Primary, reason: None })
		}
		Err(err) => {
			warn!("Word cloud unavailable ({err}), falling back to frequency charts");
			let renderer: Box<dyn Renderer> = Box::new(FallbackRenderer::new(config.top_n));
			(renderer, Capability { mode: RenderMode::Fallback, reason: Some(err.to_string()) })
		}
	}
}

/// Like `select_renderer`, but only reports the capability.
pub fn probe(config: &RenderConfig) -> Capability {
	select_renderer(config).1
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_configured_font_selects_fallback() {
		let dir = tempfile::tempdir().unwrap();
		let config = RenderConfig { font_path: Some(dir.path().join("missing.ttf")), ..RenderConfig::default() };

		let (renderer, capability) = select_renderer(&config);
		assert_eq!(renderer.mode(), RenderMode::Fallback);
		assert_eq!(capability.mode, RenderMode::Fallback);
		assert!(!capability.available());
		assert!(capability.reason.is_some());
	}

	#[test]
	fn invalid_configured_font_selects_fallback() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("broken.ttf");
		std::fs::write(&path, b"\x00\x01\x02").unwrap();
		let config = RenderConfig { font_path: Some(path), ..RenderConfig::default() };

		assert_eq!(probe(&config).mode, RenderMode::Fallback);
	}

	#[test]
	fn invalid_render_config_selects_fallback() {
		let config = RenderConfig { font_step: 1e-30, ..RenderConfig::default() };
		let capability = probe(&config);
		assert_eq!(capability.mode, RenderMode::Fallback);
		assert!(capability.reason.is_some());
	}

	#[cfg(feature = "wordcloud")]
	#[test]
	fn bundled_font_selects_primary() {
		let (renderer, capability) = select_renderer(&RenderConfig::default());
		assert_eq!(renderer.mode(), RenderMode::Primary);
		assert_eq!(capability, Capability { mode: RenderMode::Primary, reason: None });
	}

	#[cfg(not(feature = "wordcloud"))]
	#[test]
	fn disabled_feature_always_selects_fallback() {
		let capability = probe(&RenderConfig::default());
		assert_eq!(capability.mode, RenderMode::Fallback);
		assert_eq!(capability.reason.as_deref(), Some("built without the wordcloud feature"));
	}
}
