use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::io::read_file;
use crate::vocabulary::Vocabulary;

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "social-cloud.json";

/// Number of words sampled per platform.
pub const DEFAULT_WORD_LIMIT: usize = 500;

/// Largest accepted canvas side, in pixels.
pub const MAX_CANVAS_SIDE: u32 = 8192;

/// Largest accepted font size, in pixels.
pub const MAX_FONT_SIZE: f32 = 1024.0;

/// Smallest accepted shrink step; font sizes are at most `MAX_FONT_SIZE`,
/// so the layout gives up after a bounded number of steps.
pub const MIN_FONT_STEP: f32 = 0.1;

/// Largest accepted margin around a word, in pixels.
pub const MAX_MARGIN: u32 = 256;

/// Top-level configuration.
///
/// Every field has a default, so an empty JSON object (or no file at all)
/// is a valid configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
	/// Words sampled per platform.
	pub word_limit: usize,

	/// Optional JSON vocabulary replacing the built-in word lists.
	pub vocabulary: Option<PathBuf>,

	/// Renderer parameters.
	pub render: RenderConfig,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			word_limit: DEFAULT_WORD_LIMIT,
			vocabulary: None,
			render: RenderConfig::default(),
		}
	}
}

/// Parameters shared by both renderers.
///
/// Cloud layout values follow the usual word-cloud conventions:
/// font sizes in pixels, `prefer_horizontal` and `relative_scaling`
/// in `[0, 1]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
	pub width: u32,
	pub height: u32,
	pub background: [u8; 3],
	/// Maximum number of distinct words placed in a cloud.
	pub max_words: usize,
	/// Largest font size; `None` derives it from the canvas height.
	pub max_font_size: Option<f32>,
	pub min_font_size: f32,
	pub font_step: f32,
	/// Free pixels kept around every word.
	pub margin: u32,
	pub prefer_horizontal: f64,
	pub relative_scaling: f32,
	/// Number of bars in the fallback chart.
	pub top_n: usize,
	/// Seed of the layout RNG, random when unset.
	pub seed: Option<u64>,
	/// TrueType font used by the cloud; the engine's bundled font when
	/// unset.
	pub font_path: Option<PathBuf>,
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self {
			width: 900,
			height: 450,
			background: [255, 255, 255],
			max_words: 200,
			max_font_size: None,
			min_font_size: 4.0,
			font_step: 2.0,
			margin: 2,
			prefer_horizontal: 0.9,
			relative_scaling: 0.5,
			top_n: 20,
			seed: None,
			font_path: None,
		}
	}
}

impl RenderConfig {
	/// Checks value ranges that would otherwise make layout loop, panic or
	/// allocate unbounded buffers.
	pub fn validate(&self) -> Result<(), String> {
		if self.width == 0 || self.height == 0 {
			return Err(format!("Canvas must not be empty, got {}x{}", self.width, self.height));
		}
		if self.width > MAX_CANVAS_SIDE || self.height > MAX_CANVAS_SIDE {
			return Err(format!(
				"Canvas must be at most {MAX_CANVAS_SIDE}x{MAX_CANVAS_SIDE}, got {}x{}",
				self.width, self.height
			));
		}
		if self.margin > MAX_MARGIN {
			return Err(format!("margin must be at most {MAX_MARGIN}, got {}", self.margin));
		}
		if !(0.0..=1.0).contains(&self.prefer_horizontal) {
			return Err("prefer_horizontal must be between 0.0 and 1.0".to_owned());
		}
		if !(0.0..=1.0).contains(&self.relative_scaling) {
			return Err("relative_scaling must be between 0.0 and 1.0".to_owned());
		}
		if !self.font_step.is_finite() || self.font_step < MIN_FONT_STEP {
			return Err(format!("font_step must be at least {MIN_FONT_STEP}, got {}", self.font_step));
		}
		if !self.min_font_size.is_finite() || self.min_font_size <= 0.0 {
			return Err(format!("min_font_size must be positive, got {}", self.min_font_size));
		}
		let max_font_size = self.effective_max_font_size();
		if !max_font_size.is_finite() || max_font_size > MAX_FONT_SIZE {
			return Err(format!("max_font_size must be at most {MAX_FONT_SIZE}, got {max_font_size}"));
		}
		if max_font_size < self.min_font_size {
			return Err(format!(
				"max_font_size ({max_font_size}) must not be below min_font_size ({})",
				self.min_font_size
			));
		}
		Ok(())
	}

	/// Largest font size used for the most frequent word.
	pub fn effective_max_font_size(&self) -> f32 {
		self.max_font_size.unwrap_or(self.height as f32 * 0.4)
	}
}

impl AppConfig {
	/// Parses and validates a configuration from JSON.
	pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
		let config: AppConfig = serde_json::from_str(json)?;
		config.render.validate()?;
		Ok(config)
	}

	/// Loads a configuration file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
		let config = Self::from_json(&read_file(&path)?)?;
		info!("Loaded configuration from {}", path.as_ref().display());
		Ok(config)
	}

	/// Loads `path` when it exists, otherwise returns the defaults.
	pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
		if path.as_ref().is_file() {
			Self::from_file(path)
		} else {
			info!("No configuration at {}, using defaults", path.as_ref().display());
			Ok(Self::default())
		}
	}

	/// Resolves the vocabulary: the configured file, or the built-in lists.
	pub fn load_vocabulary(&self) -> Result<Vocabulary, Box<dyn std::error::Error>> {
		match &self.vocabulary {
			Some(path) => Vocabulary::from_file(path),
			None => Ok(Vocabulary::default()),
		}
	}
}
