//! Visual renderers.
//!
//! Two implementations share the `Renderer` interface:
//! - `PrimaryRenderer` (feature `wordcloud`): word-cloud raster
//! - `FallbackRenderer`: top-N horizontal frequency bar chart
//!
//! Which one is used is decided once by `probe::select_renderer` and never
//! changes for the lifetime of the process.

use std::fmt;

use image::RgbaImage;
use serde::Serialize;

use crate::color::ColorScheme;

/// Frequency bar chart used when word clouds cannot be drawn.
pub mod chart;

/// Word-cloud renderer on top of the `wcloud` layout engine.
#[cfg(feature = "wordcloud")]
pub mod cloud;

/// Start-up capability detection.
pub mod probe;

pub use chart::{Bar, BarChart, FallbackRenderer};
#[cfg(feature = "wordcloud")]
pub use cloud::PrimaryRenderer;
pub use probe::{select_renderer, Capability, ProbeError};

/// User-visible message attached to every fallback visual.
pub const FALLBACK_NOTICE: &str = "Word cloud rendering unavailable, showing frequency visualization instead.";

/// Rendering state, fixed at start-up.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
	Primary,
	Fallback,
}

impl fmt::Display for RenderMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			RenderMode::Primary => "primary",
			RenderMode::Fallback => "fallback",
		})
	}
}

/// Word-cloud raster with its panel title.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudImage {
	pub title: String,
	pub image: RgbaImage,
}

/// Output of a renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
	Cloud(CloudImage),
	Chart(BarChart),
}

impl Visual {
	pub fn title(&self) -> &str {
		match self {
			Visual::Cloud(cloud) => &cloud.title,
			Visual::Chart(chart) => &chart.title,
		}
	}

	/// Mode that produced this visual.
	pub fn mode(&self) -> RenderMode {
		match self {
			Visual::Cloud(_) => RenderMode::Primary,
			Visual::Chart(_) => RenderMode::Fallback,
		}
	}

	/// Warning to display next to the visual, if any.
	pub fn notice(&self) -> Option<&'static str> {
		match self {
			Visual::Cloud(_) => None,
			Visual::Chart(_) => Some(FALLBACK_NOTICE),
		}
	}
}

/// Turns a word sequence into a visual.
///
/// Rendering is infallible: degenerate input (such as an empty sequence)
/// yields a blank canvas or an empty chart.
pub trait Renderer: Send + Sync {
	/// Mode implemented by this renderer.
	fn mode(&self) -> RenderMode;

	/// Renders `words` under `title`, tinted with `scheme` where applicable.
	fn render(&self, words: &[String], title: &str, scheme: ColorScheme) -> Visual;
}
