use log::debug;
use serde::Serialize;

use crate::color::ColorScheme;
use crate::frequency::FrequencyTable;
use super::{RenderMode, Renderer, Visual};

/// Title drawn above every fallback chart.
pub const CHART_TITLE: &str = "Word Frequency (Fallback View)";

/// One horizontal bar.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Bar {
	pub label: String,
	pub count: usize,
}

/// Horizontal bar chart of word frequencies.
///
/// ## Invariants
/// - `bars` are sorted by descending count; the first bar is drawn at the top
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
	pub title: String,
	pub chart_title: String,
	pub bars: Vec<Bar>,
}

impl BarChart {
	/// Builds a chart from `(word, count)` pairs already in display order.
	pub fn new(title: &str, entries: Vec<(String, usize)>) -> Self {
		Self {
			title: title.to_owned(),
			chart_title: CHART_TITLE.to_owned(),
			bars: entries.into_iter().map(|(label, count)| Bar { label, count }).collect(),
		}
	}

	/// Highest count, 0 for an empty chart.
	pub fn max_count(&self) -> usize {
		self.bars.iter().map(|b| b.count).max().unwrap_or(0)
	}

	/// Draws the chart as text, bars scaled to at most `width` cells.
	///
	/// An empty chart renders its title only.
	pub fn to_text(&self, width: usize) -> String {
		let label_width = self.bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
		let max = self.max_count();

		let mut out = format!("{}\n", self.chart_title);
		for bar in &self.bars {
			let length = if max == 0 { 0 } else { bar.count * width / max };
			out.push_str(&format!(
				"{:>label_width$} | {} {}\n",
				bar.label,
				"█".repeat(length),
				bar.count
			));
		}
		out
	}
}

/// Renders the top words of a sequence as a bar chart.
#[derive(Debug, Clone)]
pub struct FallbackRenderer {
	top_n: usize,
}

impl FallbackRenderer {
	pub fn new(top_n: usize) -> Self {
		Self { top_n }
	}
}

impl Default for FallbackRenderer {
	fn default() -> Self {
		Self::new(20)
	}
}

impl Renderer for FallbackRenderer {
	fn mode(&self) -> RenderMode {
		RenderMode::Fallback
	}

	/// Counts the sequence and keeps the `top_n` most frequent words.
	/// The color scheme is not used: charts keep a single bar color.
	fn render(&self, words: &[String], title: &str, _scheme: ColorScheme) -> Visual {
		let top = FrequencyTable::from_words(words).top(self.top_n);
		debug!("Fallback chart '{}' with {} bars", title, top.len());
		Visual::Chart(BarChart::new(title, top))
	}
}
