use log::info;

use crate::config::DEFAULT_WORD_LIMIT;
use crate::platform::Platform;
use crate::render::{RenderMode, Renderer, Visual};
use crate::sampler::WordSampler;
use crate::vocabulary::Vocabulary;

/// Result of the pipeline for one platform.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
	pub platform: Platform,
	pub title: String,
	/// Number of sampled words the visual was built from.
	pub words_analyzed: usize,
	pub visual: Visual,
}

impl Panel {
	/// Status line shown above the visual.
	pub fn status(&self) -> String {
		format!("{} {} words analyzed", self.words_analyzed, self.platform)
	}
}

/// Title of a platform panel.
pub fn panel_title(platform: Platform, topic: &str) -> String {
	format!("{} WordCloud - {}", platform, topic)
}

/// High-level sample-then-render pipeline.
///
/// # Responsibilities
/// - Own the vocabulary and the sampler
/// - Hold the renderer chosen at start-up (never re-probed)
/// - Produce one `Panel` per platform, in `Platform::ALL` order
pub struct Analyzer {
	vocabulary: Vocabulary,
	sampler: WordSampler,
	renderer: Box<dyn Renderer>,
	word_limit: usize,
}

impl Analyzer {
	/// Creates an analyzer with the default word limit.
	pub fn new(vocabulary: Vocabulary, sampler: WordSampler, renderer: Box<dyn Renderer>) -> Self {
		Self { vocabulary, sampler, renderer, word_limit: DEFAULT_WORD_LIMIT }
	}

	/// Sets how many words are sampled per platform.
	pub fn with_word_limit(mut self, word_limit: usize) -> Self {
		self.word_limit = word_limit;
		self
	}

	pub fn word_limit(&self) -> usize {
		self.word_limit
	}

	pub fn mode(&self) -> RenderMode {
		self.renderer.mode()
	}

	/// Samples the word sequence of one platform.
	pub fn sample(&mut self, topic: &str, platform: Platform) -> Vec<String> {
		self.sampler.sample(&self.vocabulary, topic, platform, self.word_limit)
	}

	/// Runs sampler and renderer for one platform.
	pub fn analyze_platform(&mut self, topic: &str, platform: Platform) -> Panel {
		let words = self.sample(topic, platform);
		let title = panel_title(platform, topic);
		let visual = self.renderer.render(&words, &title, platform.color_scheme());
		Panel { platform, title, words_analyzed: words.len(), visual }
	}

	/// Runs the pipeline for every platform.
	pub fn analyze(&mut self, topic: &str) -> Vec<Panel> {
		info!("Analyzing topic '{}' ({} words per platform, {} mode)", topic, self.word_limit, self.mode());
		Platform::ALL
			.into_iter()
			.map(|platform| self.analyze_platform(topic, platform))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::render::FallbackRenderer;

	fn fallback_analyzer() -> Analyzer {
		Analyzer::new(Vocabulary::default(), WordSampler::seeded(5), Box::new(FallbackRenderer::default()))
	}

	#[test]
	fn one_panel_per_platform_in_order() {
		let panels = fallback_analyzer().analyze("finance");
		let platforms: Vec<Platform> = panels.iter().map(|p| p.platform).collect();
		assert_eq!(platforms, Platform::ALL);
		assert_eq!(panels[1].title, "Twitter WordCloud - finance");
		assert_eq!(panels[2].status(), "500 Reddit words analyzed");
	}

	#[test]
	fn fallback_panels_carry_charts() {
		let mut analyzer = fallback_analyzer();
		assert_eq!(analyzer.mode(), RenderMode::Fallback);
		for panel in analyzer.analyze("finance") {
			assert!(matches!(panel.visual, Visual::Chart(_)));
			assert!(panel.visual.notice().is_some());
		}
	}

	#[test]
	fn word_limit_applies_to_every_platform() {
		let mut analyzer = fallback_analyzer().with_word_limit(12);
		assert!(analyzer.analyze("x").iter().all(|p| p.words_analyzed == 12));
		assert_eq!(analyzer.sample("x", Platform::Reddit).len(), 12);
	}
}
