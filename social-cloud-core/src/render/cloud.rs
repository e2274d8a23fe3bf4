use std::fs;
use std::path::Path;

use ab_glyph::FontVec;
use image::{Rgba, RgbaImage};
use log::debug;
use nanorand::{Rng, WyRand};
use wcloud::{Tokenizer, Word, WordCloud, WordCloudSize};

use crate::color::ColorScheme;
use crate::config::RenderConfig;
use crate::frequency::FrequencyTable;
use super::probe::ProbeError;
use super::{CloudImage, RenderMode, Renderer, Visual};

/// Per-word color hook of the layout engine.
type ColorFn = fn(&Word, &mut WyRand) -> Rgba<u8>;

/// Samples `scheme` at a uniform random position.
fn scheme_color(scheme: ColorScheme, rng: &mut WyRand) -> Rgba<u8> {
	let t = rng.generate_range(0_u32..=1000) as f32 / 1000.0;
	let [r, g, b] = scheme.sample(t);
	Rgba([r, g, b, 255])
}

fn blues(_: &Word, rng: &mut WyRand) -> Rgba<u8> {
	scheme_color(ColorScheme::Blues, rng)
}

fn cool(_: &Word, rng: &mut WyRand) -> Rgba<u8> {
	scheme_color(ColorScheme::Cool, rng)
}

fn oranges(_: &Word, rng: &mut WyRand) -> Rgba<u8> {
	scheme_color(ColorScheme::Oranges, rng)
}

/// The engine takes a plain `fn`, so each scheme has its own hook.
fn color_fn(scheme: ColorScheme) -> ColorFn {
	match scheme {
		ColorScheme::Blues => blues,
		ColorScheme::Cool => cool,
		ColorScheme::Oranges => oranges,
	}
}

/// Word-cloud renderer backed by `wcloud`.
///
/// Canvas, font sizes, margins, orientation and seed come from
/// `RenderConfig`; words are counted and placed by the engine, then tinted
/// through the color scheme of the panel.
pub struct PrimaryRenderer {
	cloud: WordCloud,
	config: RenderConfig,
}

impl PrimaryRenderer {
	/// Renderer using the engine's bundled font.
	pub fn new(config: RenderConfig) -> Result<Self, ProbeError> {
		Self::build(config, None)
	}

	/// Renderer using a TrueType/OpenType font file.
	pub fn from_font_file<P: AsRef<Path>>(path: P, config: RenderConfig) -> Result<Self, ProbeError> {
		let path = path.as_ref();
		let bytes = fs::read(path).map_err(|e| ProbeError::Io(path.to_path_buf(), e))?;
		let font = FontVec::try_from_vec(bytes)
			.map_err(|e| ProbeError::InvalidFont(path.to_path_buf(), e.to_string()))?;
		Self::build(config, Some(font))
	}

	fn build(config: RenderConfig, font: Option<FontVec>) -> Result<Self, ProbeError> {
		// The engine asserts on some of these values and loops on others.
		config.validate().map_err(ProbeError::InvalidConfig)?;

		let tokenizer = Tokenizer::default().with_max_words(u32::try_from(config.max_words).unwrap_or(u32::MAX));
		let [r, g, b] = config.background;
		let mut cloud = WordCloud::default()
			.with_tokenizer(tokenizer)
			.with_background_color(Rgba([r, g, b, 255]))
			.with_max_font_size(Some(config.effective_max_font_size()))
			.with_min_font_size(config.min_font_size)
			.with_font_step(config.font_step)
			.with_word_margin(config.margin)
			.with_word_rotate_chance(1.0 - config.prefer_horizontal)
			.with_relative_font_scaling(config.relative_scaling);
		if let Some(seed) = config.seed {
			cloud = cloud.with_rng_seed(seed);
		}
		if let Some(font) = font {
			cloud = cloud.with_font(font);
		}

		Ok(Self { cloud, config })
	}

	fn blank(&self) -> RgbaImage {
		let [r, g, b] = self.config.background;
		RgbaImage::from_pixel(self.config.width, self.config.height, Rgba([r, g, b, 255]))
	}
}

impl Renderer for PrimaryRenderer {
	fn mode(&self) -> RenderMode {
		RenderMode::Primary
	}

	fn render(&self, words: &[String], title: &str, scheme: ColorScheme) -> Visual {
		let distinct = FrequencyTable::from_text(words).len();
		debug!("Cloud '{}' from {} words ({} distinct, {})", title, words.len(), distinct, scheme);

		let image = if distinct == 0 {
			self.blank()
		} else {
			let size = WordCloudSize::FromDimensions { width: self.config.width, height: self.config.height };
			self.cloud
				.generate_from_text_with_color_func(&words.join(" "), size, 1.0, color_fn(scheme))
		};
		Visual::Cloud(CloudImage { title: title.to_owned(), image })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn small_config() -> RenderConfig {
		RenderConfig { width: 200, height: 100, seed: Some(11), ..RenderConfig::default() }
	}

	fn words(list: &[&str]) -> Vec<String> {
		list.iter().map(|w| (*w).to_owned()).collect()
	}

	#[test]
	fn rejects_file_that_is_not_a_font() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("fake.ttf");
		std::fs::write(&path, b"not a font").unwrap();
		assert!(matches!(
			PrimaryRenderer::from_font_file(&path, RenderConfig::default()),
			Err(ProbeError::InvalidFont(_, _))
		));
	}

	#[test]
	fn rejects_config_that_would_stall_layout() {
		let config = RenderConfig { max_font_size: Some(1e9), ..small_config() };
		assert!(matches!(PrimaryRenderer::new(config), Err(ProbeError::InvalidConfig(_))));
	}

	#[test]
	fn empty_sequence_renders_blank_canvas() {
		let renderer = PrimaryRenderer::new(small_config()).unwrap();
		match renderer.render(&[], "T", ColorScheme::Blues) {
			Visual::Cloud(cloud) => {
				assert_eq!(cloud.image.dimensions(), (200, 100));
				assert!(cloud.image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
			}
			Visual::Chart(_) => panic!("primary renderer produced a chart"),
		}
	}

	#[test]
	fn words_are_drawn_on_the_canvas() {
		let renderer = PrimaryRenderer::new(small_config()).unwrap();
		match renderer.render(&words(&["market", "growth", "market", "data"]), "T", ColorScheme::Oranges) {
			Visual::Cloud(cloud) => {
				assert_eq!(cloud.title, "T");
				assert_eq!(cloud.image.dimensions(), (200, 100));
				assert!(cloud.image.pixels().any(|p| p.0 != [255, 255, 255, 255]));
			}
			Visual::Chart(_) => panic!("primary renderer produced a chart"),
		}
	}

	#[test]
	fn fixed_seed_gives_identical_images() {
		let renderer = PrimaryRenderer::new(small_config()).unwrap();
		let words = words(&["tweet", "viral", "thread", "tweet"]);
		assert_eq!(
			renderer.render(&words, "T", ColorScheme::Cool),
			renderer.render(&words, "T", ColorScheme::Cool)
		);
	}

	#[test]
	fn scheme_colors_are_opaque() {
		let mut rng = WyRand::new_seed(5);
		for scheme in [ColorScheme::Blues, ColorScheme::Cool, ColorScheme::Oranges] {
			let Rgba([_, _, _, alpha]) = scheme_color(scheme, &mut rng);
			assert_eq!(alpha, 255);
		}
	}
}
