use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::platform::Platform;
use crate::vocabulary::Vocabulary;

/// Draws pseudo-text from a vocabulary.
///
/// Every word is chosen independently and uniformly, with replacement,
/// among the eligible words of `(topic, platform)`.
///
/// ## Invariants
/// - `sample` returns exactly `count` words
/// - Every returned word belongs to `Vocabulary::eligible_words`
#[derive(Debug, Clone)]
pub struct WordSampler {
	rng: StdRng,
}

impl Default for WordSampler {
	fn default() -> Self {
		Self::new()
	}
}

impl WordSampler {
	/// Creates a sampler seeded from the operating system.
	pub fn new() -> Self {
		Self { rng: StdRng::from_os_rng() }
	}

	/// Creates a reproducible sampler.
	pub fn seeded(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}

	/// Samples `count` words for a topic on a platform.
	///
	/// `count = 0` yields an empty sequence; an empty topic is itself an
	/// eligible word.
	pub fn sample(&mut self, vocabulary: &Vocabulary, topic: &str, platform: Platform, count: usize) -> Vec<String> {
		let words = vocabulary.eligible_words(topic, platform);
		// The topic is always eligible, so `words` is never empty.
		(0..count)
			.map(|_| words[self.rng.random_range(0..words.len())].clone())
			.collect()
	}
}
