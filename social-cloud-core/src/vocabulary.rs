use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::io::read_file;
use crate::platform::Platform;

const GENERIC_WORDS: [&str; 12] = [
	"market", "growth", "trend", "analysis",
	"economy", "investment", "data", "future",
	"business", "strategy", "global", "technology",
];

const FACEBOOK_WORDS: [&str; 4] = ["community", "group", "share", "people"];
const TWITTER_WORDS: [&str; 4] = ["tweet", "hashtag", "viral", "thread"];
const REDDIT_WORDS: [&str; 4] = ["upvote", "comment", "discussion", "subreddit"];

/// On-disk layout of a vocabulary file.
///
/// Platforms are keyed by name so the file stays readable:
/// `{"generic": ["market"], "platforms": {"Reddit": ["upvote"]}}`
#[derive(Serialize, Deserialize, Debug, Default)]
struct VocabularyFile {
	#[serde(default)]
	generic: Vec<String>,
	#[serde(default)]
	platforms: BTreeMap<String, Vec<String>>,
}

/// Fixed word lists the sampler draws from.
///
/// ## Invariants
/// - Immutable once built
/// - The topic is never stored here; it is prepended per request by
///   `eligible_words`
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
	generic: Vec<String>,
	bias: HashMap<Platform, Vec<String>>,
}

impl Default for Vocabulary {
	/// Business/topic words plus four bias words per platform.
	fn default() -> Self {
		let owned = |words: &[&str]| words.iter().map(|w| (*w).to_owned()).collect::<Vec<_>>();
		let mut bias = HashMap::new();
		bias.insert(Platform::Facebook, owned(&FACEBOOK_WORDS));
		bias.insert(Platform::Twitter, owned(&TWITTER_WORDS));
		bias.insert(Platform::Reddit, owned(&REDDIT_WORDS));
		Self { generic: owned(&GENERIC_WORDS), bias }
	}
}

impl Vocabulary {
	/// Builds a vocabulary from explicit word lists.
	pub fn new(generic: Vec<String>, bias: HashMap<Platform, Vec<String>>) -> Self {
		Self { generic, bias }
	}

	/// Loads a vocabulary from a JSON file.
	///
	/// # Errors
	/// - File I/O or JSON syntax errors
	/// - A platform key that is not Facebook, Twitter or Reddit
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
		let contents = read_file(&path)?;
		let vocabulary = Self::from_json(&contents)?;
		info!(
			"Loaded vocabulary from {} ({} generic words)",
			path.as_ref().display(),
			vocabulary.generic.len()
		);
		Ok(vocabulary)
	}

	/// Parses a vocabulary from its JSON representation.
	pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
		let file: VocabularyFile = serde_json::from_str(json)?;
		let mut bias = HashMap::new();
		for (name, words) in file.platforms {
			let platform: Platform = name.parse()?;
			bias.insert(platform, words);
		}
		Ok(Self { generic: file.generic, bias })
	}

	/// Generic words shared by every platform.
	pub fn generic(&self) -> &[String] {
		&self.generic
	}

	/// Bias words of one platform (empty when none are configured).
	pub fn bias(&self, platform: Platform) -> &[String] {
		self.bias.get(&platform).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Returns the words eligible for sampling: the topic, then the generic
	/// words, then the platform bias words.
	///
	/// Duplicates are removed (first occurrence wins) so that every distinct
	/// word has the same probability of being drawn, even when the topic
	/// collides with a vocabulary word.
	pub fn eligible_words(&self, topic: &str, platform: Platform) -> Vec<String> {
		let mut seen: HashSet<&str> = HashSet::new();
		std::iter::once(topic)
			.chain(self.generic.iter().map(String::as_str))
			.chain(self.bias(platform).iter().map(String::as_str))
			.filter(|w| seen.insert(*w))
			.map(str::to_owned)
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_facebook_vocabulary_matches_expected_set() {
		let words = Vocabulary::default().eligible_words("finance", Platform::Facebook);
		let expected = [
			"finance", "market", "growth", "trend", "analysis", "economy", "investment", "data",
			"future", "business", "strategy", "global", "technology", "community", "group",
			"share", "people",
		];
		assert_eq!(words, expected);
	}

	#[test]
	fn topic_colliding_with_generic_word_is_deduplicated() {
		let words = Vocabulary::default().eligible_words("market", Platform::Reddit);
		assert_eq!(words.iter().filter(|w| *w == "market").count(), 1);
		assert_eq!(words.len(), 16);
	}

	#[test]
	fn empty_topic_is_an_eligible_word() {
		let words = Vocabulary::default().eligible_words("", Platform::Twitter);
		assert_eq!(words[0], "");
		assert!(words.contains(&"viral".to_owned()));
	}

	#[test]
	fn loads_custom_vocabulary_from_json() {
		let vocabulary = Vocabulary::from_json(
			r#"{"generic": ["alpha", "beta"], "platforms": {"reddit": ["karma"]}}"#,
		)
		.unwrap();
		assert_eq!(vocabulary.generic(), ["alpha", "beta"]);
		assert_eq!(vocabulary.bias(Platform::Reddit), ["karma"]);
		assert!(vocabulary.bias(Platform::Facebook).is_empty());
	}

	#[test]
	fn rejects_unknown_platform_in_json() {
		let result = Vocabulary::from_json(r#"{"platforms": {"Myspace": ["friend"]}}"#);
		assert!(result.is_err());
	}

	#[test]
	fn loads_vocabulary_file_from_disk() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("vocabulary.json");
		std::fs::write(&path, r#"{"generic": ["gamma"]}"#).unwrap();

		let vocabulary = Vocabulary::from_file(&path).unwrap();
		assert_eq!(vocabulary.eligible_words("t", Platform::Twitter), ["t", "gamma"]);
	}
}
