use std::collections::HashMap;

/// Occurrence count of every distinct word of a sequence.
///
/// Ephemeral: rebuilt for each render, never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
	counts: HashMap<String, usize>,
}

impl FrequencyTable {
	/// Counts every item of the sequence as one word.
	pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
		Self::count_tokens(words.iter().map(|w| w.as_ref()))
	}

	/// Joins the sequence with spaces and counts whitespace-separated tokens.
	///
	/// This is how cloud text is read: a multi-word topic contributes one
	/// token per word and empty items contribute nothing.
	pub fn from_text<S: AsRef<str>>(words: &[S]) -> Self {
		Self::count_tokens(words.iter().flat_map(|w| w.as_ref().split_whitespace()))
	}

	fn count_tokens<'a>(words: impl Iterator<Item = &'a str>) -> Self {
		let mut counts = HashMap::new();
		for word in words {
			*counts.entry(word.to_owned()).or_insert(0) += 1;
		}
		Self { counts }
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Occurrences of `word`, 0 when absent.
	pub fn count(&self, word: &str) -> usize {
		self.counts.get(word).copied().unwrap_or(0)
	}

	/// Returns at most `n` words by descending count.
	///
	/// Ties are broken by ascending word, so the ordering only depends on
	/// the counts and is stable across calls.
	pub fn top(&self, n: usize) -> Vec<(String, usize)> {
		let mut entries: Vec<(&String, &usize)> = self.counts.iter().collect();
		entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
		entries
			.into_iter()
			.take(n)
			.map(|(word, count)| (word.clone(), *count))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_sequence_items() {
		let table = FrequencyTable::from_words(&["a", "b", "a", "c", "a", "b"]);
		assert_eq!(table.len(), 3);
		assert_eq!(table.count("a"), 3);
		assert_eq!(table.count("z"), 0);
	}

	#[test]
	fn top_orders_by_count_then_word() {
		let table = FrequencyTable::from_words(&["b", "a", "c", "c", "b", "d", "d"]);
		assert_eq!(
			table.top(3),
			vec![("b".to_owned(), 2), ("c".to_owned(), 2), ("d".to_owned(), 2)]
		);
	}

	#[test]
	fn top_is_truncated_and_idempotent() {
		let words: Vec<String> = (0..30).map(|i| format!("w{}", i % 25)).collect();
		let table = FrequencyTable::from_words(&words);
		let first = table.top(20);
		assert_eq!(first.len(), 20);
		assert_eq!(first, FrequencyTable::from_words(&words).top(20));
	}

	#[test]
	fn empty_sequence_has_empty_top() {
		let table = FrequencyTable::from_words::<&str>(&[]);
		assert!(table.is_empty());
		assert!(table.top(20).is_empty());
	}

	#[test]
	fn text_mode_splits_multi_word_items() {
		let table = FrequencyTable::from_text(&["stock market", "market", ""]);
		assert_eq!(table.count("market"), 2);
		assert_eq!(table.count("stock"), 1);
		assert_eq!(table.len(), 2);
	}
}
