use std::collections::BTreeMap;

use crate::error::{ModelError, ModelResult};

/// Chain store for a second-order Markov model.
///
/// Maps every observed (first, second) token pair to the ordered list
/// of tokens seen immediately after it. Duplicates are retained, so a
/// continuation observed K times out of N fills K of the N slots a
/// uniform draw picks from.
///
/// Conceptually this is the edge table of a Markov chain whose nodes
/// are token pairs.
///
/// ## Responsibilities
/// - Accumulate observed triples during training
/// - Answer "what followed this pair?" during the generation walk
/// - Answer "what opened a sentence?" for the first step of a walk
///
/// ## Invariants
/// - A continuation list is non-empty from the moment its pair exists
/// - Lists only ever grow, nothing is removed or reordered
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainStore {
	/// first token -> second token -> observed third tokens.
	chains: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl ChainStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one observed (first, second, third) triple.
	///
	/// Creates the first-token entry, the second-token entry, or both
	/// as needed, then appends `third` to the continuation list. The
	/// list grows by exactly one element and existing elements are
	/// never touched.
	///
	/// # Errors
	/// Returns [`ModelError::EmptyToken`] if any of the three tokens
	/// is empty.
	pub fn record(&mut self, first: &str, second: &str, third: &str) -> ModelResult<()> {
		if first.is_empty() || second.is_empty() || third.is_empty() {
			return Err(ModelError::EmptyToken);
		}

		self.chains
			.entry(first.to_owned())
			.or_default()
			.entry(second.to_owned())
			.or_default()
			.push(third.to_owned());

		Ok(())
	}

	/// Returns the continuations observed after `(first, second)`, in
	/// observation order.
	///
	/// The returned slice is never empty.
	///
	/// # Errors
	/// Returns [`ModelError::UnknownPair`] if the pair was never
	/// recorded. When a generation walk hits this, the training text
	/// stopped mid-sentence at that pair.
	pub fn continuations_for(&self, first: &str, second: &str) -> ModelResult<&[String]> {
		self.chains
			.get(first)
			.and_then(|seconds| seconds.get(second))
			.map(Vec::as_slice)
			.ok_or_else(|| ModelError::UnknownPair {
				first: first.to_owned(),
				second: second.to_owned(),
			})
	}

	/// Iterates the (second token, continuations) entries recorded
	/// under `first`, in key order.
	///
	/// The generation walk uses this for its first step, where the
	/// second word of the sentence is drawn from everything observed
	/// at a sentence start.
	///
	/// # Errors
	/// Returns [`ModelError::UnknownFirst`] if `first` was never
	/// recorded.
	pub fn second_tokens_for(
		&self,
		first: &str,
	) -> ModelResult<impl Iterator<Item = (&str, &[String])>> {
		let seconds = self
			.chains
			.get(first)
			.ok_or_else(|| ModelError::UnknownFirst { first: first.to_owned() })?;
		Ok(seconds
			.iter()
			.map(|(second, thirds)| (second.as_str(), thirds.as_slice())))
	}

	/// Number of distinct (first, second) pairs recorded so far.
	pub fn pair_count(&self) -> usize {
		self.chains.values().map(BTreeMap::len).sum()
	}

	/// True if nothing has been recorded yet.
	pub fn is_empty(&self) -> bool {
		self.chains.is_empty()
	}
}
