//! Error types shared by the chain store and the text generator.

use thiserror::Error;

/// Errors reported by training, lookup and generation.
///
/// Every operation propagates its error to the caller as-is. The
/// library never retries or falls back internally, all operations are
/// pure in-memory transformations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
	/// An empty token was offered to the chain store.
	#[error("cannot record an empty token")]
	EmptyToken,

	/// Empty text was passed to a training call.
	#[error("training text is empty")]
	EmptyText,

	/// A (first, second) pair was looked up that training never
	/// recorded. A generation walk reaches this only when the training
	/// text stopped mid-sentence and left a window with no
	/// continuation.
	#[error("no continuations recorded for ({first:?}, {second:?})")]
	UnknownPair {
		/// First token of the missing pair.
		first: String,
		/// Second token of the missing pair.
		second: String,
	},

	/// A first token was looked up that training never recorded.
	#[error("no entries recorded under {first:?}")]
	UnknownFirst {
		/// The missing first token.
		first: String,
	},

	/// Generation was attempted before any effective training call.
	#[error("no chains have been trained yet")]
	NotTrained,

	/// A generation walk emitted this many tokens without drawing a
	/// sentence ender. Only training text whose chains cycle without
	/// ever reaching `.`, `!` or `?` can produce such walks.
	#[error("generation walk exceeded {limit} tokens without a sentence ender")]
	WalkLimitExceeded {
		/// The internal walk bound that was hit.
		limit: usize,
	},
}

/// Result type alias using [`ModelError`].
pub type ModelResult<T> = Result<T, ModelError>;
