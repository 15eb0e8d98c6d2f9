//! Tokenization rules for the chain model.
//!
//! The tokenizer reduces raw text to words and recognized punctuation
//! marks. Sentence enders (`.`, `?`, `!`) and mid-sentence marks (`,`,
//! `;`, `:`) each become standalone tokens so the chains can learn
//! where sentences stop and pause.

use std::sync::LazyLock;

use regex::Regex;

/// Everything that does not survive tokenization: any character that is
/// not an ASCII letter, a recognized punctuation mark, an apostrophe, a
/// hyphen, a newline or a space.
static STRIP_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[^a-zA-Z.?!\-',;:\n ]").expect("valid regex"));

/// A recognized punctuation mark. Each occurrence becomes its own token
/// by getting a space inserted before it, adjacent marks included.
static PUNCTUATION: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[.?!,;:]").expect("valid regex"));

/// A single space preceding a recognized punctuation mark.
static SPACE_BEFORE_MARK: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r" ([.?!,;:])").expect("valid regex"));

/// Splits raw text into word and punctuation tokens.
///
/// Strips every character outside the allowed set, inserts a space
/// before each recognized punctuation mark, then splits on spaces and
/// newlines. Empty fragments are discarded, so any run of whitespace
/// acts as a single separator.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
	let stripped = STRIP_PATTERN.replace_all(text, "");
	let spaced = PUNCTUATION.replace_all(&stripped, " $0");
	spaced
		.split([' ', '\n'])
		.filter(|fragment| !fragment.is_empty())
		.map(str::to_owned)
		.collect()
}

/// Removes the single space preceding each recognized punctuation mark,
/// so punctuation binds to the word before it.
pub(crate) fn detokenize(text: &str) -> String {
	SPACE_BEFORE_MARK.replace_all(text, "$1").into_owned()
}

/// True exactly for the three sentence-ending tokens.
pub(crate) fn is_sentence_ender(token: &str) -> bool {
	matches!(token, "." | "!" | "?")
}
