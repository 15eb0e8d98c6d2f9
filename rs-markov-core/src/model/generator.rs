use std::mem;

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, IteratorRandom};
use rand::{Rng, SeedableRng};

use crate::error::{ModelError, ModelResult};
use crate::model::chain_store::ChainStore;
use crate::model::tokenize;

/// Reserved token marking the start of a sentence.
///
/// Parentheses never survive tokenization, so no token coming from
/// input text can collide with it.
pub const START_TOKEN: &str = "(START)";

/// Upper bound on the tokens a single walk may emit. Training text
/// whose chains cycle without ever reaching a sentence ender would
/// otherwise keep the walk running forever.
const WALK_LIMIT: usize = 10_000;

/// Second-order Markov text generator.
///
/// Learns word-pair transitions from raw text and synthesizes new
/// sentences by randomly walking the learned chains from the start
/// sentinel until a sentence ender is drawn.
///
/// ## Responsibilities
/// - Tokenize training text and record its triples into the chain store
/// - Walk the store with an owned random source to produce one sentence
/// - Reassemble the walked tokens into natural prose
///
/// ## Invariants
/// - The store exists from the first training call that yields tokens
/// - Generation only reads the store, every draw mutates only the
///   random source
#[derive(Debug)]
pub struct TextGenerator<R = StdRng> {
	/// Trained chains, absent until the first effective training call.
	chains: Option<ChainStore>,
	/// Random source used for every draw in a generation walk.
	rng: R,
}

impl TextGenerator<StdRng> {
	/// Creates an untrained generator with an OS-seeded random source.
	pub fn new() -> Self {
		Self::with_rng(StdRng::from_os_rng())
	}

	/// Creates a generator and trains it on `text` immediately.
	///
	/// Produces the same chains as [`TextGenerator::new`] followed by
	/// [`create_chains`](TextGenerator::create_chains).
	///
	/// # Errors
	/// Returns [`ModelError::EmptyText`] if `text` is empty.
	pub fn from_text(text: &str) -> ModelResult<Self> {
		let mut generator = Self::new();
		generator.create_chains(text)?;
		Ok(generator)
	}
}

impl Default for TextGenerator<StdRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Rng> TextGenerator<R> {
	/// Creates an untrained generator around the given random source.
	///
	/// Passing a seeded source (ex. `StdRng::seed_from_u64`) makes
	/// every generated sentence reproducible.
	pub fn with_rng(rng: R) -> Self {
		Self { chains: None, rng }
	}

	/// Read access to the trained chains, if any training happened.
	pub fn chains(&self) -> Option<&ChainStore> {
		self.chains.as_ref()
	}

	/// Trains the chains on `text`.
	///
	/// Tokenizes the text and records every (first, second, third)
	/// sliding window into the store. Each sentence starts from the
	/// ([`START_TOKEN`], first word) window, and a sentence ender
	/// resets the window so the next word opens a fresh sentence.
	/// Calling this repeatedly accumulates observations across calls.
	///
	/// # Errors
	/// Returns [`ModelError::EmptyText`] if `text` is empty. Non-empty
	/// text that tokenizes to nothing (ex. digits only) is not an
	/// error and leaves the generator untouched.
	pub fn create_chains(&mut self, text: &str) -> ModelResult<()> {
		if text.is_empty() {
			return Err(ModelError::EmptyText);
		}

		let tokens = tokenize::tokenize(text);
		if tokens.is_empty() {
			return Ok(());
		}
		let token_count = tokens.len();

		let chains = self.chains.get_or_insert_with(ChainStore::new);

		let mut first = String::new();
		let mut second = String::new();
		let mut at_sentence_start = true;

		for token in tokens {
			if at_sentence_start {
				first = START_TOKEN.to_owned();
				second = token;
				at_sentence_start = false;
				continue;
			}

			chains.record(&first, &second, &token)?;

			if tokenize::is_sentence_ender(&token) {
				// The next token, if any, opens a fresh sentence.
				at_sentence_start = true;
			} else {
				first = mem::replace(&mut second, token);
			}
		}

		log::debug!(
			"trained {token_count} tokens into {} chain pairs",
			chains.pair_count()
		);

		Ok(())
	}

	/// Generates one random sentence from the trained chains.
	///
	/// The walk starts at the sentinel: one second word is drawn
	/// uniformly among everything observed at a sentence start, then
	/// one continuation of that pair. From there every step draws
	/// uniformly from the continuations of the current (first, second)
	/// window, so a continuation recorded K times among N comes up
	/// with probability K/N. The walk stops at the first sentence
	/// ender and the collected tokens are reassembled into prose.
	///
	/// # Errors
	/// - [`ModelError::NotTrained`] if no effective training call has
	///   happened yet.
	/// - [`ModelError::UnknownPair`] if the walk reaches a window the
	///   training text never completed, which means the text stopped
	///   mid-sentence.
	/// - [`ModelError::WalkLimitExceeded`] if no sentence ender was
	///   drawn within the internal bound.
	pub fn generate_random_text(&mut self) -> ModelResult<String> {
		let Some(chains) = self.chains.as_ref() else {
			return Err(ModelError::NotTrained);
		};
		let rng = &mut self.rng;

		// First step: the sentinel has no fixed second word, so the
		// (second word, continuations) entry is drawn as a whole. A
		// recorded first token always carries at least one entry.
		let (second, openers) = chains
			.second_tokens_for(START_TOKEN)?
			.choose(rng)
			.ok_or_else(|| ModelError::UnknownFirst { first: START_TOKEN.to_owned() })?;
		let third = openers
			.choose(rng)
			.map(String::as_str)
			.ok_or_else(|| ModelError::UnknownPair {
				first: START_TOKEN.to_owned(),
				second: second.to_owned(),
			})?;

		let mut first;
		let mut second = second;
		let mut third = third;

		let mut output = String::from(second);
		let mut emitted = 1usize;

		loop {
			output.push(' ');
			output.push_str(third);
			emitted += 1;

			if tokenize::is_sentence_ender(third) {
				break;
			}
			if emitted >= WALK_LIMIT {
				return Err(ModelError::WalkLimitExceeded { limit: WALK_LIMIT });
			}

			first = second;
			second = third;
			third = chains
				.continuations_for(first, second)?
				.choose(rng)
				.map(String::as_str)
				.ok_or_else(|| ModelError::UnknownPair {
					first: first.to_owned(),
					second: second.to_owned(),
				})?;
		}

		log::trace!("generation walk emitted {emitted} tokens");

		Ok(tokenize::detokenize(&output))
	}
}
