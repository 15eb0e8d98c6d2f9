//! Second-order Markov chain text generation library.
//!
//! This crate provides the core model logic, including:
//! - Training word-pair chains from raw text
//! - Random-walk sentence generation with an injectable random source
//! - A typed error taxonomy shared by every fallible operation
//!
//! Only the model interface is exposed publicly. Tokenization rules are
//! kept internal to ensure training and generation always agree on them.

/// Core model logic.
///
/// This module exposes the `ChainStore` and the `TextGenerator`.
pub mod model;

/// Error taxonomy for training, lookup and generation.
pub mod error;
