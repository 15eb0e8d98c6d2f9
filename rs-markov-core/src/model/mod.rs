//! Top-level module for the Markov chain generation system.
//!
//! This module provides a second-order, word-level Markov model,
//! including:
//! - A pair-keyed chain store (`ChainStore`)
//! - Training and random-walk generation (`TextGenerator`)
//! - Internal tokenization rules shared by both

/// Chain store mapping (first, second) token pairs to every third token
/// observed after them.
///
/// Supports recording triples during training and the read-only lookups
/// the generation walk relies on.
pub mod chain_store;

/// High-level interface for training chains from raw text and
/// generating random sentences.
///
/// Exposes construction with an injectable random source, incremental
/// training and the generation walk.
pub mod generator;

/// Internal tokenization and detokenization rules.
///
/// This module is not exposed publicly so that training and generation
/// can never disagree on token boundaries.
mod tokenize;
