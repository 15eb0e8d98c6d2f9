use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_markov_core::model::generator::TextGenerator;

/// Generates random sentences from a source text using second-order
/// Markov chains.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
	/// Path to the source text the chains are trained on.
	source: PathBuf,

	/// Number of sentences to generate.
	#[arg(short = 'n', long, default_value_t = 1)]
	count: usize,

	/// Seed for the random source, for reproducible output.
	#[arg(long)]
	seed: Option<u64>,
}

fn main() -> Result<()> {
	env_logger::init();
	let cli = Cli::parse();

	let source_text = fs::read_to_string(&cli.source)
		.with_context(|| format!("failed to read source text {}", cli.source.display()))?;
	log::info!("read {} bytes from {}", source_text.len(), cli.source.display());

	let mut generator = match cli.seed {
		Some(seed) => {
			let mut generator = TextGenerator::with_rng(StdRng::seed_from_u64(seed));
			generator.create_chains(&source_text)?;
			generator
		}
		None => TextGenerator::from_text(&source_text)?,
	};

	for _ in 0..cli.count {
		println!("{}", generator.generate_random_text()?);
	}

	Ok(())
}
