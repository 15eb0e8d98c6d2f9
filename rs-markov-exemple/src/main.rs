use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_markov_core::model::generator::TextGenerator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Train a generator directly from an in-memory corpus. Every
    // sentence is complete, so every window the walk can reach leads
    // to a sentence ender.
    let corpus = "The happy dog followed the car. The car stopped quickly. \
        A happy dog barked; the car left. Why did the dog bark? Nobody knew. \
        The dog followed the car again!";
    let mut generator = TextGenerator::from_text(corpus)?;

    // Generate a few sentences from the trained chains
    for i in 0..10 {
        println!("Sentence {}: {}", i + 1, generator.generate_random_text()?);
    }

    // Training on empty text is rejected
    match generator.create_chains("") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Empty text is invalid: {e}"),
    }

    // Generating before any training is rejected
    let mut untrained = TextGenerator::new();
    match untrained.generate_random_text() {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Generation without training is invalid: {e}"),
    }

    // A seeded random source makes the output reproducible
    let mut seeded = TextGenerator::with_rng(StdRng::seed_from_u64(42));
    seeded.create_chains(corpus)?;
    println!("Seeded sentence: {}", seeded.generate_random_text()?);

    Ok(())
}
