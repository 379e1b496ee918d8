//! Info command - show information about wordline.

use wordline_sentence::{DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_CAPACITY};

pub(crate) fn run() -> miette::Result<()> {
    println!("Wordline");
    println!("========");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Components:");
    println!("  wordline-lexer     - Space-delimited word scanning");
    println!("  wordline-sentence  - Growable collection of owned words");
    println!();

    println!("Growth policy:");
    println!("  Initial capacity: {} (WORDLINE_INITIAL_CAPACITY)", DEFAULT_INITIAL_CAPACITY);
    println!("  Growth factor:    {} (WORDLINE_GROWTH_FACTOR)", DEFAULT_GROWTH_FACTOR);

    Ok(())
}
