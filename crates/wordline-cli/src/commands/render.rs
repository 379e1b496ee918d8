//! Render command - tokenize text and print the normalized sentence.

use crate::GrowthArgs;
use wordline_sentence::{tokenize_with, Sentence, SentenceConfig};

pub(crate) fn run(text: &str, json: bool, growth: GrowthArgs) -> miette::Result<()> {
    let config = config_for(growth);
    let sentence = tokenize_with(text, &config)
        .map_err(|e| miette::miette!("Failed to tokenize input: {}", e))?;

    println!("{}", format_sentence(&sentence, json)?);

    sentence.destroy();
    Ok(())
}

/// Environment settings, overridden by any flags given on the command line.
fn config_for(growth: GrowthArgs) -> SentenceConfig {
    let env = SentenceConfig::from_env();
    SentenceConfig::builder()
        .initial_capacity(growth.capacity.unwrap_or(env.initial_capacity))
        .growth_factor(growth.growth.unwrap_or(env.growth_factor))
        .build()
}

fn format_sentence(sentence: &Sentence, json: bool) -> miette::Result<String> {
    if json {
        serde_json::to_string_pretty(sentence)
            .map_err(|e| miette::miette!("Failed to serialize sentence: {}", e))
    } else {
        Ok(sentence.render())
    }
}
