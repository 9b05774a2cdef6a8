//! Word Permutations - Binary Entry Point
//!
//! Loads the word list, runs the matcher with the configured table and
//! prints the mapping to stdout. Progress goes to stderr.

use word_permutations::config::MatcherConfig;
use word_permutations::matcher::{find_permutations, find_permutations_strict};
use word_permutations::report::render;
use word_permutations::source::WordDictionary;
use word_permutations::types::MatchResult;
use word_permutations::validation::validate_permutation_table;

fn main() -> MatchResult<()> {
    let config = MatcherConfig::from_env()?;

    eprintln!(
        "[Config] {} v{}: table {}, strict={}",
        word_permutations::NAME,
        word_permutations::VERSION,
        config.table,
        config.strict
    );
    if let Some(warning) = validate_permutation_table(&config.table) {
        eprintln!("[Config] {}", warning);
    }

    let dictionary = WordDictionary::from_json_file(&config.words_path).map_err(|e| {
        eprintln!("[Dictionary] Failed to load {}: {}", config.words_path.display(), e);
        e
    })?;
    eprintln!(
        "[Dictionary] Loaded {} words from {}",
        dictionary.len(),
        config.words_path.display()
    );

    let mapping = if config.strict {
        find_permutations_strict(&dictionary, &config.table)
    } else {
        find_permutations(&dictionary, &config.table)
    };
    eprintln!(
        "[Matcher] {} fixed points, {} pairs",
        mapping.fixed_points().len(),
        mapping.pairs().len()
    );

    println!("{}", render(&mapping, config.output)?);
    Ok(())
}
