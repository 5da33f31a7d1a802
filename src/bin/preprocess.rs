// IDS Splice Preprocessing Tool
// Builds the two-character vocabulary from CC-CEDICT and jieba dictionaries

use clap::Parser;
use ids_splice::config::{DEFAULT_CEDICT_FILE, DEFAULT_JIEBA_FILE, DEFAULT_VOCABULARY_FILE};
use ids_splice::corpus::DEFAULT_MIN_FREQ;
use ids_splice::{
    extract_from_cedict, extract_from_jieba, merge_vocabularies, save_word_list, PreprocessConfig,
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Vocabulary builder for the splice search
#[derive(Parser, Debug)]
#[command(name = "ids-preprocess")]
#[command(about = "Extract two-character words from CC-CEDICT and jieba dictionaries", long_about = None)]
#[command(version)]
struct Args {
    /// CC-CEDICT source file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CEDICT_FILE)]
    cedict: PathBuf,

    /// jieba dictionary file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_JIEBA_FILE)]
    jieba: PathBuf,

    /// Minimum jieba frequency
    #[arg(short, long, default_value_t = DEFAULT_MIN_FREQ)]
    min_freq: u64,

    /// Merged word list
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_VOCABULARY_FILE)]
    output: PathBuf,
}

impl From<Args> for PreprocessConfig {
    fn from(args: Args) -> Self {
        PreprocessConfig {
            cedict_file: args.cedict,
            jieba_file: args.jieba,
            min_freq: args.min_freq,
            output_file: args.output,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ids_splice=info,ids_preprocess=info")),
        )
        .init();

    let config = PreprocessConfig::from(Args::parse());

    if let Err(e) = run(&config) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &PreprocessConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!("Processing CC-CEDICT {}", config.cedict_file.display());
    let cedict_words = extract_from_cedict(&config.cedict_file)?;
    info!("CC-CEDICT words: {}", cedict_words.len());

    info!(
        "Processing jieba dictionary {} (min frequency {})",
        config.jieba_file.display(),
        config.min_freq
    );
    let jieba_words = extract_from_jieba(&config.jieba_file, config.min_freq)?;
    info!("jieba words: {}", jieba_words.len());

    let all_words = merge_vocabularies(cedict_words, jieba_words);
    info!("Merged vocabulary: {}", all_words.len());

    let saved = save_word_list(&all_words, &config.output_file)?;
    println!(
        "✅ Saved {} words to {}",
        saved,
        config.output_file.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let config = PreprocessConfig::from(Args::parse_from(["ids-preprocess"]));
        assert_eq!(config, PreprocessConfig::default());
    }

    #[test]
    fn test_min_freq_override() {
        let config = PreprocessConfig::from(Args::parse_from(["ids-preprocess", "-m", "100"]));
        assert_eq!(config.min_freq, 100);
    }
}
