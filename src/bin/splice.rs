// IDS Splice CLI Tool
// Loads the IDS database and searches a vocabulary for three-character splices

use clap::Parser;
use ids_splice::config::{
    DEFAULT_IDS_FILE, DEFAULT_PROGRESS_EVERY, DEFAULT_RESULTS_FILE, DEFAULT_VOCABULARY_FILE,
};
use ids_splice::{format_result_line, run_batch_files, CharacterDatabase, SpliceConfig, SpliceMatcher};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// IDS Splice - Find three-character compounds hidden in two-character words
#[derive(Parser, Debug)]
#[command(name = "ids-splice")]
#[command(about = "Re-splice two-character words into three known characters using IDS data", long_about = None)]
#[command(version)]
struct Args {
    /// IDS source file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_IDS_FILE)]
    ids: PathBuf,

    /// Vocabulary file, one word per line
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_VOCABULARY_FILE)]
    input: PathBuf,

    /// Result file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_RESULTS_FILE)]
    output: PathBuf,

    /// Also write the sequence → character index here
    #[arg(long, value_name = "PATH")]
    dump_sequences: Option<PathBuf>,

    /// Log progress every N words (0 disables)
    #[arg(long, default_value_t = DEFAULT_PROGRESS_EVERY)]
    progress_every: usize,

    /// Match these words directly instead of running the batch
    #[arg(short, long, value_name = "WORD")]
    word: Vec<String>,
}

impl Args {
    fn config(&self) -> SpliceConfig {
        SpliceConfig {
            ids_file: self.ids.clone(),
            vocabulary_file: self.input.clone(),
            results_file: self.output.clone(),
            sequence_dump: self.dump_sequences.clone(),
            progress_every: self.progress_every,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ids_splice=info")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config();

    let db = CharacterDatabase::load(&config.ids_file)?;
    println!("✅ Database loaded: {}", db.stats());

    if let Some(dump) = &config.sequence_dump {
        db.dump_sequence_to_char(dump)?;
        println!("📝 Sequence mappings written to {}", dump.display());
    }

    let matcher = SpliceMatcher::new(&db);

    if !args.word.is_empty() {
        for word in &args.word {
            match matcher.find_match_word(word) {
                Some(matches) if !matches.is_empty() => {
                    println!("{}", format_result_line(word, &matches))
                }
                Some(_) => println!("{} -> ❌ no matches", word),
                None => println!("{} -> ⚠️  not a two-character word", word),
            }
        }
        return Ok(());
    }

    let summary = run_batch_files(
        &matcher,
        &config.vocabulary_file,
        &config.results_file,
        config.progress_every,
    )?;

    println!(
        "✨ Done: {} of {} words produced matches, saved to {}",
        summary.found,
        summary.total,
        config.results_file.display()
    );

    Ok(())
}
