// IDS Splice Batch Driver
// Runs the splice matcher over a vocabulary and writes result lines

use crate::matcher::SpliceMatcher;
use crate::types::{BatchSummary, IdsError, Result};
use rustc_hash::FxHashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Read the vocabulary: trimmed, non-empty lines in file order
pub fn read_vocabulary<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => IdsError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => IdsError::Io(e),
    })?;

    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Render one result line: `<word> -> m1, m2, ...`
///
/// Matches are sorted so that repeated runs write identical files.
///
/// # Example
/// ```
/// # use ids_splice::driver::format_result_line;
/// # use rustc_hash::FxHashSet;
/// let matches: FxHashSet<String> = ["木林主".to_string()].into_iter().collect();
/// assert_eq!(format_result_line("林柱", &matches), "林柱 -> 木林主");
/// ```
pub fn format_result_line(word: &str, matches: &FxHashSet<String>) -> String {
    let mut sorted: Vec<&str> = matches.iter().map(|m| m.as_str()).collect();
    sorted.sort_unstable();
    format!("{} -> {}", word, sorted.join(", "))
}

/// Match every two-character word and write one line per word with matches
///
/// Words of any other length are skipped. Progress is logged every
/// `progress_every` entries (0 disables it).
pub fn run_batch<W, S>(
    matcher: &SpliceMatcher<'_>,
    words: &[S],
    mut out: W,
    progress_every: usize,
) -> Result<BatchSummary>
where
    W: Write,
    S: AsRef<str>,
{
    let mut summary = BatchSummary {
        total: words.len(),
        ..BatchSummary::default()
    };

    for (idx, word) in words.iter().enumerate() {
        let word = word.as_ref();

        if let Some(matches) = matcher.find_match_word(word) {
            summary.processed += 1;
            if !matches.is_empty() {
                writeln!(out, "{}", format_result_line(word, &matches))?;
                summary.found += 1;
            }
        }

        if progress_every > 0 && idx % progress_every == 0 {
            info!(
                "Progress: {}/{} ({} found)",
                idx, summary.total, summary.found
            );
        }
    }

    out.flush()?;
    Ok(summary)
}

/// File-backed batch run: vocabulary in, result lines out
pub fn run_batch_files<P, Q>(
    matcher: &SpliceMatcher<'_>,
    input: P,
    output: Q,
    progress_every: usize,
) -> Result<BatchSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    info!("Analyzing vocabulary {}", input.display());
    let words = read_vocabulary(input)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let out = BufWriter::new(File::create(output)?);

    let summary = run_batch(matcher, &words, out, progress_every)?;
    info!(
        "Done: {} words with matches, saved to {}",
        summary.found,
        output.display()
    );
    Ok(summary)
}
