// IDS Splice Corpus Extraction
// Builds the candidate two-character vocabulary from dictionary sources

use crate::types::Result;
use regex::Regex;
use rustc_hash::FxHashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// Default minimum jieba frequency for a word to be kept
pub const DEFAULT_MIN_FREQ: u64 = 50;

/// CC-CEDICT entry with two-character headwords and a two-syllable reading:
/// `傳統 传统 [chuan2 tong3] /tradition/`
const CEDICT_PATTERN: &str = r"^(\S{2})\s+(\S{2})\s+\[\S+\s+\S+\]";

/// Collect two-character headwords from a CC-CEDICT file
///
/// Both the traditional and the simplified forms are kept. A missing file
/// yields an empty set with a warning.
pub fn extract_from_cedict<P: AsRef<Path>>(path: P) -> Result<FxHashSet<String>> {
    let path = path.as_ref();
    match open_source(path)? {
        Some(reader) => extract_cedict_lines(reader),
        None => Ok(FxHashSet::default()),
    }
}

/// Collect two-character headwords from CC-CEDICT formatted lines
pub fn extract_cedict_lines<R: BufRead>(reader: R) -> Result<FxHashSet<String>> {
    let re = Regex::new(CEDICT_PATTERN)?;
    let mut words = FxHashSet::default();

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        if let Some(caps) = re.captures(&line) {
            words.insert(caps[1].to_string());
            words.insert(caps[2].to_string());
        }
    }

    Ok(words)
}

/// Collect frequent two-character words from a jieba dictionary file
///
/// Lines are `word freq [tag]`. Words of exactly two characters with a
/// frequency of at least `min_freq` are kept. A missing file yields an empty
/// set with a warning.
pub fn extract_from_jieba<P: AsRef<Path>>(path: P, min_freq: u64) -> Result<FxHashSet<String>> {
    let path = path.as_ref();
    match open_source(path)? {
        Some(reader) => extract_jieba_lines(reader, min_freq),
        None => Ok(FxHashSet::default()),
    }
}

/// Collect frequent two-character words from jieba formatted lines
pub fn extract_jieba_lines<R: BufRead>(reader: R, min_freq: u64) -> Result<FxHashSet<String>> {
    let mut words = FxHashSet::default();

    for line in reader.lines() {
        let line = line?;
        let mut parts = line.trim().split(' ');
        let (word, freq) = match (parts.next(), parts.next()) {
            (Some(word), Some(freq)) => (word, freq),
            _ => continue,
        };

        // Unparseable counts are treated as malformed lines
        let freq: u64 = match freq.parse() {
            Ok(freq) => freq,
            Err(_) => continue,
        };

        if word.chars().count() == 2 && freq >= min_freq {
            words.insert(word.to_string());
        }
    }

    Ok(words)
}

/// Union of two vocabularies
pub fn merge_vocabularies(
    mut first: FxHashSet<String>,
    second: FxHashSet<String>,
) -> FxHashSet<String> {
    first.extend(second);
    first
}

/// Write a sorted, deduplicated word list, one word per line
///
/// Parent directories are created as needed. Returns the number of words
/// written.
pub fn save_word_list<P, I>(words: I, path: P) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let path = path.as_ref();
    let mut sorted: Vec<String> = words
        .into_iter()
        .map(|w| w.as_ref().to_string())
        .collect();
    sorted.sort();
    sorted.dedup();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(path)?);
    for word in &sorted {
        writeln!(out, "{}", word)?;
    }
    out.flush()?;

    info!("Saved {} words to {}", sorted.len(), path.display());
    Ok(sorted.len())
}

fn open_source(path: &Path) -> Result<Option<BufReader<File>>> {
    match File::open(path) {
        Ok(file) => Ok(Some(BufReader::new(file))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Dictionary source not found: {}", path.display());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
