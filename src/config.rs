// IDS Splice Configuration
// Default file locations and thresholds for the two binaries

use crate::corpus::DEFAULT_MIN_FREQ;
use std::path::PathBuf;

/// IDS source file
pub const DEFAULT_IDS_FILE: &str = "data/ids.txt";

/// Vocabulary produced by preprocessing, consumed by the batch search
pub const DEFAULT_VOCABULARY_FILE: &str = "output/merged_words.txt";

/// Batch search results
pub const DEFAULT_RESULTS_FILE: &str = "output/found_results.txt";

/// CC-CEDICT source
pub const DEFAULT_CEDICT_FILE: &str = "data/cedict_ts.u8";

/// jieba dictionary source
pub const DEFAULT_JIEBA_FILE: &str = "data/dict.txt.big";

/// Log progress every this many vocabulary entries
pub const DEFAULT_PROGRESS_EVERY: usize = 5000;

/// Settings for a batch splice search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceConfig {
    pub ids_file: PathBuf,
    pub vocabulary_file: PathBuf,
    pub results_file: PathBuf,
    /// Optional reverse index dump for inspection
    pub sequence_dump: Option<PathBuf>,
    pub progress_every: usize,
}

impl Default for SpliceConfig {
    fn default() -> Self {
        Self {
            ids_file: PathBuf::from(DEFAULT_IDS_FILE),
            vocabulary_file: PathBuf::from(DEFAULT_VOCABULARY_FILE),
            results_file: PathBuf::from(DEFAULT_RESULTS_FILE),
            sequence_dump: None,
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }
}

/// Settings for vocabulary building
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessConfig {
    pub cedict_file: PathBuf,
    pub jieba_file: PathBuf,
    pub min_freq: u64,
    pub output_file: PathBuf,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            cedict_file: PathBuf::from(DEFAULT_CEDICT_FILE),
            jieba_file: PathBuf::from(DEFAULT_JIEBA_FILE),
            min_freq: DEFAULT_MIN_FREQ,
            output_file: PathBuf::from(DEFAULT_VOCABULARY_FILE),
        }
    }
}
