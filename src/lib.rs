//! # IDS Splice: hidden three-character compounds in two-character words
//!
//! Decomposes Han characters into their graphical components using
//! Ideographic Description Sequence (IDS) data, then looks for ways the two
//! characters of a word can be cut at component boundaries and re-joined
//! into three characters that are each known to the database.
//!
//! ## Example
//!
//! With `林 = ⿰木木` and `柱 = ⿰木主`, the word 林柱 splices into 木林主:
//! `林 → 木 | 木`, `柱 → 木 | 主`, and the middle `木 + 木` is 林 again.
//!
//! ```
//! use ids_splice::{CharacterDatabase, SpliceMatcher};
//!
//! let ids = "U+6797\t林\t⿰木木[GTJKV]\nU+67F1\t柱\t⿰木主[GTJKV]\n";
//! let db = CharacterDatabase::from_reader(ids.as_bytes())?;
//!
//! let matches = SpliceMatcher::new(&db).find_match('林', '柱');
//! assert_eq!(matches.len(), 1);
//! assert!(matches.contains("木林主"));
//! # Ok::<(), ids_splice::IdsError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Record Parser** - Reads IDS lines, keeps the ⿰ and ⿲ forms
//! - **Character Database** - Character → decompositions, sequence → character
//! - **Expander** - Depth-bounded linear sequences of a character
//! - **Splice Matcher** - Enumerates prefix / middle / suffix splits
//! - **Corpus** - Builds the two-character vocabulary from CC-CEDICT and jieba
//! - **Driver** - Batch search over a vocabulary file

pub mod config;
pub mod corpus;
pub mod database;
pub mod driver;
pub mod expand;
pub mod matcher;
pub mod parser;
pub mod types;

// Re-export main types and functions for convenience
pub use config::{PreprocessConfig, SpliceConfig};
pub use corpus::{extract_from_cedict, extract_from_jieba, merge_vocabularies, save_word_list};
pub use database::CharacterDatabase;
pub use driver::{format_result_line, read_vocabulary, run_batch, run_batch_files};
pub use expand::MAX_EXPANSION_DEPTH;
pub use matcher::SpliceMatcher;
pub use parser::{parse_ids, parse_record};
pub use types::{
    BatchSummary, DatabaseStats, Decomposition, IdsError, IdsOperator, IdsRecord, Result,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
