// IDS Splice Character Database
// Character → decompositions multimap plus the reverse sequence index

use crate::parser::parse_record;
use crate::types::{DatabaseStats, Decomposition, IdsError, IdsRecord, Result};
use rustc_hash::FxHashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Immutable character database built once from IDS records
///
/// - `char_to_sequences`: every known decomposition of a character, in
///   discovery order, without duplicates. Always includes `[c]`.
/// - `sequence_to_char`: multi-component sequence → character. When two
///   characters share a sequence, the one registered last wins.
#[derive(Debug, Clone, Default)]
pub struct CharacterDatabase {
    char_to_sequences: FxHashMap<char, Vec<Decomposition>>,
    sequence_to_char: FxHashMap<Decomposition, char>,
}

impl CharacterDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the database from an IDS source file
    ///
    /// A missing file is reported as [`IdsError::SourceNotFound`]; malformed
    /// lines are skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Reading IDS source {}", path.display());

        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => IdsError::SourceNotFound {
                path: path.to_path_buf(),
            },
            _ => IdsError::Io(e),
        })?;

        Self::from_reader(BufReader::new(file))
    }

    /// Build the database from any line source in IDS format
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut db = Self::new();
        let mut records = 0usize;

        for line in reader.lines() {
            if let Some(record) = parse_record(&line?) {
                db.add_record(&record);
                records += 1;
            }
        }

        info!(
            "IDS database loaded: {} records processed, {} known characters",
            records,
            db.len()
        );
        Ok(db)
    }

    /// Build the database from already parsed records
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a IdsRecord>,
    {
        let mut db = Self::new();
        for record in records {
            db.add_record(record);
        }
        db
    }

    /// Register a record: its structural decompositions, then `[character]`
    pub fn add_record(&mut self, record: &IdsRecord) {
        for components in &record.decompositions {
            self.add_entry(record.character, components.clone());
        }
        self.add_entry(record.character, vec![record.character]);
    }

    /// Register one decomposition for `character`
    ///
    /// Multi-component sequences overwrite any earlier owner in the reverse
    /// index. The forward list only grows with sequences not yet present.
    pub fn add_entry(&mut self, character: char, components: Decomposition) {
        if components.is_empty() {
            return;
        }

        if components.len() > 1 {
            if let Some(previous) = self.sequence_to_char.insert(components.clone(), character) {
                if previous != character {
                    debug!(
                        "Sequence {} remapped from {} to {}",
                        join_components(&components),
                        previous,
                        character
                    );
                }
            }
        }

        let sequences = self.char_to_sequences.entry(character).or_default();
        if !sequences.contains(&components) {
            sequences.push(components);
        }
    }

    /// Resolve an ordered run of components to a single character
    ///
    /// A single component resolves to itself. Longer runs must match a
    /// reverse index entry exactly.
    ///
    /// # Examples
    /// ```
    /// # use ids_splice::CharacterDatabase;
    /// let mut db = CharacterDatabase::new();
    /// db.add_entry('林', vec!['木', '木']);
    ///
    /// assert_eq!(db.resolve(&['口']), Some('口'));
    /// assert_eq!(db.resolve(&['木', '木']), Some('林'));
    /// assert_eq!(db.resolve(&['木', '口']), None);
    /// ```
    pub fn resolve(&self, sequence: &[char]) -> Option<char> {
        match sequence {
            [] => None,
            [single] => Some(*single),
            _ => self.sequence_to_char.get(sequence).copied(),
        }
    }

    /// Known decompositions of a character, in discovery order
    pub fn sequences(&self, character: char) -> Option<&[Decomposition]> {
        self.char_to_sequences.get(&character).map(|v| v.as_slice())
    }

    /// Whether the character has an entry
    pub fn contains(&self, character: char) -> bool {
        self.char_to_sequences.contains_key(&character)
    }

    /// Number of known characters
    pub fn len(&self) -> usize {
        self.char_to_sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.char_to_sequences.is_empty()
    }

    /// Number of reverse index entries
    pub fn reverse_len(&self) -> usize {
        self.sequence_to_char.len()
    }

    /// Size summary
    pub fn stats(&self) -> DatabaseStats {
        let structural = self
            .char_to_sequences
            .values()
            .flat_map(|seqs| seqs.iter())
            .filter(|seq| seq.len() > 1)
            .count();

        DatabaseStats {
            characters: self.len(),
            sequences: self.reverse_len(),
            structural,
        }
    }

    /// Reverse index entries sorted by (character, joined components)
    pub fn sorted_mappings(&self) -> Vec<(&[char], char)> {
        let mut entries: Vec<(&[char], char)> = self
            .sequence_to_char
            .iter()
            .map(|(seq, c)| (seq.as_slice(), *c))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Write the reverse index as text for inspection
    ///
    /// ```text
    /// # 2 sequence mappings
    /// 木+木 -> 林
    /// 木+主 -> 柱
    /// ```
    pub fn write_sequence_dump<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "# {} sequence mappings", self.reverse_len())?;
        for (seq, c) in self.sorted_mappings() {
            writeln!(out, "{} -> {}", join_components(seq), c)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Dump the reverse index to a file, creating parent directories
    pub fn dump_sequence_to_char<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        self.write_sequence_dump(BufWriter::new(File::create(path)?))?;
        info!(
            "Wrote {} sequence mappings to {}",
            self.reverse_len(),
            path.display()
        );
        Ok(())
    }
}

fn join_components(components: &[char]) -> String {
    components
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
# sample
U+6728\t木\t木
U+4E3B\t主\t主
U+6797\t林\t⿰木木[GTJKV]
U+67F1\t柱\t⿰木主[GTJKV]
";

    fn fixture() -> CharacterDatabase {
        CharacterDatabase::from_reader(FIXTURE.as_bytes()).unwrap()
    }

    #[test]
    fn test_load_counts() {
        let db = fixture();
        assert_eq!(db.len(), 4);
        assert_eq!(db.reverse_len(), 2);
    }

    #[test]
    fn test_trivial_self_decomposition_always_present() {
        let db = fixture();
        for c in ['木', '主', '林', '柱'] {
            let seqs = db.sequences(c).unwrap();
            assert!(seqs.contains(&vec![c]), "{} lacks [{}]", c, c);
        }
    }

    #[test]
    fn test_structural_before_trivial() {
        let db = fixture();
        assert_eq!(db.sequences('林').unwrap(), &[vec!['木', '木'], vec!['林']]);
    }

    #[test]
    fn test_reverse_index_only_multi_component() {
        let db = fixture();
        for (seq, _) in db.sorted_mappings() {
            assert!(seq.len() >= 2);
        }
    }

    #[test]
    fn test_duplicate_entries_suppressed() {
        let mut db = CharacterDatabase::new();
        db.add_entry('林', vec!['木', '木']);
        db.add_entry('林', vec!['木', '木']);
        db.add_entry('林', vec!['林']);
        db.add_entry('林', vec!['林']);
        assert_eq!(db.sequences('林').unwrap().len(), 2);
    }

    #[test]
    fn test_last_write_wins() {
        let mut db = CharacterDatabase::new();
        db.add_entry('甲', vec!['口', '十']);
        db.add_entry('乙', vec!['口', '十']);
        assert_eq!(db.resolve(&['口', '十']), Some('乙'));
        // The earlier owner still lists the sequence as its own
        assert!(db.sequences('甲').unwrap().contains(&vec!['口', '十']));
    }

    #[test]
    fn test_resolve_singleton_without_lookup() {
        let db = CharacterDatabase::new();
        assert_eq!(db.resolve(&['龘']), Some('龘'));
        assert_eq!(db.resolve(&[]), None);
    }

    #[test]
    fn test_resolve_order_sensitive() {
        let db = fixture();
        assert_eq!(db.resolve(&['木', '主']), Some('柱'));
        assert_eq!(db.resolve(&['主', '木']), None);
    }

    #[test]
    fn test_stats() {
        let stats = fixture().stats();
        assert_eq!(stats.characters, 4);
        assert_eq!(stats.sequences, 2);
        assert_eq!(stats.structural, 2);
    }

    #[test]
    fn test_sequence_dump_format() {
        let mut out = Vec::new();
        fixture().write_sequence_dump(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        // 林 (U+6797) sorts before 柱 (U+67F1)
        assert_eq!(text, "# 2 sequence mappings\n木+木 -> 林\n木+主 -> 柱\n");
    }

    #[test]
    fn test_load_missing_file() {
        let err = CharacterDatabase::load("definitely/not/here/ids.txt").unwrap_err();
        assert!(matches!(err, IdsError::SourceNotFound { .. }));
    }

    #[test]
    fn test_from_records() {
        let records = vec![
            parse_record("U+6797\t林\t⿰木木").unwrap(),
            parse_record("U+6728\t木\t木").unwrap(),
        ];
        let db = CharacterDatabase::from_records(&records);
        assert_eq!(db.len(), 2);
        assert_eq!(db.resolve(&['木', '木']), Some('林'));
    }
}
