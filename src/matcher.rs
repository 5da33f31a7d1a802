// IDS Splice Matcher
// Re-splices two characters at component boundaries into three known characters

use crate::database::CharacterDatabase;
use crate::types::Decomposition;
use rustc_hash::FxHashSet;

/// Splice matcher over a loaded database
///
/// For characters `a` and `b`, finds every `XYZ` where `X` is a prefix of a
/// linear sequence of `a`, `Z` a suffix of one of `b`, and `Y` the leftover
/// tail of `a` joined with the leftover head of `b`, each resolving to a
/// known character.
#[derive(Clone, Copy)]
pub struct SpliceMatcher<'a> {
    db: &'a CharacterDatabase,
}

impl<'a> SpliceMatcher<'a> {
    /// Create a matcher borrowing the database
    ///
    /// # Example
    /// ```
    /// # use ids_splice::{CharacterDatabase, SpliceMatcher};
    /// let db = CharacterDatabase::new();
    /// let matcher = SpliceMatcher::new(&db);
    /// assert!(matcher.find_match('木', '木').is_empty());
    /// ```
    pub fn new(db: &'a CharacterDatabase) -> Self {
        Self { db }
    }

    /// The database this matcher reads from
    pub fn database(&self) -> &'a CharacterDatabase {
        self.db
    }

    /// Every three-character splice of `a` and `b`
    ///
    /// # Arguments
    /// * `a` - First character of the word (supplies `X` and the head of `Y`)
    /// * `b` - Second character of the word (supplies the tail of `Y` and `Z`)
    ///
    /// # Returns
    /// Duplicate-free set of `XYZ` strings, empty when nothing splices
    ///
    /// # Example
    /// ```
    /// # use ids_splice::{CharacterDatabase, SpliceMatcher};
    /// let ids = "U+6797\t林\t⿰木木\nU+67F1\t柱\t⿰木主\n";
    /// let db = CharacterDatabase::from_reader(ids.as_bytes()).unwrap();
    /// let matches = SpliceMatcher::new(&db).find_match('林', '柱');
    /// assert!(matches.contains("木林主"));
    /// ```
    pub fn find_match(&self, a: char, b: char) -> FxHashSet<String> {
        let seqs_a = multi_component(self.db.linear_sequences(a));
        let seqs_b = multi_component(self.db.linear_sequences(b));

        let mut found = FxHashSet::default();
        if seqs_a.is_empty() || seqs_b.is_empty() {
            return found;
        }

        for sa in &seqs_a {
            for sb in &seqs_b {
                self.splice_pair(sa, sb, &mut found);
            }
        }

        found
    }

    /// Match a word given as a string
    ///
    /// Returns `None` unless the word is exactly two characters.
    pub fn find_match_word(&self, word: &str) -> Option<FxHashSet<String>> {
        let mut chars = word.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => Some(self.find_match(a, b)),
            _ => None,
        }
    }

    /// Try every split of one sequence pair
    fn splice_pair(&self, sa: &[char], sb: &[char], found: &mut FxHashSet<String>) {
        let mut middle: Vec<char> = Vec::with_capacity(sa.len() + sb.len());

        for i in 1..sa.len() {
            let (x_seq, a_tail) = sa.split_at(i);
            let x = match self.db.resolve(x_seq) {
                Some(x) => x,
                None => continue,
            };

            for j in 1..sb.len() {
                let (b_head, z_seq) = sb.split_at(j);
                let z = match self.db.resolve(z_seq) {
                    Some(z) => z,
                    None => continue,
                };

                middle.clear();
                middle.extend_from_slice(a_tail);
                middle.extend_from_slice(b_head);

                if let Some(y) = self.db.resolve(&middle) {
                    found.insert([x, y, z].iter().collect());
                }
            }
        }
    }
}

fn multi_component(sequences: Vec<Decomposition>) -> Vec<Decomposition> {
    sequences.into_iter().filter(|s| s.len() >= 2).collect()
}
