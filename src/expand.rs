// IDS Splice Decomposition Expander
// Depth-bounded flattening of a character's decomposition tree

use crate::database::CharacterDatabase;
use crate::types::Decomposition;

/// Deepest recursion level below the initial call (levels 0, 1 and 2)
pub const MAX_EXPANSION_DEPTH: usize = 2;

impl CharacterDatabase {
    /// Every linear sequence of a character, starting at depth 0
    pub fn linear_sequences(&self, character: char) -> Vec<Decomposition> {
        self.expand(character, 0)
    }

    /// Expand a character into its linear sequences at `depth`
    ///
    /// Each stored decomposition contributes itself (when it has more than
    /// one component, or is the trivial `[c]`) and, when that is longer, the
    /// flattening obtained by replacing every component with its own longest
    /// expansion one level down. Unknown characters and calls past
    /// [`MAX_EXPANSION_DEPTH`] yield `[[c]]`.
    ///
    /// The result is never empty and may contain duplicates.
    ///
    /// # Examples
    /// ```
    /// # use ids_splice::CharacterDatabase;
    /// let mut db = CharacterDatabase::new();
    /// db.add_entry('林', vec!['木', '木']);
    /// db.add_entry('林', vec!['林']);
    ///
    /// assert_eq!(db.expand('林', 0), vec![vec!['木', '木'], vec!['林']]);
    /// assert_eq!(db.expand('口', 0), vec![vec!['口']]);
    /// ```
    pub fn expand(&self, character: char, depth: usize) -> Vec<Decomposition> {
        if depth > MAX_EXPANSION_DEPTH {
            return vec![vec![character]];
        }
        let decompositions = match self.sequences(character) {
            Some(decompositions) => decompositions,
            None => return vec![vec![character]],
        };

        let mut results = Vec::new();

        for decomposition in decompositions {
            if decomposition.len() > 1 {
                results.push(decomposition.clone());
            } else if decomposition.first() == Some(&character) {
                // Self-decomposition: nothing below it
                results.push(decomposition.clone());
                continue;
            }

            let flattened: Decomposition = decomposition
                .iter()
                .flat_map(|&part| longest(self.expand(part, depth + 1)))
                .collect();

            if flattened.len() > decomposition.len() {
                results.push(flattened);
            }
        }

        if results.is_empty() {
            vec![vec![character]]
        } else {
            results
        }
    }
}

/// First sequence of maximal length
fn longest(sequences: Vec<Decomposition>) -> Decomposition {
    let mut best: Option<Decomposition> = None;
    for seq in sequences {
        if best.as_ref().map_or(true, |b| seq.len() > b.len()) {
            best = Some(seq);
        }
    }
    best.unwrap_or_default()
}
