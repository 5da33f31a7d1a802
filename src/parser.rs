// IDS Splice Record Parser
// Turns raw IDS source lines into flat component lists

use crate::types::{Decomposition, IdsOperator, IdsRecord};
use rustc_hash::FxHashSet;

/// Comment marker at the start of a line
const COMMENT_MARKER: char = '#';

/// Opens the bracketed source tag after an IDS form (e.g. `⿰木木[GTJ]`)
const SOURCE_TAG_OPEN: char = '[';

/// Parse one line of the IDS source file
///
/// Returns `None` for blank lines, comments, and malformed lines
/// (fewer than three fields, or a character field that is not a single
/// scalar value). Unrecognized IDS forms are dropped from the record but do
/// not reject the line.
///
/// # Examples
/// ```
/// # use ids_splice::parser::parse_record;
/// let record = parse_record("U+6797\t林\t⿰木木[GTJKV]").unwrap();
/// assert_eq!(record.character, '林');
/// assert_eq!(record.decompositions, vec![vec!['木', '木']]);
///
/// assert!(parse_record("# comment").is_none());
/// ```
pub fn parse_record(line: &str) -> Option<IdsRecord> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return None;
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 3 {
        return None;
    }

    let character = single_char(fields[1])?;

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut decompositions = Vec::new();

    for raw in &fields[2..] {
        let ids = strip_source_tag(raw);
        if ids.is_empty() || !seen.insert(ids) {
            continue;
        }

        if let Some(components) = parse_ids(ids) {
            decompositions.push(components);
        }
    }

    Some(IdsRecord {
        id: fields[0].to_string(),
        character,
        decompositions,
    })
}

/// Extract the component list of a single IDS form
///
/// Only forms led by a recognized operator produce components; the rest of
/// the form is taken character by character, in order.
///
/// # Examples
/// ```
/// # use ids_splice::parser::parse_ids;
/// assert_eq!(parse_ids("⿲彳亍亍"), Some(vec!['彳', '亍', '亍']));
/// assert_eq!(parse_ids("⿱艹早"), None);
/// ```
pub fn parse_ids(ids: &str) -> Option<Decomposition> {
    let mut chars = ids.chars();
    IdsOperator::from_char(chars.next()?)?;

    let components: Decomposition = chars.collect();
    if components.is_empty() {
        None
    } else {
        Some(components)
    }
}

/// Remove the `[...]` source tag and surrounding whitespace
pub fn strip_source_tag(raw: &str) -> &str {
    raw.split(SOURCE_TAG_OPEN).next().unwrap_or_default().trim()
}

fn single_char(field: &str) -> Option<char> {
    let mut chars = field.trim().chars();
    let c = chars.next()?;
    match chars.next() {
        None => Some(c),
        Some(_) => None,
    }
}
