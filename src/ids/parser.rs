//! IDS record parsing.
//!
//! An IDS data file carries one record per line, tab separated:
//! a codepoint label, the character itself, and its decomposition written as
//! an Ideographic Description Sequence, optionally followed by a bracketed
//! variant-selector suffix such as `杀[GTJ]`.
//!
//! The structural operators of the sequence (the contiguous Unicode block
//! U+2FF0 '⿰' through U+2FFB '⿻') describe layout, not content, and are
//! never treated as components.

use regex::Regex;

use crate::error::{KanjiGraphError, Result};

/// First character of the IDS structural operator block (U+2FF0).
pub const IDS_OPERATOR_FIRST: char = '⿰';

/// Last character of the IDS structural operator block (U+2FFB).
pub const IDS_OPERATOR_LAST: char = '⿻';

/// Check whether a character is an IDS structural description operator.
pub fn is_ids_operator(c: char) -> bool {
    (IDS_OPERATOR_FIRST..=IDS_OPERATOR_LAST).contains(&c)
}

/// A single usable decomposition record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdsRecord {
    /// The character being decomposed.
    pub character: String,
    /// Its direct graphical components, in sequence order.
    pub components: Vec<char>,
}

/// Parser for raw IDS data lines.
#[derive(Debug, Clone)]
pub struct IdsParser {
    /// Alternate-glyph entity references carry no usable decomposition.
    cdp_entity: Regex,
}

impl IdsParser {
    /// Create a new IDS line parser.
    pub fn new() -> Result<Self> {
        let cdp_entity = Regex::new(r"&CDP-[0-9A-F]+;")
            .map_err(|e| KanjiGraphError::analysis(format!("Invalid entity pattern: {e}")))?;
        Ok(IdsParser { cdp_entity })
    }

    /// Parse one line of IDS data.
    ///
    /// Returns `None` for lines that carry no usable record: lines matching
    /// the CDP entity-reference pattern and lines with fewer than three
    /// tab-separated fields. A structurally valid line always yields a
    /// record, even when every character of its decomposition is filtered
    /// out and the component list comes back empty.
    ///
    /// A component equal to the container itself is dropped as a data-entry
    /// artifact; the graph layer underneath would store such self-loops
    /// verbatim if handed them.
    pub fn parse_line(&self, line: &str) -> Option<IdsRecord> {
        if self.cdp_entity.is_match(line) {
            return None;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 3 {
            return None;
        }
        let character = fields[1];

        // The bracketed suffix is a variant selector, not decomposition.
        let decomposition = match fields[2].find('[') {
            Some(position) => &fields[2][..position],
            None => fields[2],
        };

        let container = single_char(character);
        let components = decomposition
            .chars()
            .filter(|&c| !is_ids_operator(c))
            .filter(|&c| Some(c) != container)
            .collect();

        Some(IdsRecord {
            character: character.to_string(),
            components,
        })
    }
}

/// The sole character of `value`, if it holds exactly one.
fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> IdsParser {
        IdsParser::new().unwrap()
    }

    #[test]
    fn test_parse_simple_record() {
        let record = parser().parse_line("U+5F0F\t式\t⿹弋工").unwrap();
        assert_eq!(record.character, "式");
        assert_eq!(record.components, ['弋', '工']);
    }

    #[test]
    fn test_cdp_entity_line_is_skipped() {
        assert!(parser().parse_line("U+349A\t㒚\t⿰亻&CDP-8C4B;").is_none());
    }

    #[test]
    fn test_short_line_is_skipped() {
        assert!(parser().parse_line("U+5F0F\t式").is_none());
        assert!(parser().parse_line("").is_none());
    }

    #[test]
    fn test_variant_suffix_is_discarded() {
        let record = parser().parse_line("U+6BBA\t殺\t杀[GTJ]").unwrap();
        assert_eq!(record.character, "殺");
        assert_eq!(record.components, ['杀']);
    }

    #[test]
    fn test_leading_bracket_yields_no_components() {
        let record = parser().parse_line("U+6BBA\t殺\t[GTJ]").unwrap();
        assert!(record.components.is_empty());
    }

    #[test]
    fn test_operators_are_not_components() {
        let record = parser().parse_line("U+8B58\t識\t⿰言⿱音戈").unwrap();
        assert_eq!(record.components, ['言', '音', '戈']);
    }

    #[test]
    fn test_self_reference_is_dropped() {
        // Atomic characters list themselves as their own decomposition.
        let record = parser().parse_line("U+4E00\t一\t一").unwrap();
        assert!(record.components.is_empty());
    }

    #[test]
    fn test_operator_block_bounds() {
        assert!(is_ids_operator('⿰'));
        assert!(is_ids_operator('⿻'));
        assert!(!is_ids_operator('式'));
        // Neighbours of the block are ordinary characters.
        assert!(!is_ids_operator('\u{2FEF}'));
        assert!(!is_ids_operator('\u{2FFC}'));
    }
}
