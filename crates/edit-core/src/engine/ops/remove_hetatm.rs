use crate::core::records::{AtomLine, RecordKind};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HetatmRemovalOutcome {
    pub text: String,
    /// Removed HETATM line counts, keyed by residue code.
    pub removed: BTreeMap<String, usize>,
}

/// Drops every HETATM line whose residue-name field matches a requested code,
/// and every HET/HETNAM/FORMUL/CONECT line that mentions one.
///
/// Removing a code that never occurs is a no-op: the text is reassembled
/// unchanged and the tally stays empty.
pub fn apply(text: &str, codes: &BTreeSet<String>) -> HetatmRemovalOutcome {
    let mut kept: Vec<&str> = Vec::new();
    let mut removed: BTreeMap<String, usize> = BTreeMap::new();

    for line in text.lines() {
        let record = AtomLine::new(line);
        match record.kind() {
            RecordKind::Hetatm => {
                if let Some(code) = record.residue_name().filter(|code| codes.contains(*code)) {
                    *removed.entry(code.to_string()).or_insert(0) += 1;
                    continue;
                }
            }
            RecordKind::Het | RecordKind::Hetnam | RecordKind::Formul | RecordKind::Conect => {
                // Coarse containment over the whole line, not the residue-name
                // column. A requested code can match unrelated substrings in
                // these records; downstream consumers depend on this exact
                // behavior.
                if codes.iter().any(|code| line.contains(code.as_str())) {
                    continue;
                }
            }
            _ => {}
        }
        kept.push(line);
    }

    HetatmRemovalOutcome {
        text: super::rejoin(&kept),
        removed,
    }
}
