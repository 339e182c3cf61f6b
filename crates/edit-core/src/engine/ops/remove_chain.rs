use crate::core::records::AtomLine;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRemovalOutcome {
    pub text: String,
    pub lines_removed: usize,
}

/// Drops ATOM/HETATM/TER/ANISOU lines whose chain-identifier field is present
/// and matches a requested chain. Header records never carry the chain field
/// and are untouched, even when they mention a chain letter.
pub fn apply(text: &str, chains: &BTreeSet<char>) -> ChainRemovalOutcome {
    let mut kept: Vec<&str> = Vec::new();
    let mut lines_removed = 0;

    for line in text.lines() {
        let record = AtomLine::new(line);
        if record.kind().has_chain_field()
            && record.chain_id().is_some_and(|chain| chains.contains(&chain))
        {
            lines_removed += 1;
            continue;
        }
        kept.push(line);
    }

    ChainRemovalOutcome {
        text: super::rejoin(&kept),
        lines_removed,
    }
}
