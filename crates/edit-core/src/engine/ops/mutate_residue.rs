use crate::core::records::{AtomLine, slice};
use crate::core::residues;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub text: String,
    /// Residue code found at the target position before the mutation.
    pub old_residue: String,
    pub atoms_modified: usize,
}

/// Mutates the residue at the given sequence number (optionally restricted to
/// one chain) into `new_residue`.
///
/// The first targeted line fixes the old residue code. Each targeted atom is
/// then either renamed (when the old→new rename table has an entry), kept
/// with only the residue-name column rewritten (when the atom exists in the
/// target residue type), or dropped.
///
/// Returns `None` when no line matches the target, in which case the caller
/// must not commit anything.
pub fn apply(
    text: &str,
    residue_number: isize,
    new_residue: &str,
    chain_filter: Option<char>,
) -> Option<MutationOutcome> {
    let target_seq = residue_number.to_string();
    let mut lines: Vec<Cow<'_, str>> = Vec::new();
    let mut old_residue: Option<String> = None;
    let mut atoms_modified = 0;

    for line in text.lines() {
        let record = AtomLine::new(line);
        if record.kind().is_coordinate() && targets(&record, &target_seq, chain_filter) {
            let old = old_residue
                .get_or_insert_with(|| record.residue_name().unwrap_or_default().to_string())
                .clone();
            let atom_name = record.atom_name().unwrap_or("");

            if let Some(renamed) = residues::atom_rename(&old, new_residue, atom_name) {
                let mut edited = String::with_capacity(line.len());
                edited.push_str(slice(line, 0, 12));
                edited.push_str(&format!(" {renamed:<3}"));
                edited.push_str(slice(line, 16, 17));
                edited.push_str(&format!("{new_residue:>3}"));
                edited.push_str(slice(line, 20, usize::MAX));
                lines.push(Cow::Owned(edited));
                atoms_modified += 1;
            } else if residues::residue_contains_atom(new_residue, atom_name) {
                let mut edited = String::with_capacity(line.len());
                edited.push_str(slice(line, 0, 17));
                edited.push_str(&format!("{new_residue:>3}"));
                edited.push_str(slice(line, 20, usize::MAX));
                lines.push(Cow::Owned(edited));
                atoms_modified += 1;
            }
            // Atoms absent from the target residue type are dropped.
            continue;
        }
        lines.push(Cow::Borrowed(line));
    }

    Some(MutationOutcome {
        text: super::rejoin(&lines),
        old_residue: old_residue?,
        atoms_modified,
    })
}

fn targets(record: &AtomLine<'_>, target_seq: &str, chain_filter: Option<char>) -> bool {
    if record.residue_seq() != Some(target_seq) {
        return false;
    }
    match chain_filter {
        None => true,
        Some(filter) => record
            .chain_id()
            .is_some_and(|chain| chain.eq_ignore_ascii_case(&filter)),
    }
}
