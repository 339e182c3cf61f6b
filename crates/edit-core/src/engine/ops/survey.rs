use crate::core::records::{AtomLine, RecordKind};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One HETATM residue type aggregated across the whole structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HetGroup {
    pub residue: String,
    /// Distinct (chain, sequence number) occurrences of this residue type.
    pub instances: usize,
    pub total_atoms: usize,
    pub chains: Vec<char>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureSurvey {
    /// Chain identifiers seen on ATOM or HETATM records.
    pub chains: Vec<char>,
    pub het_groups: Vec<HetGroup>,
}

/// Read-only inventory of heterogen residues and chains.
pub fn apply(text: &str) -> StructureSurvey {
    let mut chains: BTreeSet<char> = BTreeSet::new();
    // Atom tallies per distinct residue instance, keyed (type, chain, seq).
    let mut instances: BTreeMap<(String, char, String), usize> = BTreeMap::new();

    for line in text.lines() {
        let record = AtomLine::new(line);
        match record.kind() {
            RecordKind::Hetatm => {
                let residue = record.residue_name().unwrap_or("").to_string();
                let chain = record.chain_id().unwrap_or(' ');
                let seq = record.residue_seq().unwrap_or("").to_string();
                if chain != ' ' {
                    chains.insert(chain);
                }
                *instances.entry((residue, chain, seq)).or_insert(0) += 1;
            }
            RecordKind::Atom => {
                if let Some(chain) = record.chain_id().filter(|c| *c != ' ') {
                    chains.insert(chain);
                }
            }
            _ => {}
        }
    }

    let mut grouped: BTreeMap<String, (usize, usize, BTreeSet<char>)> = BTreeMap::new();
    for ((residue, chain, _seq), atoms) in instances {
        let entry = grouped.entry(residue).or_default();
        entry.0 += 1;
        entry.1 += atoms;
        entry.2.insert(chain);
    }

    let het_groups = grouped
        .into_iter()
        .map(|(residue, (instances, total_atoms, chains))| HetGroup {
            residue,
            instances,
            total_atoms,
            chains: chains.into_iter().collect(),
        })
        .collect();

    StructureSurvey {
        chains: chains.into_iter().collect(),
        het_groups,
    }
}
