use crate::core::residues::WATER_RESIDUES;
use crate::engine::error::EditError;
use std::collections::BTreeSet;

/// Parameters for removing HETATM residues (ligands, ions, water).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HetatmRemoval {
    /// 3-letter residue codes to remove, e.g. `["SO4", "GOL"]`.
    pub residue_names: Vec<String>,
    /// Also remove water in all of its spellings (HOH/WAT/DOD).
    pub remove_water: bool,
}

impl HetatmRemoval {
    pub fn named(residue_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            residue_names: residue_names.into_iter().map(Into::into).collect(),
            remove_water: false,
        }
    }

    pub fn water_only() -> Self {
        Self {
            residue_names: Vec::new(),
            remove_water: true,
        }
    }

    /// The canonicalized effective code set: upper-cased, trimmed, with the
    /// water spellings folded in when requested.
    pub(crate) fn effective_codes(&self) -> Result<BTreeSet<String>, EditError> {
        let mut codes: BTreeSet<String> = self
            .residue_names
            .iter()
            .map(|name| name.trim().to_ascii_uppercase())
            .filter(|name| !name.is_empty())
            .collect();
        if self.remove_water {
            codes.extend(WATER_RESIDUES.iter().map(|water| (*water).to_string()));
        }
        if codes.is_empty() {
            return Err(EditError::MissingParameter("residue_names"));
        }
        Ok(codes)
    }
}

/// Parameters for removing whole chains.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainRemoval {
    /// Chain letters to remove, e.g. `['B', 'C']`.
    pub chain_ids: Vec<char>,
}

impl ChainRemoval {
    pub fn new(chain_ids: impl IntoIterator<Item = char>) -> Self {
        Self {
            chain_ids: chain_ids.into_iter().collect(),
        }
    }

    pub(crate) fn effective_chains(&self) -> Result<BTreeSet<char>, EditError> {
        let chains: BTreeSet<char> = self
            .chain_ids
            .iter()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| !c.is_whitespace())
            .collect();
        if chains.is_empty() {
            return Err(EditError::MissingParameter("chain_ids"));
        }
        Ok(chains)
    }
}

/// Parameters for substituting one metal ion for another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetalSwap {
    /// Element symbol to replace, e.g. `"CO"`.
    pub old_metal: String,
    /// Replacement element symbol, e.g. `"ZN"`.
    pub new_metal: String,
}

impl MetalSwap {
    pub fn new(old_metal: impl Into<String>, new_metal: impl Into<String>) -> Self {
        Self {
            old_metal: old_metal.into(),
            new_metal: new_metal.into(),
        }
    }

    pub(crate) fn effective_symbols(&self) -> Result<(String, String), EditError> {
        let old_symbol = self.old_metal.trim().to_ascii_uppercase();
        let new_symbol = self.new_metal.trim().to_ascii_uppercase();
        if old_symbol.is_empty() {
            return Err(EditError::MissingParameter("old_metal"));
        }
        if new_symbol.is_empty() {
            return Err(EditError::MissingParameter("new_metal"));
        }
        Ok((old_symbol, new_symbol))
    }
}

/// Parameters for mutating one amino-acid residue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueMutation {
    /// Residue sequence number of the mutation target.
    pub residue_number: isize,
    /// Target amino acid, 3-letter code, e.g. `"SER"`.
    pub new_residue: String,
    /// Restrict the target to one chain; `None` matches any chain.
    pub chain_id: Option<char>,
}

impl ResidueMutation {
    pub fn new(residue_number: isize, new_residue: impl Into<String>) -> Self {
        Self {
            residue_number,
            new_residue: new_residue.into(),
            chain_id: None,
        }
    }

    pub fn on_chain(mut self, chain_id: char) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    pub(crate) fn effective_target(&self) -> Result<(String, Option<char>), EditError> {
        let new_residue = self.new_residue.trim().to_ascii_uppercase();
        if new_residue.is_empty() {
            return Err(EditError::MissingParameter("new_residue"));
        }
        Ok((new_residue, self.chain_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_codes_upper_cases_and_sorts() {
        let params = HetatmRemoval::named(["so4", " gol "]);
        let codes = params.effective_codes().unwrap();
        assert_eq!(
            codes.into_iter().collect::<Vec<_>>(),
            vec!["GOL".to_string(), "SO4".to_string()]
        );
    }

    #[test]
    fn remove_water_expands_to_the_fixed_water_set() {
        let codes = HetatmRemoval::water_only().effective_codes().unwrap();
        assert_eq!(
            codes.into_iter().collect::<Vec<_>>(),
            vec!["DOD".to_string(), "HOH".to_string(), "WAT".to_string()]
        );
    }

    #[test]
    fn empty_removal_parameters_are_rejected() {
        let err = HetatmRemoval::default().effective_codes().unwrap_err();
        assert!(matches!(err, EditError::MissingParameter("residue_names")));

        let blank = HetatmRemoval::named(["  "]).effective_codes().unwrap_err();
        assert!(matches!(blank, EditError::MissingParameter("residue_names")));
    }

    #[test]
    fn chain_letters_are_upper_cased_and_deduplicated() {
        let chains = ChainRemoval::new(['b', 'B', 'c'])
            .effective_chains()
            .unwrap();
        assert_eq!(chains.into_iter().collect::<Vec<_>>(), vec!['B', 'C']);
    }

    #[test]
    fn empty_chain_set_is_rejected() {
        let err = ChainRemoval::default().effective_chains().unwrap_err();
        assert!(matches!(err, EditError::MissingParameter("chain_ids")));
    }

    #[test]
    fn metal_symbols_are_canonicalized_and_required() {
        let (old_symbol, new_symbol) = MetalSwap::new(" co ", "zn")
            .effective_symbols()
            .unwrap();
        assert_eq!(old_symbol, "CO");
        assert_eq!(new_symbol, "ZN");

        let err = MetalSwap::new("", "ZN").effective_symbols().unwrap_err();
        assert!(matches!(err, EditError::MissingParameter("old_metal")));
        let err = MetalSwap::new("CO", " ").effective_symbols().unwrap_err();
        assert!(matches!(err, EditError::MissingParameter("new_metal")));
    }

    #[test]
    fn mutation_requires_a_new_residue_code() {
        let (new_residue, chain) = ResidueMutation::new(45, "ser")
            .on_chain('A')
            .effective_target()
            .unwrap();
        assert_eq!(new_residue, "SER");
        assert_eq!(chain, Some('A'));

        let err = ResidueMutation::new(45, "").effective_target().unwrap_err();
        assert!(matches!(err, EditError::MissingParameter("new_residue")));
    }
}
