use std::collections::BTreeSet;

/// Validates the shape of an externally issued accession: exactly four ASCII
/// alphanumeric characters, the first of which is a digit.
///
/// This guard applies only to accessions handed to the retrieval collaborator;
/// derived identifiers are longer, may be mixed-case, and are never
/// re-validated.
pub fn is_valid_accession(id: &str) -> bool {
    let bytes = id.as_bytes();
    bytes.len() == 4
        && bytes[0].is_ascii_digit()
        && bytes.iter().all(|b| b.is_ascii_alphanumeric())
}

/// Canonical store key for an externally supplied identifier.
pub fn canonical_key(id: &str) -> String {
    id.to_ascii_uppercase()
}

// The derived-identifier grammar below is load-bearing: downstream lookups
// reconstruct these keys, so the formats must stay bit-for-bit stable.

/// `<SRC>_NO<CODE1>_<CODE2>_...`, codes sorted ascending.
pub fn removal_id(source: &str, codes: &BTreeSet<String>) -> String {
    let joined = codes
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("_");
    format!("{source}_NO{joined}")
}

/// `<SRC>_NO<LETTERS>`, letters sorted ascending with no separator.
pub fn chain_removal_id(source: &str, chains: &BTreeSet<char>) -> String {
    let letters: String = chains.iter().collect();
    format!("{source}_NO{letters}")
}

/// `<SRC>_<NEWSYMBOL>`.
pub fn metal_swap_id(source: &str, new_symbol: &str) -> String {
    format!("{source}_{new_symbol}")
}

/// `<SRC>_<OLD1><NUM><NEW1>`, the first letters of the 3-letter codes around
/// the residue number.
pub fn mutation_id(
    source: &str,
    old_residue: &str,
    residue_number: isize,
    new_residue: &str,
) -> String {
    let old_initial = old_residue.chars().next().unwrap_or('X');
    let new_initial = new_residue.chars().next().unwrap_or('X');
    format!("{source}_{old_initial}{residue_number}{new_initial}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn accepts_well_formed_accessions() {
        assert!(is_valid_accession("1HPX"));
        assert!(is_valid_accession("2abc"));
        assert!(is_valid_accession("9xy0"));
    }

    #[test]
    fn rejects_malformed_accessions() {
        assert!(!is_valid_accession(""));
        assert!(!is_valid_accession("ABCD"));
        assert!(!is_valid_accession("1AB"));
        assert!(!is_valid_accession("1ABCD"));
        assert!(!is_valid_accession("1AB!"));
        assert!(!is_valid_accession("1AB "));
    }

    #[test]
    fn canonical_key_upper_cases_ascii() {
        assert_eq!(canonical_key("1hpx"), "1HPX");
        assert_eq!(canonical_key("1yog_noSO4"), "1YOG_NOSO4");
    }

    #[test]
    fn removal_id_joins_sorted_codes_with_underscores() {
        assert_eq!(removal_id("1HPX", &codes(&["SO4"])), "1HPX_NOSO4");
        assert_eq!(
            removal_id("1HPX", &codes(&["WAT", "HOH", "DOD"])),
            "1HPX_NODOD_HOH_WAT"
        );
    }

    #[test]
    fn chain_removal_id_concatenates_sorted_letters() {
        let chains: BTreeSet<char> = ['C', 'B'].into_iter().collect();
        assert_eq!(chain_removal_id("1HPX", &chains), "1HPX_NOBC");
    }

    #[test]
    fn metal_swap_id_appends_the_new_symbol() {
        assert_eq!(metal_swap_id("1YOG", "ZN"), "1YOG_ZN");
    }

    #[test]
    fn mutation_id_uses_first_letters_around_the_number() {
        assert_eq!(mutation_id("1ABC", "HIS", 45, "SER"), "1ABC_H45S");
        assert_eq!(mutation_id("1ABC_NOSO4", "GLU", 102, "GLN"), "1ABC_NOSO4_E102G");
    }

    #[test]
    fn derived_ids_are_deterministic_regardless_of_input_order() {
        assert_eq!(
            removal_id("1HPX", &codes(&["GOL", "SO4"])),
            removal_id("1HPX", &codes(&["SO4", "GOL"])),
        );
    }
}
