use phf::{Map, Set, phf_map, phf_set};

// Backbone atoms are shared by every amino-acid type during a mutation; CB is
// included so mutations never strip the beta carbon.
static BACKBONE_ATOM_NAMES: Set<&'static str> = phf_set! {
    "N", "CA", "C", "O", "CB", "OXT", "H", "HA",
};

pub static WATER_RESIDUES: Set<&'static str> = phf_set! {
    "HOH", "WAT", "DOD",
};

static SIDECHAIN_ATOMS: Map<&'static str, &'static [&'static str]> = phf_map! {
    "ALA" => &["CB"],
    "GLY" => &[],
    "SER" => &["CB", "OG"],
    "CYS" => &["CB", "SG"],
    "VAL" => &["CB", "CG1", "CG2"],
    "THR" => &["CB", "OG1", "CG2"],
    "LEU" => &["CB", "CG", "CD1", "CD2"],
    "ILE" => &["CB", "CG1", "CG2", "CD1"],
    "PRO" => &["CB", "CG", "CD"],
    "PHE" => &["CB", "CG", "CD1", "CD2", "CE1", "CE2", "CZ"],
    "TYR" => &["CB", "CG", "CD1", "CD2", "CE1", "CE2", "CZ", "OH"],
    "TRP" => &["CB", "CG", "CD1", "CD2", "NE1", "CE2", "CE3", "CZ2", "CZ3", "CH2"],
    "ASP" => &["CB", "CG", "OD1", "OD2"],
    "GLU" => &["CB", "CG", "CD", "OE1", "OE2"],
    "ASN" => &["CB", "CG", "OD1", "ND2"],
    "GLN" => &["CB", "CG", "CD", "OE1", "NE2"],
    "HIS" => &["CB", "CG", "ND1", "CD2", "CE1", "NE2"],
    "LYS" => &["CB", "CG", "CD", "CE", "NZ"],
    "ARG" => &["CB", "CG", "CD", "NE", "CZ", "NH1", "NH2"],
    "MET" => &["CB", "CG", "SD", "CE"],
};

// Chemically equivalent atoms preserved across specific mutations instead of
// being dropped, keyed "OLD:NEW".
static ATOM_RENAMES: Map<&'static str, &'static [(&'static str, &'static str)]> = phf_map! {
    "HIS:SER" => &[("CG", "OG")],
    "CYS:SER" => &[("SG", "OG")],
    "SER:CYS" => &[("OG", "SG")],
    "ASP:ASN" => &[("OD2", "ND2")],
    "GLU:GLN" => &[("OE2", "NE2")],
};

static ELEMENT_NAMES: Map<&'static str, &'static str> = phf_map! {
    "ZN" => "ZINC",
    "CO" => "COBALT",
    "FE" => "IRON",
    "MN" => "MANGANESE",
    "CU" => "COPPER",
    "NI" => "NICKEL",
    "MG" => "MAGNESIUM",
    "CA" => "CALCIUM",
    "NA" => "SODIUM",
    "K" => "POTASSIUM",
    "CD" => "CADMIUM",
    "HG" => "MERCURY",
};

pub fn is_backbone_atom(atom_name: &str) -> bool {
    BACKBONE_ATOM_NAMES.contains(atom_name.trim())
}

pub fn sidechain_atoms(residue_name: &str) -> &'static [&'static str] {
    SIDECHAIN_ATOMS.get(residue_name).copied().unwrap_or(&[])
}

/// Whether an atom of the given name can exist in the given residue type,
/// either as a backbone atom or as part of its side chain.
pub fn residue_contains_atom(residue_name: &str, atom_name: &str) -> bool {
    is_backbone_atom(atom_name) || sidechain_atoms(residue_name).contains(&atom_name)
}

/// Looks up the atom rename applied when mutating `old_residue` into
/// `new_residue`, if one is defined for this atom.
pub fn atom_rename(old_residue: &str, new_residue: &str, atom_name: &str) -> Option<&'static str> {
    let key = format!("{old_residue}:{new_residue}");
    ATOM_RENAMES
        .get(key.as_str())?
        .iter()
        .find(|(from, _)| *from == atom_name)
        .map(|&(_, to)| to)
}

pub fn element_name(symbol: &str) -> Option<&'static str> {
    ELEMENT_NAMES.get(symbol).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_backbone_atom_recognizes_the_shared_backbone_set() {
        assert!(is_backbone_atom("N"));
        assert!(is_backbone_atom("CA"));
        assert!(is_backbone_atom("C"));
        assert!(is_backbone_atom("O"));
        assert!(is_backbone_atom("CB"));
        assert!(is_backbone_atom("OXT"));
        assert!(!is_backbone_atom("CG"));
        assert!(!is_backbone_atom("NE2"));
    }

    #[test]
    fn sidechain_atoms_covers_all_twenty_standard_residues() {
        assert_eq!(SIDECHAIN_ATOMS.len(), 20);
        assert!(sidechain_atoms("GLY").is_empty());
        assert_eq!(sidechain_atoms("ALA"), &["CB"]);
        assert!(sidechain_atoms("TRP").contains(&"CH2"));
    }

    #[test]
    fn sidechain_atoms_is_empty_for_unknown_residues() {
        assert!(sidechain_atoms("XYZ").is_empty());
        assert!(sidechain_atoms("").is_empty());
    }

    #[test]
    fn residue_contains_atom_merges_backbone_and_sidechain() {
        assert!(residue_contains_atom("SER", "OG"));
        assert!(residue_contains_atom("SER", "CA"));
        assert!(!residue_contains_atom("SER", "NE2"));
        // Backbone atoms exist even in residues with no side chain.
        assert!(residue_contains_atom("GLY", "N"));
    }

    #[test]
    fn atom_rename_preserves_chemically_equivalent_positions() {
        assert_eq!(atom_rename("HIS", "SER", "CG"), Some("OG"));
        assert_eq!(atom_rename("CYS", "SER", "SG"), Some("OG"));
        assert_eq!(atom_rename("SER", "CYS", "OG"), Some("SG"));
        assert_eq!(atom_rename("ASP", "ASN", "OD2"), Some("ND2"));
        assert_eq!(atom_rename("GLU", "GLN", "OE2"), Some("NE2"));
    }

    #[test]
    fn atom_rename_is_directional_and_atom_specific() {
        assert_eq!(atom_rename("SER", "HIS", "OG"), None);
        assert_eq!(atom_rename("HIS", "SER", "ND1"), None);
        assert_eq!(atom_rename("ALA", "GLY", "CB"), None);
    }

    #[test]
    fn element_name_maps_known_metals_only() {
        assert_eq!(element_name("ZN"), Some("ZINC"));
        assert_eq!(element_name("CO"), Some("COBALT"));
        assert_eq!(element_name("K"), Some("POTASSIUM"));
        assert_eq!(element_name("XX"), None);
    }

    #[test]
    fn water_residue_codes_cover_all_three_spellings() {
        assert!(WATER_RESIDUES.contains("HOH"));
        assert!(WATER_RESIDUES.contains("WAT"));
        assert!(WATER_RESIDUES.contains("DOD"));
        assert!(!WATER_RESIDUES.contains("SO4"));
    }
}
