use crate::core::records::{AtomLine, RecordKind, slice};
use crate::core::residues;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetalSwapOutcome {
    pub text: String,
    pub atoms_replaced: usize,
}

/// Substitutes one metal for another.
///
/// A HETATM line matches when its atom-name field or its element-symbol field
/// equals the old symbol; on a match the atom-name (right-justified, width 4,
/// truncated to two characters), residue-name (width 3) and element (width 2)
/// columns are rewritten and every other byte is carried through verbatim.
/// HET/HETNAM/FORMUL headers get literal textual substitutions, which are not
/// column-restricted.
pub fn apply(text: &str, old_symbol: &str, new_symbol: &str) -> MetalSwapOutcome {
    let mut lines: Vec<Cow<'_, str>> = Vec::new();
    let mut atoms_replaced = 0;

    let display_name = new_symbol.get(..2).unwrap_or(new_symbol);
    let old_token = format!(" {old_symbol} ");
    let new_token = format!(" {new_symbol} ");

    for line in text.lines() {
        let record = AtomLine::new(line);
        let rewritten = match record.kind() {
            RecordKind::Hetatm
                if record.atom_name() == Some(old_symbol)
                    || record.element() == Some(old_symbol) =>
            {
                atoms_replaced += 1;
                let mut edited = String::with_capacity(line.len());
                edited.push_str(slice(line, 0, 12));
                edited.push_str(&format!("{display_name:>4}"));
                edited.push_str(slice(line, 16, 17));
                edited.push_str(&format!("{new_symbol:>3}"));
                edited.push_str(slice(line, 20, 76));
                edited.push_str(&format!("{new_symbol:>2}"));
                edited.push_str(slice(line, 78, usize::MAX));
                Cow::Owned(edited)
            }
            RecordKind::Het if line.contains(&old_token) => {
                Cow::Owned(line.replace(&old_token, &new_token))
            }
            RecordKind::Hetnam if line.contains(old_symbol) => {
                let mut edited = line.to_string();
                if let Some(old_name) = residues::element_name(old_symbol) {
                    let new_name = residues::element_name(new_symbol).unwrap_or(new_symbol);
                    edited = edited.replace(old_name, new_name);
                }
                Cow::Owned(edited.replace(old_symbol, new_symbol))
            }
            RecordKind::Formul if line.contains(old_symbol) => {
                Cow::Owned(line.replace(old_symbol, new_symbol))
            }
            _ => Cow::Borrowed(line),
        };
        lines.push(rewritten);
    }

    MetalSwapOutcome {
        text: super::rejoin(&lines),
        atoms_replaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COBALT_LINE: &str =
        "HETATM 1001 CO    CO A 301      10.000  12.000  14.000  1.00 15.00          CO";

    #[test]
    fn rewrites_name_residue_and_element_columns_only() {
        let outcome = apply(&format!("{COBALT_LINE}\n"), "CO", "ZN");
        assert_eq!(outcome.atoms_replaced, 1);
        let line = outcome.text.lines().next().unwrap();
        assert_eq!(&line[12..16], "  ZN");
        assert_eq!(&line[17..20], " ZN");
        assert_eq!(&line[76..78], "ZN");
        // Everything between the residue name and the element symbol,
        // coordinates included, is byte-identical.
        assert_eq!(&line[20..76], &COBALT_LINE[20..76]);
        assert_eq!(&line[..12], &COBALT_LINE[..12]);
    }

    #[test]
    fn matches_on_element_field_when_the_atom_name_differs() {
        let line =
            "HETATM 1001 CO1  COB A 301      10.000  12.000  14.000  1.00 15.00          CO";
        let outcome = apply(&format!("{line}\n"), "CO", "ZN");
        assert_eq!(outcome.atoms_replaced, 1);
    }

    #[test]
    fn unrelated_hetatm_lines_pass_through_untouched() {
        let line =
            "HETATM 2001 ZN    ZN B 302      20.000  22.000  24.000  1.00 15.00          ZN";
        let outcome = apply(&format!("{line}\n"), "CO", "MN");
        assert_eq!(outcome.atoms_replaced, 0);
        assert_eq!(outcome.text, format!("{line}\n"));
    }

    #[test]
    fn long_replacement_symbols_are_truncated_in_the_atom_name() {
        let outcome = apply(&format!("{COBALT_LINE}\n"), "CO", "FEX");
        let line = outcome.text.lines().next().unwrap().to_string();
        assert_eq!(&line[12..16], "  FE");
        assert_eq!(&line[17..20], "FEX");
    }

    #[test]
    fn het_header_substitutes_the_space_delimited_token() {
        let outcome = apply("HET     CO  A 301       1\n", "CO", "ZN");
        assert_eq!(outcome.text, "HET     ZN  A 301       1\n");
        assert_eq!(outcome.atoms_replaced, 0);
    }

    #[test]
    fn hetnam_substitutes_the_full_element_name_then_the_symbol() {
        let outcome = apply("HETNAM      CO COBALT (II) ION\n", "CO", "ZN");
        assert_eq!(outcome.text, "HETNAM      ZN ZINC (II) ION\n");
    }

    #[test]
    fn hetnam_with_an_unlisted_symbol_substitutes_the_bare_symbol() {
        let outcome = apply("HETNAM      XX UNKNOWN ION\n", "XX", "ZN");
        assert_eq!(outcome.text, "HETNAM      ZN UNKNOWN ION\n");
    }

    #[test]
    fn formul_substitutes_the_bare_symbol() {
        let outcome = apply("FORMUL  2   CO    CO 2+\n", "CO", "ZN");
        assert_eq!(outcome.text, "FORMUL  2   ZN    ZN 2+\n");
    }
}
