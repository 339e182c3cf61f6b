/// Classification of one line of PDB-format text.
///
/// Detection is a prefix match on the start of the line, not an exact-length
/// token, so `ATOM` matches both `ATOM  ` and hypothetical longer spellings.
/// The `HETATM` and `HETNAM` prefixes are tested before the bare `HET `
/// record to keep the three kinds distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Standard polymer atom coordinate record.
    Atom,
    /// Non-polymer (ligand/ion/water) atom coordinate record.
    Hetatm,
    /// Chain terminator record.
    Ter,
    /// Anisotropic temperature factor record.
    Anisou,
    /// Heterogen declaration header.
    Het,
    /// Heterogen chemical name header.
    Hetnam,
    /// Chemical formula header.
    Formul,
    /// Connectivity record.
    Conect,
    /// Any other record kind; always passed through untouched.
    Other,
}

impl RecordKind {
    pub fn of(line: &str) -> Self {
        if line.starts_with("HETATM") {
            RecordKind::Hetatm
        } else if line.starts_with("HETNAM") {
            RecordKind::Hetnam
        } else if line.starts_with("HET ") {
            RecordKind::Het
        } else if line.starts_with("ATOM") {
            RecordKind::Atom
        } else if line.starts_with("ANISOU") {
            RecordKind::Anisou
        } else if line.starts_with("TER") {
            RecordKind::Ter
        } else if line.starts_with("FORMUL") {
            RecordKind::Formul
        } else if line.starts_with("CONECT") {
            RecordKind::Conect
        } else {
            RecordKind::Other
        }
    }

    /// Whether this record carries per-atom coordinate columns.
    pub fn is_coordinate(self) -> bool {
        matches!(self, RecordKind::Atom | RecordKind::Hetatm)
    }

    /// Whether this record carries a chain identifier at column 21.
    pub fn has_chain_field(self) -> bool {
        matches!(
            self,
            RecordKind::Atom | RecordKind::Hetatm | RecordKind::Ter | RecordKind::Anisou
        )
    }
}

/// Returns the column range `[start, end)` of a line, clamped to the line
/// length. A range that falls entirely past the end of the line yields the
/// empty string rather than an index error.
pub fn slice(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    if start >= end {
        ""
    } else {
        line.get(start..end).unwrap_or("")
    }
}

/// Rebuilds a line with the columns `[start, end)` replaced. Out-of-range
/// offsets are clamped, so splicing past the end of a short line appends.
pub fn splice(line: &str, start: usize, end: usize, replacement: &str) -> String {
    let mut out = String::with_capacity(line.len() + replacement.len());
    out.push_str(slice(line, 0, start));
    out.push_str(replacement);
    out.push_str(slice(line, end, usize::MAX));
    out
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// A borrowed, typed view over one fixed-column structure line.
///
/// Field offsets are fixed by the PDB format (0-indexed, end-exclusive):
/// atom name 12-16, residue name 17-20, chain id at 21, residue sequence
/// number 22-26, element symbol 76-78. A line shorter than an offset simply
/// does not have that field; accessors return `None` instead of indexing
/// out of range.
#[derive(Debug, Clone, Copy)]
pub struct AtomLine<'a> {
    raw: &'a str,
}

impl<'a> AtomLine<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn kind(&self) -> RecordKind {
        RecordKind::of(self.raw)
    }

    pub fn atom_name(&self) -> Option<&'a str> {
        non_empty(slice(self.raw, 12, 16).trim())
    }

    pub fn residue_name(&self) -> Option<&'a str> {
        non_empty(slice(self.raw, 17, 20).trim())
    }

    pub fn chain_id(&self) -> Option<char> {
        self.raw.as_bytes().get(21).map(|&b| b as char)
    }

    pub fn residue_seq(&self) -> Option<&'a str> {
        non_empty(slice(self.raw, 22, 26).trim())
    }

    pub fn element(&self) -> Option<&'a str> {
        if self.raw.len() >= 78 {
            non_empty(slice(self.raw, 76, 78).trim())
        } else {
            None
        }
    }
}
