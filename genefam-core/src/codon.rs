//! Genetic code tables in the NCBI five-row layout.
//!
//! A table file carries one labelled row per line:
//!
//! ```text
//! AAs    = FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG
//! Starts = ---M------**--*----M------------MMMM---------------M------------
//! Base1  = TTTTTTTTTTTTTTTTCCCCCCCCCCCCCCCCAAAAAAAAAAAAAAAAGGGGGGGGGGGGGGGG
//! Base2  = TTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGG
//! Base3  = TCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAG
//! ```
//!
//! Column `i` describes the codon `Base1[i] Base2[i] Base3[i]`: its amino acid
//! is `AAs[i]` and it is an initiation codon when `Starts[i]` is `M`.

use crate::alphabets::dna;
use crate::error::{BioError, BioResult};
use std::fmt;
use std::fs;
use std::path::Path;
use vector_map::VecMap;

/// NCBI translation table 1 (standard code).
pub const STANDARD_TABLE: &str = "\
AAs    = FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG
Starts = ---M------**--*----M---------------M----------------------------
Base1  = TTTTTTTTTTTTTTTTCCCCCCCCCCCCCCCCAAAAAAAAAAAAAAAAGGGGGGGGGGGGGGGG
Base2  = TTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGG
Base3  = TCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAG
";

/// NCBI translation table 11 (bacterial, archaeal and plant plastid code).
pub const BACTERIAL_TABLE: &str = "\
AAs    = FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG
Starts = ---M------**--*----M------------MMMM---------------M------------
Base1  = TTTTTTTTTTTTTTTTCCCCCCCCCCCCCCCCAAAAAAAAAAAAAAAAGGGGGGGGGGGGGGGG
Base2  = TTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGG
Base3  = TCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAG
";

const ROW_LABELS: [&str; 5] = ["AAs", "Starts", "Base1", "Base2", "Base3"];

/// An unambiguous nucleotide triplet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([u8; 3]);

impl Codon {
    pub fn new(bytes: &[u8]) -> BioResult<Self> {
        if !dna::is_codon(bytes) {
            return Err(BioError::InvalidCodon {
                codon: String::from_utf8_lossy(bytes).into_owned(),
            });
        }
        Ok(Self([bytes[0], bytes[1], bytes[2]]))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // validated as uppercase ACGT on construction
        std::str::from_utf8(&self.0).unwrap_or("NNN")
    }
}

impl TryFrom<&str> for Codon {
    type Error = BioError;

    fn try_from(value: &str) -> BioResult<Self> {
        Codon::new(value.trim().to_ascii_uppercase().as_bytes())
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Codon -> amino acid mapping plus the codon -> start-flag companion map.
#[derive(Clone, Debug)]
pub struct CodonTable {
    aas: VecMap<[u8; 3], u8>,
    starts: VecMap<[u8; 3], bool>,
}

impl CodonTable {
    /// Parse the five labelled rows. Row order does not matter, lines with
    /// any other label are ignored, and a repeated codon keeps its last column.
    pub fn parse(text: &str) -> BioResult<Self> {
        let mut rows: [Option<&str>; 5] = [None; 5];

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let Some((label, value)) = line.split_once('=') else {
                continue;
            };
            if let Some(slot) = ROW_LABELS.iter().position(|&l| l == label.trim()) {
                rows[slot] = Some(value.trim());
            }
        }

        let mut found = [""; 5];
        for (slot, row) in rows.into_iter().enumerate() {
            match row {
                Some(row) if !row.is_empty() => found[slot] = row,
                _ => {
                    return Err(BioError::malformed_table(format!(
                        "missing row '{}'",
                        ROW_LABELS[slot]
                    )))
                }
            }
        }

        if let Some(slot) = found.iter().position(|row| !row.is_ascii()) {
            return Err(BioError::malformed_table(format!(
                "row '{}' contains non-ASCII characters",
                ROW_LABELS[slot]
            )));
        }

        let width = found[0].len();
        if found.iter().any(|row| row.len() != width) {
            let lengths = ROW_LABELS
                .iter()
                .zip(found.iter())
                .map(|(label, row)| format!("{label}={}", row.len()))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(BioError::malformed_table(format!(
                "rows differ in length ({lengths})"
            )));
        }

        let [aas, starts, base1, base2, base3] = found.map(str::as_bytes);
        Ok(Self::from_rows(aas, starts, base1, base2, base3))
    }

    /// Built-in NCBI table 1.
    pub fn standard() -> Self {
        Self::from_label_rows(STANDARD_TABLE)
    }

    /// Built-in NCBI table 11.
    pub fn bacterial() -> Self {
        Self::from_label_rows(BACTERIAL_TABLE)
    }

    fn from_label_rows(text: &'static str) -> Self {
        let rows: Vec<&[u8]> = text
            .lines()
            .filter_map(|l| l.split_once('='))
            .map(|(_, v)| v.trim().as_bytes())
            .collect();
        Self::from_rows(rows[0], rows[1], rows[2], rows[3], rows[4])
    }

    fn from_rows(aas: &[u8], starts: &[u8], base1: &[u8], base2: &[u8], base3: &[u8]) -> Self {
        let mut table = Self {
            aas: VecMap::new(),
            starts: VecMap::new(),
        };
        for i in 0..aas.len() {
            let codon = [base1[i], base2[i], base3[i]];
            table.aas.insert(codon, aas[i]);
            table.starts.insert(codon, starts[i] == b'M');
        }
        table
    }

    /// Amino acid for a codon, `None` when the table has no such column.
    pub fn amino_acid(&self, codon: &[u8]) -> Option<u8> {
        let key: [u8; 3] = codon.try_into().ok()?;
        self.aas.get(&key).copied()
    }

    /// Whether the `Starts` row marks this codon as an initiation codon.
    pub fn is_start(&self, codon: &[u8]) -> bool {
        let Ok(key) = <[u8; 3]>::try_from(codon) else {
            return false;
        };
        self.starts.get(&key).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.aas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aas.len() == 0
    }

    pub fn codons(&self) -> impl Iterator<Item = &[u8; 3]> + '_ {
        self.aas.keys()
    }
}

/// Parse codon table text, see [`CodonTable::parse`].
pub fn load_codon_table(text: &str) -> BioResult<CodonTable> {
    CodonTable::parse(text)
}

pub fn load_codon_table_from_path(path: impl AsRef<Path>) -> BioResult<CodonTable> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| BioError::path_io(path, e))?;
    CodonTable::parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn standard_table_has_64_codons() {
        let table = load_codon_table(STANDARD_TABLE).unwrap();
        assert_eq!(table.len(), 64);
        assert_eq!(table.amino_acid(b"ATG"), Some(b'M'));
        assert_eq!(table.amino_acid(b"AAA"), Some(b'K'));
        assert_eq!(table.amino_acid(b"CCC"), Some(b'P'));
        assert_eq!(table.amino_acid(b"TAA"), Some(b'*'));
        assert_eq!(table.amino_acid(b"TGG"), Some(b'W'));
        assert_eq!(table.amino_acid(b"NNN"), None);
    }

    #[test]
    fn builtin_tables_match_parsed_text() {
        let parsed = load_codon_table(BACTERIAL_TABLE).unwrap();
        let builtin = CodonTable::bacterial();
        for codon in parsed.codons() {
            assert_eq!(parsed.amino_acid(codon), builtin.amino_acid(codon));
            assert_eq!(parsed.is_start(codon), builtin.is_start(codon));
        }
        assert_eq!(CodonTable::standard().len(), 64);
    }

    #[test]
    fn start_flags_follow_starts_row() {
        let table = CodonTable::bacterial();
        let starts: Vec<&[u8; 3]> = table.codons().filter(|c| table.is_start(*c)).collect();
        assert_eq!(starts.len(), 7);
        for codon in ["TTG", "CTG", "ATT", "ATC", "ATA", "ATG", "GTG"] {
            assert!(table.is_start(codon.as_bytes()), "{codon}");
        }
        // '*' in the Starts row is not a start flag
        assert!(!table.is_start(b"TAA"));

        let standard = CodonTable::standard();
        assert!(standard.is_start(b"ATG"));
        assert!(!standard.is_start(b"ATT"));
    }

    #[test]
    fn row_order_and_padding_do_not_matter() {
        let text = "\n  Base3 = TC\nBase1=AA\n\nAAs    =   FS  \nStarts = M-\nBase2 = TT\n";
        let table = load_codon_table(text).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.amino_acid(b"ATT"), Some(b'F'));
        assert_eq!(table.amino_acid(b"ATC"), Some(b'S'));
        assert!(table.is_start(b"ATT"));
        assert!(!table.is_start(b"ATC"));
    }

    #[test]
    fn unrelated_lines_are_ignored() {
        let text = format!("# transl_table=11\nname = Bacterial\n{BACTERIAL_TABLE}");
        assert_eq!(load_codon_table(&text).unwrap().len(), 64);
    }

    #[test]
    fn missing_row_is_malformed() {
        let text = STANDARD_TABLE
            .lines()
            .filter(|l| !l.starts_with("Base2"))
            .collect::<Vec<_>>()
            .join("\n");
        let err = load_codon_table(&text).unwrap_err();
        match err {
            BioError::MalformedTable { msg } => assert!(msg.contains("Base2"), "{msg}"),
            other => panic!("expected malformed table error, got {other:?}"),
        }
    }

    #[test]
    fn empty_row_is_malformed() {
        let text = STANDARD_TABLE.replace(
            "AAs    = FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
            "AAs    =",
        );
        assert!(matches!(
            load_codon_table(&text),
            Err(BioError::MalformedTable { .. })
        ));
    }

    #[test]
    fn unequal_rows_are_malformed() {
        let text = "AAs = FF\nStarts = --\nBase1 = TT\nBase2 = TT\nBase3 = TCA\n";
        let err = load_codon_table(text).unwrap_err();
        match err {
            BioError::MalformedTable { msg } => assert!(msg.contains("Base3=3"), "{msg}"),
            other => panic!("expected malformed table error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_codon_table_from_path("/nonexistent/table.txt").unwrap_err();
        assert!(matches!(err, BioError::PathIo { .. }));
    }

    #[test]
    fn codon_parsing() {
        assert_eq!(Codon::try_from("atg").unwrap().as_str(), "ATG");
        assert_eq!(Codon::try_from(" GTG ").unwrap().to_string(), "GTG");
        assert!(matches!(
            Codon::try_from("AT"),
            Err(BioError::InvalidCodon { .. })
        ));
        assert!(Codon::try_from("ANG").is_err());
    }

    const BASES: &[u8] = b"TCAG";
    const RESIDUES: &[u8] = b"ACDEFGHIKLMNPQRSTVWY*";

    /// Every one of the 64 codons, in a shuffled column order.
    fn shuffled_codons() -> impl Strategy<Value = Vec<[u8; 3]>> {
        let all: Vec<[u8; 3]> = BASES
            .iter()
            .flat_map(|&a| {
                BASES
                    .iter()
                    .flat_map(move |&b| BASES.iter().map(move |&c| [a, b, c]))
            })
            .collect();
        Just(all).prop_shuffle()
    }

    fn column_row(label: &str, bytes: impl Iterator<Item = u8>) -> String {
        format!("{label} = {}\n", String::from_utf8(bytes.collect()).unwrap())
    }

    proptest! {
        #[test]
        fn any_full_table_gives_64_entries(
            codons in shuffled_codons(),
            aas in prop::collection::vec(prop::sample::select(RESIDUES), 64),
            starts in prop::collection::vec(any::<bool>(), 64),
        ) {
            let text = [
                column_row("Base2", codons.iter().map(|c| c[1])),
                column_row("AAs", aas.iter().copied()),
                column_row("Base1", codons.iter().map(|c| c[0])),
                column_row("Starts", starts.iter().map(|&s| if s { b'M' } else { b'-' })),
                column_row("Base3", codons.iter().map(|c| c[2])),
            ]
            .concat();

            let table = load_codon_table(&text).unwrap();
            prop_assert_eq!(table.len(), 64);
            for (i, codon) in codons.iter().enumerate() {
                prop_assert_eq!(table.amino_acid(codon), Some(aas[i]));
                prop_assert_eq!(table.is_start(codon), starts[i]);
            }
        }
    }
}
