//! Brute-force ORF translation across alternative start/stop codons.
//!
//! For one (start, stop) pair the open region runs from the leftmost start
//! codon up to, but excluding, the rightmost stop codon. Neither search is
//! restricted to a reading frame. The region is read in triplets from its
//! first base; the first triplet always becomes `M`, so alternative
//! initiation codons (GTG, TTG, ...) still start with methionine.
//!
//! [`best_orf`] tries every pair of an ordered candidate list and keeps the
//! strictly longest translation, so the earliest candidate wins ties.

use crate::codon::{Codon, CodonTable};
use crate::error::BioResult;
use crate::seq::bytes;
use crate::seq::protein::ProteinSeq;

/// Alternative initiation codons of the bacterial code, in search order.
pub const START_CODONS: [&str; 7] = ["TTG", "CTG", "ATT", "ATC", "ATA", "ATG", "GTG"];
pub const STOP_CODONS: [&str; 3] = ["TAA", "TAG", "TGA"];

/// Marker used in file names and headers when no pair produced an ORF.
pub const NO_ORF_MARKER: &str = "NA";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OrfCandidate {
    pub start: Codon,
    pub stop: Codon,
}

impl OrfCandidate {
    pub fn new(start: Codon, stop: Codon) -> Self {
        Self { start, stop }
    }

    /// Every start/stop pair, start codons outer and stop codons inner, each
    /// in the order given. This order decides ties in [`best_orf`].
    pub fn combinations(starts: &[Codon], stops: &[Codon]) -> Vec<Self> {
        starts
            .iter()
            .flat_map(|&start| stops.iter().map(move |&stop| Self::new(start, stop)))
            .collect()
    }

    /// The default 7 x 3 search grid.
    pub fn default_grid() -> BioResult<Vec<Self>> {
        let starts = parse_codons(&START_CODONS)?;
        let stops = parse_codons(&STOP_CODONS)?;
        Ok(Self::combinations(&starts, &stops))
    }
}

pub fn parse_codons<S: AsRef<str>>(codons: &[S]) -> BioResult<Vec<Codon>> {
    codons.iter().map(|c| Codon::try_from(c.as_ref())).collect()
}

/// The winning translation for one sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BestOrf {
    pub protein: ProteinSeq,
    pub candidate: Option<OrfCandidate>,
}

impl BestOrf {
    pub fn len(&self) -> usize {
        self.protein.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protein.is_empty()
    }

    pub fn start_label(&self) -> &str {
        self.candidate
            .as_ref()
            .map_or(NO_ORF_MARKER, |c| c.start.as_str())
    }

    pub fn stop_label(&self) -> &str {
        self.candidate
            .as_ref()
            .map_or(NO_ORF_MARKER, |c| c.stop.as_str())
    }

    /// `{start}{stop}`, or `NANA` when nothing was found.
    pub fn combo_marker(&self) -> String {
        format!("{}{}", self.start_label(), self.stop_label())
    }
}

/// Translate the open region between the first `start` and the last `stop`.
///
/// Returns an empty protein when `start` is absent, `stop` is absent, or the
/// last `stop` does not begin after the first `start`. Trailing bases that do
/// not fill a triplet are dropped, and codons missing from `table` become `X`.
/// A nonempty result always has `(i_stop - i_start) / 3` residues.
pub fn translate_best_orf(
    sequence: &[u8],
    table: &CodonTable,
    start: Codon,
    stop: Codon,
) -> ProteinSeq {
    let len = sequence.len();
    let Some(i_start) = bytes::find(sequence, start.as_bytes(), 0, len) else {
        return ProteinSeq::default();
    };
    let i_stop = match bytes::rfind(sequence, stop.as_bytes(), 0, len) {
        Some(i) if i > i_start => i,
        _ => return ProteinSeq::default(),
    };

    let region = &sequence[i_start..i_stop];
    let mut out = Vec::with_capacity(region.len() / 3);
    for (i, codon) in region.chunks_exact(3).enumerate() {
        let aa = if i == 0 {
            b'M'
        } else {
            table.amino_acid(codon).unwrap_or(b'X')
        };
        out.push(aa);
    }
    ProteinSeq::from_bytes_unchecked(out)
}

/// Fold over `candidates` in order, keeping the strictly longest translation.
pub fn best_orf(sequence: &[u8], table: &CodonTable, candidates: &[OrfCandidate]) -> BestOrf {
    candidates
        .iter()
        .fold(BestOrf::default(), |best, &candidate| {
            let protein = translate_best_orf(sequence, table, candidate.start, candidate.stop);
            if protein.len() > best.protein.len() {
                BestOrf {
                    protein,
                    candidate: Some(candidate),
                }
            } else {
                best
            }
        })
}
