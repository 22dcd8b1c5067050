use crate::seq::bytes;

/// Translated residues: one byte per codon, `X` for codons the table lacks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProteinSeq {
    bytes: Vec<u8>,
}

impl ProteinSeq {
    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Residues translated from codons missing from the codon table.
    pub fn unknown_count(&self) -> usize {
        bytes::count_byte(self.as_bytes(), b'X')
    }
}
