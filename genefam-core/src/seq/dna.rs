use crate::error::BioResult;
use crate::seq::traits::SeqBytes;

/// Nucleotide sequence, normalised to uppercase on construction.
///
/// No alphabet check is made: ambiguity codes, `U`, gaps or stray symbols
/// are carried through and end up as `X` when translated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    pub fn new(mut bytes: Vec<u8>) -> Self {
        bytes.make_ascii_uppercase();
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
}

impl SeqBytes for DnaSeq {
    fn as_bytes(&self) -> &[u8] {
        DnaSeq::as_bytes(self)
    }

    fn from_bytes(bytes: Vec<u8>) -> BioResult<Self> {
        Ok(DnaSeq::new(bytes))
    }
}
