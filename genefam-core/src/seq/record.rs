use crate::seq::traits::SeqBytes;

/// A sequence with the header line it was read with, if any.
///
/// The header is kept verbatim (without the leading `>`) so it can be
/// written back unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqRecord<S: SeqBytes> {
    pub header: Option<Box<str>>,
    pub seq: S,
}

impl<S: SeqBytes> SeqRecord<S> {
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn seq(&self) -> &S {
        &self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::dna::DnaSeq;

    #[test]
    fn header_is_verbatim() {
        let rec = SeqRecord {
            header: Some("spvB  Salmonella enterica ".into()),
            seq: DnaSeq::new(b"ACGT".to_vec()),
        };
        assert_eq!(rec.header(), Some("spvB  Salmonella enterica "));
        assert_eq!(rec.seq().as_bytes(), b"ACGT");
    }

    #[test]
    fn headerless_record() {
        let rec = SeqRecord {
            header: None,
            seq: DnaSeq::new(b"ACGT".to_vec()),
        };
        assert_eq!(rec.header(), None);
    }
}
