use crate::alphabets::Alphabet;

pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGTacgt")
}

/// Whether `codon` is an unambiguous uppercase nucleotide triplet.
pub fn is_codon(codon: &[u8]) -> bool {
    codon.len() == 3 && codon.iter().all(u8::is_ascii_uppercase) && alphabet().is_word(codon)
}
