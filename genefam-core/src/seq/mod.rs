pub mod bytes;
pub mod dna;
pub mod protein;
pub mod record;
pub mod traits;

pub use dna::DnaSeq;
pub use protein::ProteinSeq;
pub use record::SeqRecord;
pub use traits::SeqBytes;
