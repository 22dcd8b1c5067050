#[macro_use]
mod par;

pub mod alphabets;
pub mod batch;
pub mod codon;
pub mod config;
pub mod error;
pub mod io;
pub mod orf;
pub mod qc;
pub mod seq;
pub mod store;

pub use batch::{run_translate, BatchReport};
pub use codon::{load_codon_table, load_codon_table_from_path, CodonTable};
pub use config::Config;
pub use error::{BioError, BioResult};
pub use qc::run_qc;
pub use store::{FsStore, MemStore, SeqStore};
