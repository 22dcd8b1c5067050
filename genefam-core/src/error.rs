use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioError {
    #[error("invalid codon '{codon}': expected exactly 3 nucleotides")]
    InvalidCodon { codon: String },

    #[error("malformed codon table: {msg}")]
    MalformedTable { msg: String },

    #[error("fasta io error: {0}")]
    FastaIo(#[from] io::Error),

    #[error("io error on {path}: {source}")]
    PathIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("directory not found: {path}")]
    MissingDirectory { path: PathBuf },

    #[error("no reference fasta found for gene '{gene}' in {dir}")]
    MissingReference { gene: String, dir: PathBuf },

    #[error("reference fasta {path} has no sequence")]
    EmptyReference { path: PathBuf },

    #[error("invalid configuration in {path}: {msg}")]
    Config { path: String, msg: String },

    #[error("csv write error in {path}: {source}")]
    CsvWrite {
        path: String,
        #[source]
        source: csv::Error,
    },
}

impl BioError {
    pub(crate) fn malformed_table(msg: impl Into<String>) -> Self {
        Self::MalformedTable { msg: msg.into() }
    }

    pub(crate) fn path_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::PathIo {
            path: path.into(),
            source,
        }
    }
}

pub type BioResult<T> = Result<T, BioError>;
