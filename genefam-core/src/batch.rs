//! Translation batch driver.
//!
//! Walks `{root}/{gene}/{class}` for every configured gene and class,
//! translates each nucleotide FASTA file with the best start/stop pair and
//! writes it to `{root}/{gene}_aa/{class}_aa/{stem}{start}{stop}.fasta`.
//!
//! Missing folders and unusable input files are skipped with a warning.
//! A file in which no pair yields an ORF is still written, with an empty
//! sequence and `NANA` in place of the codon pair.

use crate::codon::CodonTable;
use crate::config::TranslateConfig;
use crate::error::{BioError, BioResult};
use crate::io::fasta::{fasta_to_bytes, read_nucleotide_file};
use crate::io::{file_stem, has_extension, FASTA_EXTENSIONS};
use crate::orf::{best_orf, BestOrf, OrfCandidate};
use crate::store::SeqStore;
use log::{debug, info, warn};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    MissingGeneDir,
    MissingClassDir,
    EmptyFile,
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingGeneDir => f.write_str("gene directory not found"),
            SkipReason::MissingClassDir => f.write_str("classification directory not found"),
            SkipReason::EmptyFile => f.write_str("file is empty or has no sequence"),
            SkipReason::Unreadable(msg) => write!(f, "unreadable: {msg}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedUnit {
    pub path: PathBuf,
    pub reason: SkipReason,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub aa_len: usize,
    pub candidate: Option<OrfCandidate>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub written: Vec<WrittenFile>,
    pub skipped: Vec<SkippedUnit>,
}

impl BatchReport {
    fn skip(&mut self, path: PathBuf, reason: SkipReason) {
        warn!("skipping {}: {reason}", path.display());
        self.skipped.push(SkippedUnit { path, reason });
    }
}

/// One input file after translation, before anything is written.
#[derive(Debug)]
struct Translated {
    input: PathBuf,
    file_name: String,
    headers: usize,
    header: String,
    best: BestOrf,
}

/// Translate every configured gene/class folder under `config.root`.
///
/// Fails before touching any file if the root folder is missing or the
/// configured codons are invalid; failing to create or write an output is
/// also fatal. Everything else is recorded in the report and skipped.
pub fn run_translate<S: SeqStore>(
    store: &S,
    table: &CodonTable,
    config: &TranslateConfig,
) -> BioResult<BatchReport> {
    if !store.is_dir(&config.root) {
        return Err(BioError::MissingDirectory {
            path: config.root.clone(),
        });
    }
    let candidates = config.candidates()?;
    for start in config.start_codons()? {
        if !table.is_start(start.as_bytes()) {
            warn!("start codon {start} is not flagged as a start in the codon table");
        }
    }

    let mut report = BatchReport::default();

    for gene in &config.genes {
        let gene_dir = config.root.join(gene);
        if !store.is_dir(&gene_dir) {
            report.skip(gene_dir, SkipReason::MissingGeneDir);
            continue;
        }
        store.create_dir_all(&config.gene_output_dir(gene))?;

        for class in &config.classes {
            let in_dir = config.input_dir(gene, class);
            if !store.is_dir(&in_dir) {
                report.skip(in_dir, SkipReason::MissingClassDir);
                continue;
            }
            let out_dir = config.output_dir(gene, class);
            store.create_dir_all(&out_dir)?;

            let inputs: Vec<PathBuf> = match store.list_files(&in_dir) {
                Ok(files) => files
                    .into_iter()
                    .filter(|p| has_extension(p, &FASTA_EXTENSIONS))
                    .collect(),
                Err(err) => {
                    report.skip(in_dir, SkipReason::Unreadable(err.to_string()));
                    continue;
                }
            };
            debug!("{}: {} input files", in_dir.display(), inputs.len());

            // files are independent; results come back in input order
            let results: Vec<Result<Translated, SkippedUnit>> =
                par_map!(&inputs, |path: &PathBuf| translate_file(store, table, &candidates, path));

            for result in results {
                match result {
                    Ok(translated) => {
                        let written =
                            write_translated(store, &out_dir, config.line_width, translated)?;
                        report.written.push(written);
                    }
                    Err(skipped) => report.skip(skipped.path, skipped.reason),
                }
            }
        }
    }

    info!(
        "translation finished: {} written, {} skipped",
        report.written.len(),
        report.skipped.len()
    );
    Ok(report)
}

fn translate_file<S: SeqStore>(
    store: &S,
    table: &CodonTable,
    candidates: &[OrfCandidate],
    path: &Path,
) -> Result<Translated, SkippedUnit> {
    let skipped = |reason: SkipReason| SkippedUnit {
        path: path.to_path_buf(),
        reason,
    };

    let data = store
        .read(path)
        .map_err(|e| skipped(SkipReason::Unreadable(e.to_string())))?;
    let (record, headers) =
        read_nucleotide_file(&data).map_err(|e| skipped(SkipReason::Unreadable(e.to_string())))?;
    if record.seq().is_empty() {
        return Err(skipped(SkipReason::EmptyFile));
    }
    let best = best_orf(record.seq().as_bytes(), table, candidates);
    let stem = file_stem(path);
    let marker = best.combo_marker();
    let header = match record.header() {
        Some(header) => header.to_string(),
        None => format!("{stem}{marker}"),
    };

    Ok(Translated {
        input: path.to_path_buf(),
        file_name: format!("{stem}{marker}.fasta"),
        headers,
        header,
        best,
    })
}

fn write_translated<S: SeqStore>(
    store: &S,
    out_dir: &Path,
    line_width: usize,
    translated: Translated,
) -> BioResult<WrittenFile> {
    if translated.headers > 1 {
        warn!(
            "{} holds {} records; translated them joined under the first header",
            translated.input.display(),
            translated.headers
        );
    }
    let best = &translated.best;
    let fasta = fasta_to_bytes(&translated.header, best.protein.as_bytes(), line_width)?;
    let output = out_dir.join(&translated.file_name);
    store.write(&output, &fasta)?;

    info!(
        "wrote {} (aa length = {}, start = {}, stop = {})",
        output.display(),
        best.len(),
        best.start_label(),
        best.stop_label()
    );
    if best.protein.unknown_count() > 0 {
        debug!(
            "{}: {} residues from codons missing in the table",
            output.display(),
            best.protein.unknown_count()
        );
    }

    Ok(WrittenFile {
        input: translated.input,
        output,
        aa_len: best.len(),
        candidate: best.candidate,
    })
}
