//! Gene length comparison between sample sequences and a reference.
//!
//! The reference folder holds one FASTA per gene; the gene name is the first
//! whitespace-separated word of the file name. For each gene, every
//! `.fasta` file in `{root}/{gene}` is expressed as a percentage of the
//! reference sequence length and the rows are written to
//! `{out_dir}/{gene}_length_comparison.csv`.

use crate::config::QcConfig;
use crate::error::{BioError, BioResult};
use crate::io::csv::table_to_csv_bytes;
use crate::io::fasta::read_nucleotide_file;
use crate::io::{file_stem, has_extension_ignore_case};
use crate::store::SeqStore;
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq)]
pub struct LengthRow {
    pub organism: String,
    pub length: usize,
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeneLengthReport {
    pub gene: String,
    pub reference: PathBuf,
    pub reference_len: usize,
    pub rows: Vec<LengthRow>,
}

impl GeneLengthReport {
    pub fn column_name(&self) -> String {
        format!("{}_Length_Percent", self.gene)
    }

    pub fn file_name(&self) -> String {
        format!("{}_length_comparison.csv", self.gene)
    }
}

/// Genes named by the reference files, in file order, without duplicates.
pub fn reference_genes<S: SeqStore>(store: &S, reference_dir: &Path) -> BioResult<Vec<String>> {
    if !store.is_dir(reference_dir) {
        return Err(BioError::MissingDirectory {
            path: reference_dir.to_path_buf(),
        });
    }
    let mut genes: Vec<String> = Vec::new();
    for path in store.list_files(reference_dir)? {
        if !has_extension_ignore_case(&path, "fasta") {
            continue;
        }
        let stem = file_stem(&path);
        let Some(gene) = stem.split_whitespace().next() else {
            continue;
        };
        if !genes.iter().any(|g| g == gene) {
            genes.push(gene.to_string());
        }
    }
    Ok(genes)
}

fn sequence_len<S: SeqStore>(store: &S, path: &Path) -> BioResult<usize> {
    let data = store.read(path)?;
    let (record, _) = read_nucleotide_file(&data)?;
    Ok(record.seq().len())
}

/// Length of the first reference file whose name contains `gene`.
pub fn reference_length<S: SeqStore>(
    store: &S,
    reference_dir: &Path,
    gene: &str,
) -> BioResult<(PathBuf, usize)> {
    let reference = store
        .list_files(reference_dir)?
        .into_iter()
        .find(|p| {
            has_extension_ignore_case(p, "fasta")
                && p.file_name()
                    .is_some_and(|n| n.to_string_lossy().contains(gene))
        })
        .ok_or_else(|| BioError::MissingReference {
            gene: gene.to_string(),
            dir: reference_dir.to_path_buf(),
        })?;
    let len = sequence_len(store, &reference)?;
    if len == 0 {
        return Err(BioError::EmptyReference { path: reference });
    }
    info!(
        "using reference {} for gene '{gene}' ({len} bp)",
        reference.display()
    );
    Ok((reference, len))
}

pub fn compare_gene_lengths<S: SeqStore>(
    store: &S,
    config: &QcConfig,
) -> BioResult<Vec<GeneLengthReport>> {
    let genes = reference_genes(store, &config.reference_dir)?;
    let mut reports = Vec::with_capacity(genes.len());

    for gene in genes {
        let (reference, reference_len) = reference_length(store, &config.reference_dir, &gene)?;
        let mut report = GeneLengthReport {
            gene,
            reference,
            reference_len,
            rows: Vec::new(),
        };

        let gene_dir = config.root.join(&report.gene);
        if !store.is_dir(&gene_dir) {
            warn!(
                "folder for gene '{}' not found: {}",
                report.gene,
                gene_dir.display()
            );
            reports.push(report);
            continue;
        }

        for path in store.list_files(&gene_dir)? {
            if !has_extension_ignore_case(&path, "fasta") {
                continue;
            }
            let length = match sequence_len(store, &path) {
                Ok(length) => length,
                Err(err) => {
                    warn!("skipping {}: {err}", path.display());
                    continue;
                }
            };
            report.rows.push(LengthRow {
                organism: file_stem(&path),
                length,
                percent: length as f64 * 100.0 / reference_len as f64,
            });
        }
        reports.push(report);
    }

    Ok(reports)
}

pub fn report_to_csv(report: &GeneLengthReport) -> BioResult<Vec<u8>> {
    let column = report.column_name();
    let rows = report
        .rows
        .iter()
        .map(|row| [row.organism.clone(), row.percent.to_string()]);
    table_to_csv_bytes(&report.file_name(), &["Organism", column.as_str()], rows)
}

/// Write one CSV per gene into `out_dir`, returning the written paths.
pub fn write_reports<S: SeqStore>(
    store: &S,
    reports: &[GeneLengthReport],
    out_dir: &Path,
) -> BioResult<Vec<PathBuf>> {
    store.create_dir_all(out_dir)?;
    let mut written = Vec::with_capacity(reports.len());
    for report in reports {
        let path = out_dir.join(report.file_name());
        store.write(&path, &report_to_csv(report)?)?;
        info!("wrote {} ({} rows)", path.display(), report.rows.len());
        written.push(path);
    }
    Ok(written)
}

pub fn run_qc<S: SeqStore>(store: &S, config: &QcConfig) -> BioResult<Vec<PathBuf>> {
    let reports = compare_gene_lengths(store, config)?;
    write_reports(store, &reports, &config.out_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;

    fn config() -> QcConfig {
        QcConfig {
            root: PathBuf::from("qc"),
            reference_dir: PathBuf::from("qc/reff"),
            out_dir: PathBuf::from("qc/out"),
        }
    }

    fn store() -> MemStore {
        MemStore::new()
            .with_file("qc/reff/spvB reference.fasta", ">ref\nATGCATGCAT\n")
            .with_file("qc/reff/spvC ref.FASTA", ">ref\nATGC\n")
            .with_file("qc/reff/readme.txt", "not a reference")
            .with_file("qc/spvB/S_enterica.fasta", ">a\nATGCATGC\n")
            .with_file("qc/spvB/E_coli.fasta", ">b\nATGCATGCATGC\n")
            .with_file("qc/spvB/notes.md", "x")
    }

    #[test]
    fn genes_come_from_reference_names() {
        let genes = reference_genes(&store(), Path::new("qc/reff")).unwrap();
        assert_eq!(genes, vec!["spvB", "spvC"]);
    }

    #[test]
    fn percentages_relative_to_reference() {
        let reports = compare_gene_lengths(&store(), &config()).unwrap();
        assert_eq!(reports.len(), 2);

        let spvb = &reports[0];
        assert_eq!(spvb.reference_len, 10);
        assert_eq!(spvb.rows.len(), 2);
        assert_eq!(spvb.rows[0].organism, "E_coli");
        assert!((spvb.rows[0].percent - 120.0).abs() < 1e-9);
        assert_eq!(spvb.rows[1].organism, "S_enterica");
        assert!((spvb.rows[1].percent - 80.0).abs() < 1e-9);

        // no sample folder for spvC
        assert!(reports[1].rows.is_empty());
    }

    #[test]
    fn writes_one_csv_per_gene() {
        let store = store();
        let written = run_qc(&store, &config()).unwrap();
        assert_eq!(
            written,
            vec![
                PathBuf::from("qc/out/spvB_length_comparison.csv"),
                PathBuf::from("qc/out/spvC_length_comparison.csv")
            ]
        );
        assert_eq!(
            store.get_string("qc/out/spvB_length_comparison.csv").as_deref(),
            Some("Organism,spvB_Length_Percent\nE_coli,120\nS_enterica,80\n")
        );
        assert_eq!(
            store.get_string("qc/out/spvC_length_comparison.csv").as_deref(),
            Some("Organism,spvC_Length_Percent\n")
        );
    }

    #[test]
    fn missing_reference_dir_is_fatal() {
        let err = compare_gene_lengths(&MemStore::new(), &config()).unwrap_err();
        assert!(matches!(err, BioError::MissingDirectory { .. }));
    }

    #[test]
    fn empty_reference_is_rejected() {
        let store = MemStore::new().with_file("qc/reff/spvD.fasta", ">ref\n");
        let err = compare_gene_lengths(&store, &config()).unwrap_err();
        assert!(matches!(err, BioError::EmptyReference { .. }));
    }

    #[test]
    fn unusual_symbols_count_towards_length() {
        let store = MemStore::new()
            .with_file("qc/reff/spvR.fasta", ">ref\nATGC*ATGC.\n")
            .with_file("qc/spvR/odd.fasta", ">odd\nAUGC.\n");
        let reports = compare_gene_lengths(&store, &config()).unwrap();
        assert_eq!(reports[0].reference_len, 10);
        assert_eq!(reports[0].rows.len(), 1);
        assert_eq!(reports[0].rows[0].length, 5);
        assert!((reports[0].rows[0].percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn gene_without_matching_reference_name() {
        // the gene token must appear in some reference file name
        let store = MemStore::new().with_dir("qc/reff");
        let err = reference_length(&store, Path::new("qc/reff"), "spvB").unwrap_err();
        assert!(matches!(err, BioError::MissingReference { .. }));
    }
}
