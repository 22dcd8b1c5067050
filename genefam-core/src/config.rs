//! Run configuration for the batch drivers.
//!
//! Every value has a built-in default, so a config file only needs the keys
//! it changes:
//!
//! ```toml
//! [translate]
//! root = "SEKWENCJE_AA_KOMPLET"
//! genes = ["A", "B"]
//!
//! [qc]
//! reference_dir = "reff"
//! ```

use crate::codon::Codon;
use crate::error::{BioError, BioResult};
use crate::io::fasta::LINE_WIDTH;
use crate::orf::{parse_codons, OrfCandidate, START_CODONS, STOP_CODONS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ROOT: &str = "SEKWENCJE_AA_KOMPLET";
pub const DEFAULT_CODON_TABLE: &str = "TABELA KODON NCBI.txt";
pub const GENES: [&str; 5] = ["A", "B", "C", "D", "R"];
pub const CLASSES: [&str; 3] = ["INNE_ORG", "SOLO_SEROWAR", "TOTAL"];

/// Suffix of the output directory mirroring each input gene and class folder.
pub const OUTPUT_SUFFIX: &str = "_aa";

pub const DEFAULT_REFERENCE_DIR: &str = "reff";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub translate: TranslateConfig,
    pub qc: QcConfig,
}

impl Config {
    pub fn from_toml(text: &str, origin: &str) -> BioResult<Self> {
        toml::from_str(text).map_err(|e| BioError::Config {
            path: origin.to_string(),
            msg: e.to_string(),
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> BioResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| BioError::path_io(path, e))?;
        Self::from_toml(&text, &path.display().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslateConfig {
    /// Holds `{gene}/{class}` inputs; outputs go to `{gene}_aa/{class}_aa`.
    pub root: PathBuf,
    pub codon_table: PathBuf,
    pub genes: Vec<String>,
    pub classes: Vec<String>,
    /// Tried in order; earlier codons win length ties.
    pub start_codons: Vec<String>,
    pub stop_codons: Vec<String>,
    pub line_width: usize,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            codon_table: PathBuf::from(DEFAULT_CODON_TABLE),
            genes: to_strings(&GENES),
            classes: to_strings(&CLASSES),
            start_codons: to_strings(&START_CODONS),
            stop_codons: to_strings(&STOP_CODONS),
            line_width: LINE_WIDTH,
        }
    }
}

impl TranslateConfig {
    pub fn start_codons(&self) -> BioResult<Vec<Codon>> {
        parse_codons(&self.start_codons)
    }

    pub fn stop_codons(&self) -> BioResult<Vec<Codon>> {
        parse_codons(&self.stop_codons)
    }

    /// Start-major grid of every configured start/stop pair.
    pub fn candidates(&self) -> BioResult<Vec<OrfCandidate>> {
        Ok(OrfCandidate::combinations(
            &self.start_codons()?,
            &self.stop_codons()?,
        ))
    }

    pub fn input_dir(&self, gene: &str, class: &str) -> PathBuf {
        self.root.join(gene).join(class)
    }

    pub fn gene_output_dir(&self, gene: &str) -> PathBuf {
        self.root.join(format!("{gene}{OUTPUT_SUFFIX}"))
    }

    pub fn output_dir(&self, gene: &str, class: &str) -> PathBuf {
        self.gene_output_dir(gene)
            .join(format!("{class}{OUTPUT_SUFFIX}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QcConfig {
    /// Holds one folder of sample FASTA files per gene.
    pub root: PathBuf,
    /// Holds one reference FASTA per gene, named `<gene> ... .fasta`.
    pub reference_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl Default for QcConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            reference_dir: PathBuf::from(DEFAULT_REFERENCE_DIR),
            out_dir: PathBuf::from("."),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builtin_lists() {
        let cfg = TranslateConfig::default();
        assert_eq!(cfg.genes, vec!["A", "B", "C", "D", "R"]);
        assert_eq!(cfg.classes.len(), 3);
        assert_eq!(cfg.candidates().unwrap().len(), 21);
        assert_eq!(cfg.line_width, 60);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let text = "[translate]\nroot = \"data\"\ngenes = [\"spvB\"]\n";
        let cfg = Config::from_toml(text, "inline").unwrap();
        assert_eq!(cfg.translate.root, PathBuf::from("data"));
        assert_eq!(cfg.translate.genes, vec!["spvB"]);
        assert_eq!(cfg.translate.classes, TranslateConfig::default().classes);
        assert_eq!(cfg.qc, QcConfig::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Config::from_toml("[translate]\nroots = \"x\"\n", "inline").unwrap_err();
        assert!(matches!(err, BioError::Config { .. }));
    }

    #[test]
    fn bad_codon_is_rejected() {
        let cfg = TranslateConfig {
            stop_codons: vec!["TA".to_string()],
            ..TranslateConfig::default()
        };
        assert!(matches!(
            cfg.candidates(),
            Err(BioError::InvalidCodon { .. })
        ));
    }

    #[test]
    fn directory_layout() {
        let cfg = TranslateConfig {
            root: PathBuf::from("root"),
            ..TranslateConfig::default()
        };
        assert_eq!(cfg.input_dir("A", "TOTAL"), PathBuf::from("root/A/TOTAL"));
        assert_eq!(cfg.gene_output_dir("A"), PathBuf::from("root/A_aa"));
        assert_eq!(
            cfg.output_dir("A", "TOTAL"),
            PathBuf::from("root/A_aa/TOTAL_aa")
        );
    }
}
