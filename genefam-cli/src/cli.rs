use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "genefam",
    about = "Translate per-gene nucleotide FASTA folders and compare gene lengths",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        help = "TOML file with [translate] and [qc] settings",
        value_name = "CONFIG"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        short = 't',
        long = "threads",
        global = true,
        help = "Number of threads (0 = one per core)",
        value_name = "THREADS",
        default_value_t = 0
    )]
    pub threads: usize,

    #[arg(
        short = 'L',
        long = "level",
        global = true,
        help = "Logging level; RUST_LOG takes precedence",
        value_name = "LEVEL",
        default_value_t = log::Level::Info
    )]
    pub level: log::Level,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate every gene/classification folder with the best start/stop pair
    Translate(TranslateArgs),

    /// Compare sample sequence lengths against per-gene references
    Qc(QcArgs),
}

#[derive(Debug, Parser)]
pub struct TranslateArgs {
    #[arg(
        short = 'r',
        long = "root",
        help = "Folder holding <gene>/<classification>/*.fasta",
        value_name = "ROOT"
    )]
    pub root: Option<PathBuf>,

    #[arg(
        short = 'T',
        long = "codon-table",
        help = "Codon table file with AAs/Starts/Base1/Base2/Base3 rows",
        value_name = "TABLE"
    )]
    pub codon_table: Option<PathBuf>,

    #[arg(
        short = 'g',
        long = "genes",
        help = "Gene folders to process",
        value_name = "GENES",
        value_delimiter = ','
    )]
    pub genes: Option<Vec<String>>,

    #[arg(
        short = 'k',
        long = "classes",
        help = "Classification folders inside each gene folder",
        value_name = "CLASSES",
        value_delimiter = ','
    )]
    pub classes: Option<Vec<String>>,

    #[arg(
        short = 'w',
        long = "line-width",
        help = "Residues per output line (0 = no wrapping)",
        value_name = "WIDTH"
    )]
    pub line_width: Option<usize>,
}

#[derive(Debug, Parser)]
pub struct QcArgs {
    #[arg(
        short = 'r',
        long = "root",
        help = "Folder holding one <gene>/ folder of samples per gene",
        value_name = "ROOT"
    )]
    pub root: Option<PathBuf>,

    #[arg(
        short = 'f',
        long = "reference-dir",
        help = "Folder with one reference fasta per gene",
        value_name = "DIR"
    )]
    pub reference_dir: Option<PathBuf>,

    #[arg(
        short = 'o',
        long = "outdir",
        help = "Where the <gene>_length_comparison.csv files go",
        value_name = "OUTDIR"
    )]
    pub out_dir: Option<PathBuf>,
}

impl TranslateArgs {
    pub fn apply(self, config: &mut genefam_core::config::TranslateConfig) {
        if let Some(root) = self.root {
            config.root = root;
        }
        if let Some(codon_table) = self.codon_table {
            config.codon_table = codon_table;
        }
        if let Some(genes) = self.genes {
            config.genes = genes;
        }
        if let Some(classes) = self.classes {
            config.classes = classes;
        }
        if let Some(line_width) = self.line_width {
            config.line_width = line_width;
        }
    }
}

impl QcArgs {
    pub fn apply(self, config: &mut genefam_core::config::QcConfig) {
        if let Some(root) = self.root {
            config.root = root;
        }
        if let Some(reference_dir) = self.reference_dir {
            config.reference_dir = reference_dir;
        }
        if let Some(out_dir) = self.out_dir {
            config.out_dir = out_dir;
        }
    }
}
