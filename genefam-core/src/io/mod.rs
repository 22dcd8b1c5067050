pub mod csv;
pub mod fasta;

use std::path::Path;

/// Extensions picked up as nucleotide inputs (matched case-sensitively).
pub const FASTA_EXTENSIONS: [&str; 3] = ["fasta", "fa", "fna"];

pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.contains(&e))
}

pub fn has_extension_ignore_case(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

/// File name without its last extension (`a.b.fasta` -> `a.b`).
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fasta_extensions() {
        assert!(has_extension(Path::new("x/a.fasta"), &FASTA_EXTENSIONS));
        assert!(has_extension(Path::new("a.fna"), &FASTA_EXTENSIONS));
        assert!(!has_extension(Path::new("a.FASTA"), &FASTA_EXTENSIONS));
        assert!(!has_extension(Path::new("a.txt"), &FASTA_EXTENSIONS));
        assert!(!has_extension(Path::new("fasta"), &FASTA_EXTENSIONS));
        assert!(has_extension_ignore_case(Path::new("a.FASTA"), "fasta"));
    }

    #[test]
    fn stem_drops_last_extension() {
        assert_eq!(file_stem(Path::new("dir/strain.1.fasta")), "strain.1");
        assert_eq!(file_stem(Path::new("plain")), "plain");
    }
}
