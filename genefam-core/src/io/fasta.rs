use crate::error::BioResult;
use crate::seq::dna::DnaSeq;
use crate::seq::record::SeqRecord;
use crate::seq::traits::SeqBytes;
use std::io::{self, BufRead, BufReader, Cursor, Write};
use std::marker::PhantomData;

/// Residues per sequence line when writing.
pub const LINE_WIDTH: usize = 60;

/// Streaming FASTA reader.
///
/// Lines are trimmed and blank lines skipped. Sequence lines that appear
/// before the first header form a record without a header, so bare
/// sequence files read as a single headerless record.
pub struct FastaRecords<R, S> {
    reader: R,
    pending_header: Option<String>,
    buf_line: String,
    seq_buf: Vec<u8>,
    _marker: PhantomData<S>,
}

impl<R: BufRead, S: SeqBytes> FastaRecords<R, S> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending_header: None,
            buf_line: String::new(),
            seq_buf: Vec::new(),
            _marker: PhantomData,
        }
    }

    fn read_line(&mut self) -> BioResult<bool> {
        self.buf_line.clear();
        Ok(self.reader.read_line(&mut self.buf_line)? > 0)
    }

    fn next_record(&mut self) -> BioResult<Option<SeqRecord<S>>> {
        let mut header = self.pending_header.take();
        let mut saw_line = header.is_some();
        self.seq_buf.clear();

        while self.read_line()? {
            let line = self.buf_line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(next_header) = line.strip_prefix('>') {
                if saw_line {
                    self.pending_header = Some(next_header.to_string());
                    break;
                }
                header = Some(next_header.to_string());
                saw_line = true;
                continue;
            }
            saw_line = true;
            self.seq_buf
                .extend(line.bytes().filter(|b| !b.is_ascii_whitespace()));
        }

        if !saw_line {
            return Ok(None);
        }

        let seq = S::from_bytes(std::mem::take(&mut self.seq_buf))?;
        Ok(Some(SeqRecord {
            header: header.map(String::into_boxed_str),
            seq,
        }))
    }
}

impl<R: BufRead, S: SeqBytes> Iterator for FastaRecords<R, S> {
    type Item = BioResult<SeqRecord<S>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

pub fn read_fasta_records_from_reader<R: BufRead, S: SeqBytes>(
    reader: R,
) -> BioResult<Vec<SeqRecord<S>>> {
    FastaRecords::new(reader).collect()
}

pub fn read_fasta_records_from_bytes<S: SeqBytes>(data: &[u8]) -> BioResult<Vec<SeqRecord<S>>> {
    read_fasta_records_from_reader(BufReader::new(Cursor::new(data)))
}

/// Read a per-gene nucleotide file as one record: the first header, and the
/// sequence lines of every record joined in file order. Sequence symbols are
/// only uppercased, never rejected.
///
/// Returns the record and how many headers were seen, so callers can flag
/// files that held more than one entry.
pub fn read_nucleotide_file(data: &[u8]) -> BioResult<(SeqRecord<DnaSeq>, usize)> {
    let records = read_fasta_records_from_bytes::<DnaSeq>(data)?;
    let headers = records.iter().filter(|r| r.header.is_some()).count();

    let mut header = None;
    let mut bytes = Vec::new();
    for record in records {
        if header.is_none() {
            header = record.header;
        }
        bytes.extend_from_slice(record.seq.as_bytes());
    }

    let seq = DnaSeq::new(bytes);
    Ok((SeqRecord { header, seq }, headers))
}

/// Write one FASTA entry. The header line is always written, even for an
/// empty sequence; `width == 0` disables wrapping.
pub fn write_fasta<W: Write>(
    writer: &mut W,
    header: &str,
    seq: &[u8],
    width: usize,
) -> io::Result<()> {
    writeln!(writer, ">{header}")?;
    if seq.is_empty() {
        return Ok(());
    }
    let width = if width == 0 { seq.len() } else { width };
    for line in seq.chunks(width) {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

pub fn fasta_to_bytes(header: &str, seq: &[u8], width: usize) -> io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(header.len() + seq.len() + seq.len() / width.max(1) + 3);
    write_fasta(&mut out, header, seq, width)?;
    Ok(out)
}
