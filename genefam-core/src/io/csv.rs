use crate::error::{BioError, BioResult};
use csv::WriterBuilder;

/// Serialise a header row plus data rows as CSV. `path` only labels errors.
pub fn table_to_csv_bytes<I, R, F>(path: &str, headers: &[&str], rows: I) -> BioResult<Vec<u8>>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let csv_err = |source: csv::Error| BioError::CsvWrite {
        path: path.to_string(),
        source,
    };

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    writer.write_record(headers).map_err(csv_err)?;
    for row in rows {
        writer.write_record(row).map_err(csv_err)?;
    }
    writer
        .into_inner()
        .map_err(|e| csv_err(csv::Error::from(e.into_error())))
}
