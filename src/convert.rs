use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{
    fs::{self, File},
    io::Read,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::fixture::{collection_name, FixtureDocument, Row};

/// Parse a CSV stream: the first record is the header, every record after
/// it becomes a [`Row`] keyed by that header. A record shorter than the
/// header leaves the unmatched trailing columns absent; extra trailing
/// fields are dropped with a warning, so every row carries exactly the
/// header's columns. Cell text is kept verbatim, never coerced.
pub fn rows_from_reader<R: Read>(reader: R) -> Result<(Vec<String>, Vec<Row>)> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("parsing CSV record {}", i + 1))?;
        if record.len() > headers.len() {
            warn!(
                record = i + 1,
                extra = record.len() - headers.len(),
                "record has more fields than the header; dropping extras"
            );
        }
        let mut row = Row::new();
        for (col, header) in headers.iter().enumerate() {
            row.push(header, record.get(col).map(str::to_string));
        }
        rows.push(row);
    }

    Ok((headers, rows))
}

/// Convert one CSV file into `<collection>.yml` under `out_dir`. The output
/// file is created fresh, truncating any previous run's. Nothing is written
/// until the whole input has parsed.
pub fn convert_file(path: &Path, out_dir: &Path) -> Result<PathBuf> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let (headers, rows) =
        rows_from_reader(file).with_context(|| format!("parsing {}", path.display()))?;

    let collection = collection_name(path);
    let out_path = out_dir.join(format!("{collection}.yml"));
    let n_rows = rows.len();
    let doc = FixtureDocument::new(collection, rows);

    let yaml = serde_yaml::to_string(&doc).context("serializing fixture document")?;
    fs::write(&out_path, yaml).with_context(|| format!("writing {}", out_path.display()))?;

    info!(
        file = %path.display(),
        out = %out_path.display(),
        columns = headers.len(),
        rows = n_rows,
        "converted"
    );
    Ok(out_path)
}

/// Convert every path in order. The first failure aborts the run; later
/// paths are left unprocessed.
pub fn convert_files<P: AsRef<Path>>(paths: &[P], out_dir: &Path) -> Result<()> {
    for path in paths {
        convert_file(path.as_ref(), out_dir)?;
    }
    Ok(())
}
