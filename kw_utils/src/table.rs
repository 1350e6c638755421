use csv::{ReaderBuilder, WriterBuilder};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("empty record list to save to {0}")]
    EmptyRecords(PathBuf),
    #[error("first record has no columns, nothing to derive a header for {0} from")]
    MissingFirstRecord(PathBuf),
    #[error("record column {column:?} is not in the header of {path}")]
    UnknownColumn { column: String, path: PathBuf },
}

/// One table row: column name to cell string, in column order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableRow {
    entries: Vec<(String, String)>,
}

impl TableRow {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == column)
    }

    /// Sets `column` to `value`. An existing column keeps its position and its old value is returned.
    pub fn insert<K: Into<String>, V: Into<String>>(
        &mut self,
        column: K,
        value: V,
    ) -> Option<String> {
        let column = column.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((column, value));
                None
            }
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TableRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = TableRow::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// Reads a comma separated table. The first line is the header; every later line becomes one [`TableRow`].
///
/// A header-only file gives an empty list. Short lines are padded with empty cells.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Vec<TableRow>, TableError> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut rows = vec![];
    for result in reader.records() {
        let record = result?;
        let row: TableRow = headers
            .iter()
            .enumerate()
            .map(|(i, column)| (column, record.get(i).unwrap_or_default()))
            .collect();
        rows.push(row);
    }
    tracing::debug!("load_table: {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Writes `records` as a comma separated table and returns how many rows were written.
///
/// The header comes from the first record's columns. Records without any columns are
/// logged and skipped, records with a column missing from the header fail the write.
pub fn save_table<P: AsRef<Path>>(path: P, records: &[TableRow]) -> Result<usize, TableError> {
    let path = path.as_ref();
    let first = records
        .first()
        .ok_or_else(|| TableError::EmptyRecords(path.to_path_buf()))?;
    if first.is_empty() {
        return Err(TableError::MissingFirstRecord(path.to_path_buf()));
    }
    let header: Vec<&str> = first.columns().collect();

    let file = std::fs::File::create(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = WriterBuilder::new().from_writer(file);
    writer.write_record(&header)?;

    let mut written = 0;
    for (i, row) in records.iter().enumerate() {
        if row.is_empty() {
            tracing::error!("save_table: record {i} has no columns, skipping: {row:?}");
            continue;
        }
        if let Some(column) = row.columns().find(|column| !header.contains(column)) {
            return Err(TableError::UnknownColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
        writer.write_record(header.iter().map(|column| row.get(column).unwrap_or_default()))?;
        written += 1;
    }

    writer.flush().map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("save_table: {written} records written to {}", path.display());
    Ok(written)
}
