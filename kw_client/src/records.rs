use crate::keywords::KeywordRequester;
use kw_interface::{llms::CompletionBackend, requests::CompletionError};
use kw_utils::{extract_urls, load_table, TableError, TableRow};
use std::{collections::HashSet, path::Path};

/// Column of every output record that holds the keyword.
pub const KEYWORD_COLUMN: &str = "keyword";

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),
    #[error("column {column:?} not found in row {row}")]
    MissingColumn { column: String, row: usize },
    #[error(transparent)]
    Completion(#[from] CompletionError),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// What to do with a row that produced no keywords at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyKeywordPolicy {
    /// Log it and move on to the next row.
    #[default]
    SkipRow,
    /// Stop the pass and return the records built so far.
    Halt,
}

/// Columns scanned for keywords and columns copied into every output record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetColumns {
    pub headers_to_use: Vec<String>,
    pub keep: Vec<String>,
}

impl TargetColumns {
    pub fn new<H, K>(headers_to_use: H, keep: K) -> Result<Self, RecordError>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        let headers_to_use: Vec<String> = headers_to_use.into_iter().map(Into::into).collect();
        if headers_to_use.is_empty() {
            return Err(RecordError::MissingArgument("headers_to_use"));
        }
        Ok(Self {
            headers_to_use,
            keep: keep.into_iter().map(Into::into).collect(),
        })
    }
}

/// A row's keyword sources: the plain text of its URL-free columns and the URLs of the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowSources {
    pub text: String,
    pub urls: Vec<String>,
}

/// Fans source rows out into one output record per distinct keyword.
pub struct RecordBuilder<'a, B: CompletionBackend> {
    pub requester: KeywordRequester<'a, B>,
    pub columns: TargetColumns,
    pub empty_keywords: EmptyKeywordPolicy,
}

impl<'a, B: CompletionBackend> RecordBuilder<'a, B> {
    pub fn new(backend: &'a B, columns: TargetColumns) -> Self {
        Self {
            requester: KeywordRequester::new(backend),
            columns,
            empty_keywords: EmptyKeywordPolicy::default(),
        }
    }

    pub fn empty_keywords(mut self, policy: EmptyKeywordPolicy) -> Self {
        self.empty_keywords = policy;
        self
    }

    /// Reads the table at `filepath` and builds records for all of its rows.
    pub async fn records_from_table<P: AsRef<Path>>(
        &self,
        filepath: P,
    ) -> Result<Vec<TableRow>, RecordError> {
        let filepath = filepath.as_ref();
        if filepath.as_os_str().is_empty() {
            return Err(RecordError::MissingArgument("filepath"));
        }
        let rows = load_table(filepath)?;
        crate::info!("records_from_table: {} rows in {}", rows.len(), filepath.display());
        self.build_records(&rows).await
    }

    /// Rows are handled one after another, and so are the URLs inside a row.
    pub async fn build_records(&self, rows: &[TableRow]) -> Result<Vec<TableRow>, RecordError> {
        let mut records = vec![];

        for (i, row) in rows.iter().enumerate() {
            let sources = self.split_row(i, row)?;
            let keywords = self.row_keywords(&sources).await?;
            crate::info!("build_records: row {i} keywords: {:?}", keywords);

            if keywords.is_empty() {
                match self.empty_keywords {
                    EmptyKeywordPolicy::SkipRow => {
                        crate::warn!("build_records: row {i} produced no keywords, skipping it");
                        continue;
                    }
                    EmptyKeywordPolicy::Halt => {
                        crate::warn!(
                            "build_records: row {i} produced no keywords, stopping with {} records",
                            records.len()
                        );
                        return Ok(records);
                    }
                }
            }

            for keyword in keywords {
                let mut record = TableRow::new();
                record.insert(KEYWORD_COLUMN, keyword);
                for column in &self.columns.keep {
                    // Presence was checked in split_row.
                    record.insert(column.as_str(), row.get(column).unwrap_or_default());
                }
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Sorts a row's target columns into plain text and URLs.
    ///
    /// A column with at least one URL contributes only its URLs.
    pub fn split_row(&self, index: usize, row: &TableRow) -> Result<RowSources, RecordError> {
        if let Some(column) = self
            .columns
            .headers_to_use
            .iter()
            .chain(&self.columns.keep)
            .find(|column| !row.contains(column))
        {
            return Err(RecordError::MissingColumn {
                column: column.clone(),
                row: index,
            });
        }

        let mut sources = RowSources::default();
        for column in &self.columns.headers_to_use {
            let value = row.get(column).unwrap_or_default();
            let urls = extract_urls(value);
            if urls.is_empty() {
                sources.text.push_str(value);
                sources.text.push(' ');
            } else {
                sources.urls.extend(urls);
            }
        }
        Ok(sources)
    }

    /// Union of the text and URL keywords, deduplicated in first-seen order.
    async fn row_keywords(&self, sources: &RowSources) -> Result<Vec<String>, RecordError> {
        let mut found = vec![];
        if !sources.text.trim().is_empty() {
            if let Some(keywords) = self.requester.keywords_from_text(&sources.text).await? {
                found.extend(keywords);
            }
        }
        for url in &sources.urls {
            if let Some(keywords) = self.requester.keywords_from_url(url).await? {
                found.extend(keywords);
            }
        }

        let mut seen = HashSet::new();
        found.retain(|keyword| seen.insert(keyword.clone()));
        Ok(found)
    }
}
