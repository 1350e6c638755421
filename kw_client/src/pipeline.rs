use crate::records::{EmptyKeywordPolicy, RecordBuilder, TargetColumns};
use kw_interface::llms::CompletionBackend;
use kw_utils::save_table;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "keywords.csv";
pub const DEFAULT_EXPORT_DIR: &str = "exports";

/// Everything one export run needs, handed in by the caller.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub filepath: PathBuf,
    pub headers_to_use: Vec<String>,
    pub keep: Vec<String>,
    pub output: String,
    pub export_dir: PathBuf,
    pub empty_keywords: EmptyKeywordPolicy,
}

impl PipelineConfig {
    pub fn new<P: Into<PathBuf>>(filepath: P) -> Self {
        Self {
            filepath: filepath.into(),
            headers_to_use: vec![],
            keep: vec![],
            output: DEFAULT_OUTPUT.to_string(),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            empty_keywords: EmptyKeywordPolicy::default(),
        }
    }

    pub fn headers_to_use<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers_to_use = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn keep<I, S>(mut self, keep: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep = keep.into_iter().map(Into::into).collect();
        self
    }

    pub fn output<S: Into<String>>(mut self, output: S) -> Self {
        self.output = output.into();
        self
    }

    pub fn export_dir<P: Into<PathBuf>>(mut self, export_dir: P) -> Self {
        self.export_dir = export_dir.into();
        self
    }

    pub fn empty_keywords(mut self, policy: EmptyKeywordPolicy) -> Self {
        self.empty_keywords = policy;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.export_dir.join(&self.output)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportSummary {
    pub records_written: usize,
    pub output_path: PathBuf,
}

/// Reads the input table, extracts keywords row by row and writes the keyword table
/// to `<export_dir>/<output>`.
pub async fn export_keywords<B: CompletionBackend>(
    backend: &B,
    config: &PipelineConfig,
) -> crate::Result<ExportSummary> {
    let columns = TargetColumns::new(config.headers_to_use.clone(), config.keep.clone())?;
    let builder = RecordBuilder::new(backend, columns).empty_keywords(config.empty_keywords);

    let records = builder.records_from_table(&config.filepath).await?;
    crate::info!("export_keywords: {} records built", records.len());

    if !config.export_dir.exists() {
        std::fs::create_dir_all(&config.export_dir)?;
    }
    let output_path = config.output_path();
    let records_written = save_table(&output_path, &records)?;

    crate::info!(
        "export_keywords: wrote {records_written} records to {}",
        output_path.display()
    );
    Ok(ExportSummary {
        records_written,
        output_path,
    })
}
