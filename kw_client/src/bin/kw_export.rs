use clap::Parser;
use kw_client::{
    EmptyKeywordPolicy, KwClient, LlmApiConfigTrait, LoggingConfig, LoggingConfigTrait,
    PipelineConfig,
};
use kw_interface::llms::api::openai::DEFAULT_COMPLETION_MODEL;
use std::path::PathBuf;

/// Extract technology keywords from the rows of a CSV file and export one row per keyword.
///
/// cargo run -p kw_client --bin kw_export -- -f sessions.csv -l Title Description -k Speaker
#[derive(Parser, Debug)]
#[command(name = "kw_export", version, about)]
struct Args {
    /// Path to .csv file to process
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// List of .csv headers to search for keywords
    #[arg(short = 'l', long = "headers-list", num_args = 1.., required = true)]
    headers_list: Vec<String>,

    /// List of .csv header values to pass into output
    #[arg(short = 'k', long = "keep-list", num_args = 0..)]
    keep_list: Vec<String>,

    /// Output file name, written inside the export directory
    #[arg(short = 'o', long, default_value = "keywords.csv")]
    output: String,

    #[arg(long, default_value = "exports")]
    export_dir: PathBuf,

    /// Completion model id
    #[arg(long, default_value = DEFAULT_COMPLETION_MODEL)]
    model: String,

    /// API key. Falls back to OPENAI_API_KEY from the environment or .env
    #[arg(long)]
    api_key: Option<String>,

    /// API host, e.g. api.openai.com/v1 or http://localhost:8080/v1
    #[arg(long)]
    api_host: Option<String>,

    /// API port, appended to the host's authority
    #[arg(long)]
    api_port: Option<u16>,

    /// Directory of the append-only logs.log file
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,

    #[arg(long, default_value = "debug")]
    log_level: tracing::Level,

    /// Stop at the first row that yields no keywords instead of skipping it
    #[arg(long)]
    halt_on_empty: bool,

    #[arg(long)]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::new()
        .logger_name("logs")
        .log_dir(&args.log_dir)
        .log_to_stdout(!args.quiet)
        .log_level(args.log_level);
    logging.load_logger()?;

    let mut builder = KwClient::openai().model(&args.model);
    if let Some(host) = &args.api_host {
        builder = builder.with_api_host(host);
    }
    if let Some(port) = args.api_port {
        builder = builder.with_api_port(port.to_string());
    }
    if let Some(api_key) = &args.api_key {
        builder = builder.with_api_key(api_key);
    }
    let client = KwClient::new(builder.init()?);

    let config = PipelineConfig::new(&args.file)
        .headers_to_use(args.headers_list)
        .keep(args.keep_list)
        .output(args.output)
        .export_dir(args.export_dir)
        .empty_keywords(if args.halt_on_empty {
            EmptyKeywordPolicy::Halt
        } else {
            EmptyKeywordPolicy::SkipRow
        });

    let summary = client.export_keywords(&config).await?;
    println!(
        "Exported {} keyword records to {}",
        summary.records_written,
        summary.output_path.display()
    );
    Ok(())
}
