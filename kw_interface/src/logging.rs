use colorful::Colorful;
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};
use tracing_subscriber::layer::SubscriberExt;

/// Where and how much the process logs.
///
/// The file layer appends to a single `<log_dir>/<logger_name>.log` that is never rotated.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: tracing::Level,
    pub logging_enabled: bool,
    pub logger_name: String,
    pub log_dir: PathBuf,
    pub log_to_stdout: bool,
    pub _tracing_guard: Option<std::sync::Arc<tracing::subscriber::DefaultGuard>>,
}

impl LoggingConfig {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            logging_enabled: true,
            logger_name: "keywords".to_string(),
            log_dir: PathBuf::from("logs"),
            log_to_stdout: true,
            _tracing_guard: None,
        }
    }
}

impl LoggingConfig {
    /// Installs the subscriber for the current thread. It stays active while this config,
    /// or a clone of it, is alive.
    pub fn load_logger(&mut self) -> crate::Result<()> {
        self._tracing_guard = if self.logging_enabled {
            Some(std::sync::Arc::new(self.create_logger()?))
        } else {
            None
        };

        if self.logging_enabled && self.log_to_stdout {
            println!(
                "{}",
                format!("Starting {} Logger", self.logger_name)
                    .color(colorful::RGB::new(0, 139, 248))
                    .bold()
            );
        }

        Ok(())
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.log_dir.join(format!("{}.log", self.logger_name))
    }

    fn create_logger(&self) -> crate::Result<tracing::subscriber::DefaultGuard> {
        if !Path::new(&self.log_dir).exists() {
            create_dir_all(&self.log_dir)?;
        }

        let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
            .rotation(tracing_appender::rolling::Rotation::NEVER)
            .filename_prefix(&self.logger_name)
            .filename_suffix("log")
            .build(&self.log_dir)?;

        let filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(self.level.into())
            .parse_lossy("");

        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false) // Disable ANSI codes for file output
            .with_writer(file_appender);

        let terminal_layer = self.log_to_stdout.then(|| {
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(false)
                .with_writer(std::io::stdout)
        });

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(terminal_layer);

        Ok(tracing::subscriber::set_default(subscriber))
    }
}

pub trait LoggingConfigTrait {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig;

    fn logging_enabled(mut self, enabled: bool) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().logging_enabled = enabled;
        self
    }

    fn logger_name<S: Into<String>>(mut self, logger_name: S) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().logger_name = logger_name.into();
        self
    }

    fn log_dir<P: Into<PathBuf>>(mut self, log_dir: P) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().log_dir = log_dir.into();
        self
    }

    fn log_to_stdout(mut self, enabled: bool) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().log_to_stdout = enabled;
        self
    }

    /// TRACE adds full request and response bodies, DEBUG the prompt and response of every
    /// row, INFO the rows read, keywords found and records written.
    fn log_level(mut self, level: tracing::Level) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = level;
        self
    }
}

impl LoggingConfigTrait for LoggingConfig {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig {
        self
    }
}
