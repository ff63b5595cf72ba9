use env_logger::{Builder, WriteStyle};
use log::LevelFilter;
use thiserror::Error;

use std::io::Write;

pub const ENV_LEVEL: &str = "MUST_LOG";
pub const ENV_COLORS: &str = "MUST_LOG_COLORS";
pub const ENV_MODULE: &str = "MUST_LOG_MODULE";

/// Log target used by [`violation_logger`].
pub const VIOLATION_TARGET: &str = "must::handler";

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("logger init failed: {0}")]
    Init(#[from] log::SetLoggerError),
}

#[derive(Debug, Clone)]
pub struct ConsoleLoggerConfig {
    pub level: LevelFilter,
    pub colors: bool,
    pub include_module: bool,
}

impl ConsoleLoggerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unparseable values fall back to the defaults (`info`, colors on, module shown).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = lookup(ENV_LEVEL)
            .and_then(|v| v.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);
        let colors = lookup(ENV_COLORS).map(|v| v != "0").unwrap_or(true);
        let include_module = lookup(ENV_MODULE).map(|v| v != "0").unwrap_or(true);

        Self {
            level,
            colors,
            include_module,
        }
    }
}

impl Default for ConsoleLoggerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Installs a colored console logger as the global `log` backend.
///
/// Fails if any logger is already installed.
pub fn init_console_logger(config: &ConsoleLoggerConfig) -> Result<(), LoggerError> {
    let mut builder = Builder::new();
    builder.filter_level(config.level);
    builder.write_style(if config.colors {
        WriteStyle::Auto
    } else {
        WriteStyle::Never
    });

    let include_module = config.include_module;
    builder.format(move |buf, record| {
        let style = buf.default_level_style(record.level());
        if include_module {
            writeln!(
                buf,
                "[{style}{:<5}{style:#}] {:<25} {}",
                record.level(),
                record.target(),
                record.args()
            )
        } else {
            writeln!(
                buf,
                "[{style}{:<5}{style:#}] {}",
                record.level(),
                record.args()
            )
        }
    });

    builder.try_init()?;
    Ok(())
}

/// Failure handler that records each violation through `log` at error level.
///
/// The fatal path already logs the rendered violation unless
/// `MustConfig::log_violations` is off; turn that off when using this handler to avoid
/// duplicate lines.
pub fn violation_logger() -> impl Fn(&str, &str) + Send + Sync + 'static {
    |message: &str, details: &str| {
        log::error!(
            target: VIOLATION_TARGET,
            "invariant violated: message={message:?} details={details:?}"
        );
    }
}

/// Registers [`violation_logger`] with the process-wide failure registry.
pub fn register_violation_logger() {
    must::register_failure_handler(violation_logger());
}
