use crate::error::{ConfigError, ConfigResult};

use serde::Deserialize;
use std::str::FromStr;
use std::sync::OnceLock;

pub const ENV_LOG_VIOLATIONS: &str = "MUST_LOG_VIOLATIONS";
pub const ENV_FATAL: &str = "MUST_FATAL";

/// How the fatal signal terminates the current execution path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FatalMode {
    /// Unwind the current thread with the rendered violation as payload.
    #[default]
    Panic,
    /// Print the rendered violation to stderr and abort the process.
    Abort,
}

impl FromStr for FatalMode {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "panic" => Ok(Self::Panic),
            "abort" => Ok(Self::Abort),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_FATAL,
                value: raw.to_owned(),
            }),
        }
    }
}

/// Process configuration for the fatal path.
/// All fields have concrete defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MustConfig {
    /// Emit `log::error!` with the rendered violation before the fatal signal.
    pub log_violations: bool,
    pub fatal: FatalMode,
}

impl Default for MustConfig {
    #[inline]
    fn default() -> Self {
        Self {
            log_violations: true,
            fatal: FatalMode::Panic,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootJson {
    #[serde(default)]
    log_violations: Option<bool>,
    #[serde(default)]
    fatal: Option<FatalMode>,
}

impl MustConfig {
    /// Defaults overlaid with `MUST_LOG_VIOLATIONS` / `MUST_FATAL`.
    ///
    /// A malformed variable is reported with `log::warn!` and leaves that field at its default.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        for key in [ENV_LOG_VIOLATIONS, ENV_FATAL] {
            let Ok(raw) = std::env::var(key) else {
                continue;
            };
            if let Err(e) = cfg.apply(key, &raw) {
                log::warn!("ignoring environment override: {e}");
            }
        }
        cfg
    }

    /// Strict variant of [`MustConfig::from_env`] over an arbitrary variable source.
    pub fn try_from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        for key in [ENV_LOG_VIOLATIONS, ENV_FATAL] {
            if let Some(raw) = lookup(key) {
                cfg.apply(key, &raw)?;
            }
        }
        Ok(cfg)
    }

    /// Parses `{"log_violations": bool, "fatal": "panic" | "abort"}`; missing keys keep defaults.
    pub fn from_json_str(data: &str) -> ConfigResult<Self> {
        let parsed: RootJson = serde_json::from_str(data)?;
        let mut cfg = Self::default();
        if let Some(v) = parsed.log_violations {
            cfg.log_violations = v;
        }
        if let Some(v) = parsed.fatal {
            cfg.fatal = v;
        }
        Ok(cfg)
    }

    #[inline]
    pub fn with_log_violations(mut self, on: bool) -> Self {
        self.log_violations = on;
        self
    }

    #[inline]
    pub fn with_fatal(mut self, mode: FatalMode) -> Self {
        self.fatal = mode;
        self
    }

    fn apply(&mut self, key: &'static str, raw: &str) -> ConfigResult<()> {
        match key {
            ENV_LOG_VIOLATIONS => self.log_violations = parse_switch(key, raw)?,
            ENV_FATAL => self.fatal = raw.parse()?,
            _ => {}
        }
        Ok(())
    }
}

fn parse_switch(key: &'static str, raw: &str) -> ConfigResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_owned(),
        }),
    }
}

static CONFIG: OnceLock<MustConfig> = OnceLock::new();

/// Installs the process configuration. Only the first call (or first use) wins.
pub fn init(config: MustConfig) -> ConfigResult<()> {
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// Active configuration, read from the environment on first use when [`init`] was not called.
#[inline]
pub fn config() -> MustConfig {
    *CONFIG.get_or_init(MustConfig::from_env)
}
