use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Where the active log filter came from. Earlier variants win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSource {
    Flag,
    Env,
    Config,
    Default,
}

impl fmt::Display for FilterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSource::Flag => write!(f, "--log-level"),
            FilterSource::Env => write!(f, "{}", EnvFilter::DEFAULT_ENV),
            FilterSource::Config => write!(f, "config log_level"),
            FilterSource::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    pub directive: String,
    pub source: FilterSource,
}

impl LogFilter {
    /// Pick the filter from `--log-level`, then `RUST_LOG`, then the config
    /// file (only loaded by `import` and `list`), then `warn`.
    pub fn resolve(flag: Option<&str>, env: Option<&str>, configured: Option<&str>) -> Self {
        fn non_empty(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|v| !v.is_empty())
        }
        let (directive, source) = if let Some(v) = non_empty(flag) {
            (v, FilterSource::Flag)
        } else if let Some(v) = non_empty(env) {
            (v, FilterSource::Env)
        } else if let Some(v) = non_empty(configured) {
            (v, FilterSource::Config)
        } else {
            (DEFAULT_LOG_LEVEL, FilterSource::Default)
        };
        Self {
            directive: directive.to_string(),
            source,
        }
    }

    pub fn from_environment(flag: Option<&str>, configured: Option<&str>) -> Self {
        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        Self::resolve(flag, env.as_deref(), configured)
    }
}

#[derive(Debug)]
pub enum TelemetryError {
    Filter { filter: LogFilter, source: ParseError },
    AlreadyInstalled(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { filter, source } => write!(
                f,
                "invalid log filter '{}' from {}: {}",
                filter.directive, filter.source, source
            ),
            TelemetryError::AlreadyInstalled(err) => {
                write!(f, "log subscriber already installed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::AlreadyInstalled(err) => Some(&**err),
        }
    }
}

/// Install the global subscriber on stderr; stdout carries command output only.
pub fn init(filter: &LogFilter) -> Result<(), TelemetryError> {
    let env_filter =
        EnvFilter::try_new(&filter.directive).map_err(|source| TelemetryError::Filter {
            filter: filter.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}
