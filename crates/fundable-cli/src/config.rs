use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Used when `--config` is not given and this file exists in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "fundable.yaml";

/// Runtime settings for the import and list commands.
///
/// Funding policy is fixed in `fundable-core` and cannot be configured here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundableConfig {
    /// Companies to import, as SEC Central Index Keys.
    pub ciks: Vec<u64>,
    /// Directory holding `CIK##########.json` company-facts documents.
    pub facts_dir: PathBuf,
    /// Dataset file written by `import` and read by `list`.
    pub store: PathBuf,
    pub log_level: String,
}

impl Default for FundableConfig {
    fn default() -> Self {
        Self {
            ciks: Vec::new(),
            facts_dir: PathBuf::from("facts"),
            store: PathBuf::from("companies.json"),
            log_level: "warn".to_string(),
        }
    }
}

/// On-disk shape. Every key is optional; CIKs may be written as numbers or
/// as zero-padded strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    ciks: Vec<RawCik>,
    facts_dir: Option<PathBuf>,
    store: Option<PathBuf>,
    log_level: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCik {
    Number(u64),
    Text(String),
}

impl FundableConfig {
    /// Load `path`, or `fundable.yaml` if it exists, or fall back to defaults.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(Path::new(p)),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_yaml::from_str(contents)
            .map_err(|source| ConfigError::Parse { path: None, source })?;

        let defaults = Self::default();
        let ciks = file
            .ciks
            .into_iter()
            .map(|raw| match raw {
                RawCik::Number(n) => Ok(n),
                RawCik::Text(s) => parse_cik(&s),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            ciks,
            facts_dir: file.facts_dir.unwrap_or(defaults.facts_dir),
            store: file.store.unwrap_or(defaults.store),
            log_level: file.log_level.unwrap_or(defaults.log_level),
        })
    }
}

/// Parse a CIK such as `320193` or `0000320193`.
pub fn parse_cik(value: &str) -> Result<u64, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.len() > 10 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::InvalidCik(value.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| ConfigError::InvalidCik(value.to_string()))
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: Option<PathBuf>,
        source: serde_yaml::Error,
    },
    InvalidCik(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config '{}': {}", path.display(), source)
            }
            ConfigError::Parse {
                path: Some(path),
                source,
            } => write!(f, "failed to parse config '{}': {}", path.display(), source),
            ConfigError::Parse { path: None, source } => {
                write!(f, "failed to parse config: {source}")
            }
            ConfigError::InvalidCik(value) => {
                write!(f, "invalid CIK '{value}': expected up to 10 digits")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::InvalidCik(_) => None,
        }
    }
}
