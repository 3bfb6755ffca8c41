use chrono::{DateTime, Utc};
use fundable_core::funding::CompanyHistory;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Everything one `import` run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub imported_at: DateTime<Utc>,
    pub companies: Vec<CompanyHistory>,
}

impl Dataset {
    pub fn new(companies: Vec<CompanyHistory>) -> Self {
        Self {
            imported_at: Utc::now(),
            companies,
        }
    }
}

/// Replace the dataset at `path` with `dataset`.
///
/// The new content is written to a sibling temporary file and renamed over
/// the target, so readers see either the previous dataset or the new one.
pub fn save_dataset(path: &Path, dataset: &Dataset) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create '{}': {}", parent.display(), e))?;
    }

    let tmp = temporary_sibling(path);
    let json = serde_json::to_vec_pretty(dataset)?;
    {
        let mut file = fs::File::create(&tmp)
            .map_err(|e| format!("Failed to create '{}': {}", tmp.display(), e))?;
        file.write_all(&json)?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(format!("Failed to replace '{}': {}", path.display(), e).into());
    }
    Ok(())
}

/// Read the dataset written by the last successful import.
pub fn load_dataset(path: &Path) -> Result<Dataset, Box<dyn std::error::Error>> {
    if !path.is_file() {
        return Err(format!(
            "Dataset not found: {} (run `fundable import` first)",
            path.display()
        )
        .into());
    }
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
    let dataset: Dataset = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", path.display(), e))?;
    Ok(dataset)
}

/// Per-process temporary name, so concurrent imports never share one.
fn temporary_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "dataset".into());
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}
