use chrono::{DateTime, Utc};
use clap::Args;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use fundable_core::edgar::{
    facts_file_name, format_cik, normalize_company_facts, parse_company_facts,
};
use fundable_core::funding::CompanyHistory;

use crate::config::{parse_cik, FundableConfig};
use crate::input;
use crate::store::{save_dataset, Dataset};

/// Arguments for importing EDGAR company-facts documents
#[derive(Args)]
pub struct ImportArgs {
    /// Directory holding CIK##########.json company-facts documents
    #[arg(long)]
    pub facts_dir: Option<PathBuf>,

    /// Dataset file to replace
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// CIK to import (repeatable; replaces the configured list)
    #[arg(long = "cik", value_parser = parse_cik_arg)]
    pub ciks: Vec<u64>,
}

#[derive(Debug, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: Vec<SkippedCompany>,
    pub store: String,
    pub imported_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SkippedCompany {
    pub cik: String,
    pub reason: String,
}

pub fn run_import(
    args: ImportArgs,
    config: &FundableConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let facts_dir = args.facts_dir.unwrap_or_else(|| config.facts_dir.clone());
    let store = args.store.unwrap_or_else(|| config.store.clone());
    let mut ciks = if args.ciks.is_empty() {
        config.ciks.clone()
    } else {
        args.ciks
    };
    dedup_preserving_order(&mut ciks);

    if ciks.is_empty() {
        return Err("no CIKs to import: pass --cik or list `ciks` in the config file".into());
    }

    let summary = import_companies(&facts_dir, &store, &ciks)?;
    Ok(serde_json::json!({ "result": summary }))
}

/// Read, normalise and store every company in `ciks`, replacing the dataset.
///
/// Companies whose document is missing or malformed are skipped with a
/// warning; the rest are still imported.
pub fn import_companies(
    facts_dir: &Path,
    store: &Path,
    ciks: &[u64],
) -> Result<ImportSummary, Box<dyn std::error::Error>> {
    let loaded: Vec<Result<CompanyHistory, String>> = ciks
        .par_iter()
        .map(|cik| load_company(facts_dir, *cik))
        .collect();

    let mut companies = Vec::with_capacity(loaded.len());
    let mut skipped = Vec::new();
    for (cik, outcome) in ciks.iter().zip(loaded) {
        match outcome {
            Ok(mut history) => {
                history.id = companies.len() as i64 + 1;
                companies.push(history);
            }
            Err(reason) => {
                let cik = format_cik(*cik);
                warn!(%cik, %reason, "skipping company");
                skipped.push(SkippedCompany { cik, reason });
            }
        }
    }

    let dataset = Dataset::new(companies);
    save_dataset(store, &dataset)?;

    info!(
        imported = dataset.companies.len(),
        skipped = skipped.len(),
        store = %store.display(),
        "import complete"
    );

    Ok(ImportSummary {
        imported: dataset.companies.len(),
        skipped,
        store: store.display().to_string(),
        imported_at: dataset.imported_at,
    })
}

fn load_company(facts_dir: &Path, cik: u64) -> Result<CompanyHistory, String> {
    let path = facts_dir.join(facts_file_name(cik));
    let text = input::file::read_text(&path).map_err(|e| e.to_string())?;
    let facts = parse_company_facts(&text)
        .map_err(|e| format!("Failed to parse '{}': {}", path.display(), e))?;
    Ok(normalize_company_facts(&facts, 0))
}

fn parse_cik_arg(raw: &str) -> Result<u64, String> {
    parse_cik(raw).map_err(|e| e.to_string())
}

fn dedup_preserving_order(ciks: &mut Vec<u64>) {
    let mut seen = std::collections::HashSet::new();
    ciks.retain(|cik| seen.insert(*cik));
}
