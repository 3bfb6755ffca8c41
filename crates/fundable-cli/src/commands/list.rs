use clap::Args;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

use fundable_core::listing::{list_fundings, NameFilter};

use crate::config::FundableConfig;
use crate::store::load_dataset;

/// Arguments for listing imported companies
#[derive(Args)]
pub struct ListArgs {
    /// Dataset file written by `import`
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Only companies whose name starts with this letter (case-insensitive)
    #[arg(long, alias = "starts-with-letter")]
    pub starts_with: Option<char>,
}

pub fn run_list(
    args: ListArgs,
    config: &FundableConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let store = args.store.unwrap_or_else(|| config.store.clone());
    let dataset = load_dataset(&store)?;
    debug!(
        companies = dataset.companies.len(),
        imported_at = %dataset.imported_at,
        "dataset loaded"
    );

    let results = list_fundings(&dataset.companies, NameFilter::from(args.starts_with))?;
    Ok(serde_json::to_value(results)?)
}
