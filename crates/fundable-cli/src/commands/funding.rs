use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use std::path::Path;
use std::str::FromStr;

use fundable_core::funding::{calculate_funding, CompanyHistory, IncomeRecord};
use fundable_core::FundableError;

use crate::input;

/// Arguments for a single-company funding calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FundingArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Company identifier, echoed in the result
    #[arg(long, default_value_t = 0)]
    pub id: i64,

    /// Company name
    #[arg(long)]
    pub name: Option<String>,

    /// Annual net income as YEAR=VALUE, e.g. --income 2022=99803000000 (repeatable)
    #[arg(long = "income", value_parser = parse_income)]
    pub incomes: Vec<IncomeRecord>,
}

pub fn run_funding(args: FundingArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let history = resolve_history(args, input::stdin::read_stdin)?;
    let result = calculate_funding(&history)?;
    Ok(serde_json::to_value(result)?)
}

/// `--input` first, then piped stdin, then the individual flags.
fn resolve_history<S>(
    args: FundingArgs,
    read_stdin: S,
) -> Result<CompanyHistory, Box<dyn std::error::Error>>
where
    S: FnOnce() -> Result<Option<Value>, Box<dyn std::error::Error>>,
{
    if let Some(ref path) = args.input {
        return input::file::read_json(Path::new(path));
    }
    if let Some(data) = read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    let name = args.name.ok_or_else(|| FundableError::InvalidInput {
        field: "name".into(),
        reason: "--name is required unless --input or stdin is given".into(),
    })?;
    Ok(CompanyHistory::new(args.id, name, args.incomes))
}

/// Parse `YEAR=VALUE`. Values may be plain decimals or scientific notation.
fn parse_income(raw: &str) -> Result<IncomeRecord, String> {
    let (year, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected YEAR=VALUE, got '{raw}'"))?;
    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| format!("invalid year '{}'", year.trim()))?;
    let value = value.trim();
    let value = Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| format!("invalid income '{value}'"))?;
    Ok(IncomeRecord::new(year, value))
}
