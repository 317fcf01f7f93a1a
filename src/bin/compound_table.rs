// src/bin/compound_table.rs
use anyhow::{Context, Result};
use calculadora_nomina::models::CompoundInterestInput;
use calculadora_nomina::services::compound_interest::calculate_compound_interest;
use csv::Writer;
use log::info;
use std::env;
use std::fs;
use std::io;

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .context("usage: compound_table <input.json>")?;
    let raw = fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let input: CompoundInterestInput =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path))?;

    let result = calculate_compound_interest(&input)?;
    info!(
        "Future value {:.2} ({:.2} deposited, {:.2} interest)",
        result.future_value, result.total_deposits, result.total_interest
    );

    let mut wtr = Writer::from_writer(io::stdout());
    wtr.write_record(["year", "balance", "deposits", "interest"])?;
    for row in &result.yearly {
        wtr.write_record([
            row.year.to_string(),
            format!("{:.2}", row.balance),
            format!("{:.2}", row.deposits),
            format!("{:.2}", row.interest),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
