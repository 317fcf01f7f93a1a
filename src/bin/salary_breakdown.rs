// src/bin/salary_breakdown.rs
use anyhow::{Context, Result};
use calculadora_nomina::models::SalaryInput;
use calculadora_nomina::services::salary::calculate_salary;
use std::env;
use std::fs;

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .context("usage: salary_breakdown <input.json>")?;
    let raw = fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let input: SalaryInput =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path))?;

    let r = calculate_salary(&input)?;
    let periods = r.periods_per_year as f64;

    println!("{:<28} {:>14} {:>14}", "", "Anual", r.period_name);
    let rows = [
        ("Salario bruto", r.gross_annual),
        ("Seguridad Social", r.social_security_worker),
        ("MEI", r.mei_worker),
        ("Cuota de solidaridad", r.solidarity_worker),
        ("Retención IRPF", r.irpf),
        ("Salario neto", r.net_annual),
    ];
    for (label, annual) in rows {
        println!("{:<28} {:>14.2} {:>14.2}", label, annual, annual / periods);
    }

    println!();
    println!("{:<28} {:>14.2}", "Mínimo personal y familiar", r.personal_minimum);
    println!("{:<28} {:>14.2}", "Base liquidable", r.taxable_base);
    println!("{:<28} {:>13.2}%", "Tipo efectivo IRPF", r.effective_irpf_rate);
    println!("{:<28} {:>14.2}", "SS empresa", r.social_security_employer);
    println!("{:<28} {:>14.2}", "MEI empresa", r.mei_employer);
    println!("{:<28} {:>14.2}", "Solidaridad empresa", r.solidarity_employer);
    println!("{:<28} {:>14.2}", "Coste total empresa", r.employer_cost);
    Ok(())
}
