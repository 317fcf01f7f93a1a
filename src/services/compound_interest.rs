// src/services/compound_interest.rs
use log::debug;

use crate::models::{CompoundInterestInput, CompoundInterestResult, DepositTiming, YearSnapshot};
use super::validation::{validate_compound_interest, ValidationErrors};

/// Balance after `periods` compounding periods of `rate` per period.
fn balance_after(input: &CompoundInterestInput, rate: f64, periods: u32) -> f64 {
    let growth = (1.0 + rate).powi(periods as i32);
    let principal = input.initial_balance * growth;

    let deposits = if rate > 0.0 {
        let annuity = input.periodic_deposit * (growth - 1.0) / rate;
        match input.deposit_timing {
            DepositTiming::Beginning => annuity * (1.0 + rate),
            DepositTiming::End => annuity,
        }
    } else {
        input.periodic_deposit * periods as f64
    };

    principal + deposits
}

fn snapshot(input: &CompoundInterestInput, rate: f64, year: u32) -> YearSnapshot {
    let periods = input.frequency.periods_per_year() * year;
    let balance = balance_after(input, rate, periods);
    let deposits = input.initial_balance + input.periodic_deposit * periods as f64;

    YearSnapshot {
        year,
        balance,
        interest: balance - deposits,
        deposits,
    }
}

/// Future value of a savings plan plus its balance at every year boundary.
pub fn calculate_compound_interest(
    input: &CompoundInterestInput,
) -> Result<CompoundInterestResult, ValidationErrors> {
    validate_compound_interest(input)?;

    let rate = input.annual_interest_rate / 100.0 / input.frequency.periods_per_year() as f64;
    let last = snapshot(input, rate, input.years);
    let mut yearly: Vec<YearSnapshot> = (0..input.years)
        .map(|year| snapshot(input, rate, year))
        .collect();

    debug!(
        "Compound interest over {} years at {}%: future value {:.2}, deposits {:.2}",
        input.years, input.annual_interest_rate, last.balance, last.deposits
    );

    let (future_value, total_deposits, total_interest) =
        (last.balance, last.deposits, last.interest);
    yearly.push(last);

    Ok(CompoundInterestResult {
        future_value,
        total_deposits,
        total_interest,
        yearly,
    })
}
