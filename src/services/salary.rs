// src/services/salary.rs
use log::debug;

use crate::models::{Region, SalaryInput, SalaryResult};
use super::irpf::{calculate_irpf, Household};
use super::social_security::{mei, social_security, solidarity_quota};
use super::validation::{validate_salary, ValidationErrors, REGION_REQUIRED};

/// Net salary breakdown for one set of form values.
pub fn calculate_salary(input: &SalaryInput) -> Result<SalaryResult, ValidationErrors> {
    validate_salary(input)?;
    let region = input.region.ok_or_else(|| {
        let mut errors = ValidationErrors::new();
        errors.add("region", REGION_REQUIRED);
        errors
    })?;

    Ok(breakdown(input, region))
}

fn breakdown(input: &SalaryInput, region: Region) -> SalaryResult {
    let gross_annual = input.gross_salary;

    let ss = social_security(gross_annual);
    let equity = mei(gross_annual);
    let solidarity = solidarity_quota(gross_annual);
    let worker_contributions = ss.worker + equity.worker + solidarity.worker;

    let household = Household {
        marital_status: input.marital_status,
        children: (input.children_under_25.max(0) as u32)
            .saturating_add(input.children_over_25.max(0) as u32),
        worker_disability: input.worker_disability,
        family_disability: input.family_disability,
    };
    let irpf = calculate_irpf(gross_annual, worker_contributions, &household, region);

    let net_annual = gross_annual - (ss.worker + equity.worker + solidarity.worker + irpf.amount);

    let periods = input.pay_frequency.periods_per_year();
    let per_period = |annual: f64| annual / periods as f64;

    let effective_irpf_rate = if gross_annual > 0.0 {
        irpf.amount / gross_annual * 100.0
    } else {
        0.0
    };

    debug!(
        "Salary {:.2} in {}: worker contributions {:.2}, IRPF {:.2}, net {:.2}",
        gross_annual,
        region.code(),
        worker_contributions,
        irpf.amount,
        net_annual
    );

    SalaryResult {
        gross_annual,
        gross_periodic: per_period(gross_annual),
        social_security_worker: ss.worker,
        social_security_employer: ss.employer,
        mei_worker: equity.worker,
        mei_employer: equity.employer,
        solidarity_worker: solidarity.worker,
        solidarity_employer: solidarity.employer,
        personal_minimum: irpf.personal_minimum,
        taxable_base: irpf.taxable_base,
        irpf: irpf.amount,
        effective_irpf_rate,
        net_annual,
        net_periodic: per_period(net_annual),
        employer_cost: gross_annual + ss.employer + equity.employer + solidarity.employer,
        period_name: input.pay_frequency.period_name().to_string(),
        periods_per_year: periods,
    }
}
