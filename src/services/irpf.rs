// src/services/irpf.rs
//
// Simplified IRPF withholding. The regional multiplier is a flat proxy for the
// differences between regional scales, not a model of the regional brackets.
use log::debug;

use crate::models::{MaritalStatus, Region};
use super::brackets::{marginal_tax, Bracket};

pub const PERSONAL_MINIMUM: f64 = 5_550.0;
pub const SPOUSE_MINIMUM: f64 = 3_400.0;

pub const DISABILITY_MINIMUM: f64 = 3_000.0;
pub const SEVERE_DISABILITY_MINIMUM: f64 = 9_000.0;

pub const IRPF_BRACKETS: [Bracket; 6] = [
    Bracket::new(0.0, 12_450.0, 0.19),
    Bracket::new(12_450.0, 20_200.0, 0.24),
    Bracket::new(20_200.0, 35_200.0, 0.30),
    Bracket::new(35_200.0, 60_000.0, 0.37),
    Bracket::new(60_000.0, 300_000.0, 0.47),
    Bracket::open(300_000.0, 0.47),
];

/// Regions not listed here use 1.0.
pub const REGION_MULTIPLIERS: [(Region, f64); 7] = [
    (Region::Madrid, 1.00),
    (Region::Cataluna, 1.07),
    (Region::ComunidadValenciana, 1.05),
    (Region::Andalucia, 1.02),
    (Region::PaisVasco, 1.04),
    (Region::Navarra, 1.05),
    (Region::Galicia, 1.01),
];

pub fn region_multiplier(region: Region) -> f64 {
    REGION_MULTIPLIERS
        .iter()
        .find(|(r, _)| *r == region)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(1.0)
}

/// Descendant minimum. The tiers replace each other; from the fourth child on,
/// each extra child adds 4,500 on top of the third-tier amount.
pub fn children_minimum(children: u32) -> f64 {
    match children {
        0 => 0.0,
        1 => 2_400.0,
        2 => 2_700.0,
        3 => 4_000.0,
        n => 4_000.0 + 4_500.0 * (n - 3) as f64,
    }
}

pub fn disability_minimum(percentage: i32) -> f64 {
    if percentage >= 65 {
        SEVERE_DISABILITY_MINIMUM
    } else if percentage >= 33 {
        DISABILITY_MINIMUM
    } else {
        0.0
    }
}

/// Personal and family circumstances that shape the IRPF minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Household {
    pub marital_status: MaritalStatus,
    pub children: u32,
    pub worker_disability: i32,
    pub family_disability: i32,
}

pub fn personal_minimum(household: &Household) -> f64 {
    let spouse = match household.marital_status {
        MaritalStatus::MarriedNoIncome => SPOUSE_MINIMUM,
        MaritalStatus::Single | MaritalStatus::MarriedWithIncome => 0.0,
    };

    PERSONAL_MINIMUM
        + spouse
        + children_minimum(household.children)
        + disability_minimum(household.worker_disability)
        + disability_minimum(household.family_disability)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrpfBreakdown {
    pub personal_minimum: f64,
    pub taxable_base: f64,
    pub amount: f64,
}

pub fn calculate_irpf(
    gross_annual: f64,
    worker_contributions: f64,
    household: &Household,
    region: Region,
) -> IrpfBreakdown {
    let taxable_income = gross_annual - worker_contributions;
    let minimum = personal_minimum(household);
    let taxable_base = (taxable_income - minimum).max(0.0);

    let state_scale = marginal_tax(taxable_base, &IRPF_BRACKETS);
    let amount = state_scale * region_multiplier(region);

    debug!(
        "IRPF for {}: taxable income {:.2}, minimum {:.2}, base {:.2}, tax {:.2}",
        region.code(),
        taxable_income,
        minimum,
        taxable_base,
        amount
    );

    IrpfBreakdown {
        personal_minimum: minimum,
        taxable_base,
        amount,
    }
}
