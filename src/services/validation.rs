// src/services/validation.rs
use std::collections::BTreeMap;
use std::fmt;
use serde::Serialize;
use warp::reject::Reject;

use crate::models::{CompoundInterestInput, SalaryInput};

pub const MAX_GROSS_SALARY: f64 = 1_000_000.0;
pub const MAX_YEARS: u32 = 100;
pub const MAX_INTEREST_RATE: f64 = 100.0;

pub const REGION_REQUIRED: &str = "Selecciona una comunidad autónoma";

/// Field name -> message. Empty means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields.insert(field.to_string(), message.into());
    }

    /// Record `message` under `field` unless `ok` holds.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let joined = self
            .fields
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "invalid input ({})", joined)
    }
}

impl std::error::Error for ValidationErrors {}
impl Reject for ValidationErrors {}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

pub fn validate_salary(input: &SalaryInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    errors.check(
        input.gross_salary.is_finite()
            && input.gross_salary > 0.0
            && input.gross_salary <= MAX_GROSS_SALARY,
        "grossSalary",
        "El salario bruto debe ser mayor que 0 y no superar 1.000.000 €",
    );
    errors.check(
        input.children_under_25 >= 0,
        "childrenUnder25",
        "El número de hijos menores de 25 años no puede ser negativo",
    );
    errors.check(
        input.children_over_25 >= 0,
        "childrenOver25",
        "El número de hijos mayores de 25 años no puede ser negativo",
    );
    errors.check(
        (0..=100).contains(&input.worker_disability),
        "workerDisability",
        "El grado de discapacidad debe estar entre 0 y 100",
    );
    errors.check(
        (0..=100).contains(&input.family_disability),
        "familyDisability",
        "El grado de discapacidad familiar debe estar entre 0 y 100",
    );
    errors.check(input.region.is_some(), "region", REGION_REQUIRED);

    errors.into_result()
}

pub fn validate_compound_interest(input: &CompoundInterestInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    errors.check(
        non_negative(input.initial_balance),
        "initialBalance",
        "El capital inicial no puede ser negativo",
    );
    errors.check(
        non_negative(input.periodic_deposit),
        "periodicDeposit",
        "La aportación periódica no puede ser negativa",
    );
    errors.check(
        non_negative(input.annual_interest_rate)
            && input.annual_interest_rate <= MAX_INTEREST_RATE,
        "annualInterestRate",
        "El tipo de interés debe estar entre 0 y 100 %",
    );
    if input.years == 0 {
        errors.add("years", "El plazo debe ser de al menos 1 año");
    } else if input.years > MAX_YEARS {
        errors.add("years", format!("El plazo no puede superar {} años", MAX_YEARS));
    }

    errors.into_result()
}
