// src/models.rs
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    Monthly,
    Biweekly,
    Weekly,
    Daily,
}

impl PayFrequency {
    pub fn periods_per_year(self) -> u32 {
        match self {
            PayFrequency::Monthly => 12,
            PayFrequency::Biweekly => 26,
            PayFrequency::Weekly => 52,
            PayFrequency::Daily => 365,
        }
    }

    pub fn period_name(self) -> &'static str {
        match self {
            PayFrequency::Monthly => "mensual",
            PayFrequency::Biweekly => "quincenal",
            PayFrequency::Weekly => "semanal",
            PayFrequency::Daily => "diario",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    MarriedNoIncome,
    MarriedWithIncome,
}

/// Autonomous communities and autonomous cities, as selected in the salary form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Andalucia,
    Aragon,
    Asturias,
    Baleares,
    Canarias,
    Cantabria,
    CastillaLaMancha,
    CastillaYLeon,
    Cataluna,
    Ceuta,
    ComunidadValenciana,
    Extremadura,
    Galicia,
    LaRioja,
    Madrid,
    Melilla,
    Murcia,
    Navarra,
    PaisVasco,
}

impl Region {
    pub const ALL: [Region; 19] = [
        Region::Andalucia,
        Region::Aragon,
        Region::Asturias,
        Region::Baleares,
        Region::Canarias,
        Region::Cantabria,
        Region::CastillaLaMancha,
        Region::CastillaYLeon,
        Region::Cataluna,
        Region::Ceuta,
        Region::ComunidadValenciana,
        Region::Extremadura,
        Region::Galicia,
        Region::LaRioja,
        Region::Madrid,
        Region::Melilla,
        Region::Murcia,
        Region::Navarra,
        Region::PaisVasco,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Region::Andalucia => "andalucia",
            Region::Aragon => "aragon",
            Region::Asturias => "asturias",
            Region::Baleares => "baleares",
            Region::Canarias => "canarias",
            Region::Cantabria => "cantabria",
            Region::CastillaLaMancha => "castilla_la_mancha",
            Region::CastillaYLeon => "castilla_y_leon",
            Region::Cataluna => "cataluna",
            Region::Ceuta => "ceuta",
            Region::ComunidadValenciana => "comunidad_valenciana",
            Region::Extremadura => "extremadura",
            Region::Galicia => "galicia",
            Region::LaRioja => "la_rioja",
            Region::Madrid => "madrid",
            Region::Melilla => "melilla",
            Region::Murcia => "murcia",
            Region::Navarra => "navarra",
            Region::PaisVasco => "pais_vasco",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::Andalucia => "Andalucía",
            Region::Aragon => "Aragón",
            Region::Asturias => "Principado de Asturias",
            Region::Baleares => "Illes Balears",
            Region::Canarias => "Canarias",
            Region::Cantabria => "Cantabria",
            Region::CastillaLaMancha => "Castilla-La Mancha",
            Region::CastillaYLeon => "Castilla y León",
            Region::Cataluna => "Cataluña",
            Region::Ceuta => "Ceuta",
            Region::ComunidadValenciana => "Comunitat Valenciana",
            Region::Extremadura => "Extremadura",
            Region::Galicia => "Galicia",
            Region::LaRioja => "La Rioja",
            Region::Madrid => "Comunidad de Madrid",
            Region::Melilla => "Melilla",
            Region::Murcia => "Región de Murcia",
            Region::Navarra => "Navarra",
            Region::PaisVasco => "País Vasco",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|r| r.code() == s)
            .ok_or_else(|| format!("unknown region code '{}'", s))
    }
}

/// A form select posts "" when nothing is chosen; treat that like a missing field
/// so validation reports it instead of the decoder.
fn empty_region_as_none<'de, D>(deserializer: D) -> Result<Option<Region>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(code) => code.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryInput {
    pub gross_salary: f64,
    pub pay_frequency: PayFrequency,
    #[serde(default, deserialize_with = "empty_region_as_none")]
    pub region: Option<Region>,
    pub marital_status: MaritalStatus,
    #[serde(default)]
    pub children_under_25: i32,
    #[serde(default)]
    pub children_over_25: i32,
    #[serde(default)]
    pub worker_disability: i32,
    #[serde(default)]
    pub family_disability: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryResult {
    pub gross_annual: f64,
    pub gross_periodic: f64,
    pub social_security_worker: f64,
    pub social_security_employer: f64,
    pub mei_worker: f64,
    pub mei_employer: f64,
    pub solidarity_worker: f64,
    pub solidarity_employer: f64,
    pub personal_minimum: f64,
    pub taxable_base: f64,
    pub irpf: f64,
    pub effective_irpf_rate: f64,
    pub net_annual: f64,
    pub net_periodic: f64,
    pub employer_cost: f64,
    pub period_name: String,
    pub periods_per_year: u32,
}

/// Compounding periods per year. Travels as a bare integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum CompoundingFrequency {
    Annually,
    Semiannually,
    Quarterly,
    Monthly,
}

impl CompoundingFrequency {
    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::Semiannually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
        }
    }
}

impl TryFrom<u32> for CompoundingFrequency {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CompoundingFrequency::Annually),
            2 => Ok(CompoundingFrequency::Semiannually),
            4 => Ok(CompoundingFrequency::Quarterly),
            12 => Ok(CompoundingFrequency::Monthly),
            other => Err(format!(
                "unsupported compounding frequency {} (expected 1, 2, 4 or 12)",
                other
            )),
        }
    }
}

impl From<CompoundingFrequency> for u32 {
    fn from(frequency: CompoundingFrequency) -> Self {
        frequency.periods_per_year()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositTiming {
    Beginning,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInterestInput {
    pub initial_balance: f64,
    pub periodic_deposit: f64,
    pub frequency: CompoundingFrequency,
    pub deposit_timing: DepositTiming,
    pub annual_interest_rate: f64,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSnapshot {
    pub year: u32,
    pub balance: f64,
    pub interest: f64,
    pub deposits: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInterestResult {
    pub future_value: f64,
    pub total_deposits: f64,
    pub total_interest: f64,
    pub yearly: Vec<YearSnapshot>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub irpf_multiplier: f64,
}
