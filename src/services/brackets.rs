// src/services/brackets.rs

/// One tier of a marginal rate table. `upper: None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub lower: f64,
    pub upper: Option<f64>,
    pub rate: f64,
}

impl Bracket {
    pub const fn new(lower: f64, upper: f64, rate: f64) -> Self {
        Bracket { lower, upper: Some(upper), rate }
    }

    pub const fn open(lower: f64, rate: f64) -> Self {
        Bracket { lower, upper: None, rate }
    }
}

/// Sum of `(min(amount, upper) - lower) * rate` over every bracket the amount reaches.
pub fn marginal_tax(amount: f64, brackets: &[Bracket]) -> f64 {
    brackets
        .iter()
        .filter(|b| amount > b.lower)
        .map(|b| {
            let top = match b.upper {
                Some(upper) => amount.min(upper),
                None => amount,
            };
            (top - b.lower) * b.rate
        })
        .sum()
}

/// Clamp an amount into `[0, cap]`.
pub fn capped_base(amount: f64, cap: f64) -> f64 {
    amount.min(cap).max(0.0)
}
