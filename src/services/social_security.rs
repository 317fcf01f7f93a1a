// src/services/social_security.rs
//
// Social-security contributions, MEI and solidarity quota on an annual gross salary.
use log::debug;

use super::brackets::{capped_base, marginal_tax, Bracket};

/// 2024 maximum annual contribution base.
pub const MAX_CONTRIBUTION_BASE: f64 = 53_760.0;

/// Common contingencies, unemployment, vocational training.
pub const WORKER_SS_RATE: f64 = 0.047 + 0.0155 + 0.001;
/// Common contingencies, unemployment, FOGASA, vocational training, work accidents.
pub const EMPLOYER_SS_RATE: f64 = 0.236 + 0.055 + 0.006 + 0.0065 + 0.002;

pub const MEI_WORKER_RATE: f64 = 0.0013;
pub const MEI_EMPLOYER_RATE: f64 = 0.0067;

/// 2025 cap above which the solidarity quota applies (4,909 €/month x 12).
pub const SOLIDARITY_THRESHOLD: f64 = 58_908.0;
pub const SOLIDARITY_EMPLOYER_SHARE: f64 = 0.8339;
pub const SOLIDARITY_WORKER_SHARE: f64 = 0.1661;

/// Tiers over the excess above `SOLIDARITY_THRESHOLD`: up to 10% of the cap,
/// the next 40%, then the rest.
pub const SOLIDARITY_BRACKETS: [Bracket; 3] = [
    Bracket::new(0.0, 5_890.80, 0.0092),
    Bracket::new(5_890.80, 29_454.00, 0.0100),
    Bracket::open(29_454.00, 0.0117),
];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Split {
    pub worker: f64,
    pub employer: f64,
}

impl Split {
    pub fn total(&self) -> f64 {
        self.worker + self.employer
    }
}

pub fn contribution_base(gross_annual: f64) -> f64 {
    capped_base(gross_annual, MAX_CONTRIBUTION_BASE)
}

pub fn social_security(gross_annual: f64) -> Split {
    let base = contribution_base(gross_annual);
    Split {
        worker: base * WORKER_SS_RATE,
        employer: base * EMPLOYER_SS_RATE,
    }
}

pub fn mei(gross_annual: f64) -> Split {
    let base = contribution_base(gross_annual);
    Split {
        worker: base * MEI_WORKER_RATE,
        employer: base * MEI_EMPLOYER_RATE,
    }
}

pub fn solidarity_quota(gross_annual: f64) -> Split {
    let excess = gross_annual - SOLIDARITY_THRESHOLD;
    if excess <= 0.0 {
        return Split::default();
    }

    let total = marginal_tax(excess, &SOLIDARITY_BRACKETS);
    debug!("Solidarity quota on excess {:.2}: {:.2}", excess, total);

    Split {
        worker: total * SOLIDARITY_WORKER_SHARE,
        employer: total * SOLIDARITY_EMPLOYER_SHARE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn combined_rates_match_published_totals() {
        assert!(close(WORKER_SS_RATE, 0.0635));
        assert!(close(EMPLOYER_SS_RATE, 0.3055));
    }

    #[test]
    fn contributions_below_cap_scale_with_salary() {
        let ss = social_security(30_000.0);
        assert!(close(ss.worker, 30_000.0 * 0.0635));
        assert!(close(ss.employer, 30_000.0 * 0.3055));

        let m = mei(30_000.0);
        assert!(close(m.worker, 39.0));
        assert!(close(m.employer, 201.0));
        assert!(close(m.total(), 30_000.0 * 0.008));
    }

    #[test]
    fn contributions_are_capped_at_max_base() {
        let expected = MAX_CONTRIBUTION_BASE * 0.0635;
        for gross in [MAX_CONTRIBUTION_BASE, 60_000.0, 250_000.0, 1_000_000.0] {
            assert!(close(social_security(gross).worker, expected), "gross {}", gross);
            assert!(close(mei(gross).worker, MAX_CONTRIBUTION_BASE * 0.0013));
        }
    }

    #[test]
    fn non_positive_salary_yields_zero_contributions() {
        for gross in [0.0, -1_000.0] {
            assert_eq!(social_security(gross), Split::default());
            assert_eq!(mei(gross), Split::default());
            assert_eq!(solidarity_quota(gross), Split::default());
        }
    }

    #[test]
    fn solidarity_is_zero_up_to_threshold() {
        assert_eq!(solidarity_quota(40_000.0), Split::default());
        assert_eq!(solidarity_quota(SOLIDARITY_THRESHOLD), Split::default());
    }

    #[test]
    fn solidarity_first_bracket_boundary() {
        let quota = solidarity_quota(SOLIDARITY_THRESHOLD + 5_890.80);
        let expected_total = 5_890.80 * 0.0092;
        assert!(close(quota.total(), expected_total));
        assert!(close(quota.employer, expected_total * 0.8339));
        assert!(close(quota.worker, expected_total * 0.1661));
    }

    #[test]
    fn solidarity_applies_marginally_across_brackets() {
        let quota = solidarity_quota(SOLIDARITY_THRESHOLD + 40_000.0);
        let expected = 5_890.80 * 0.0092 + 23_563.20 * 0.0100 + (40_000.0 - 29_454.0) * 0.0117;
        assert!(close(quota.total(), expected));
    }

    #[test]
    fn solidarity_strictly_increases_above_threshold() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let gross = SOLIDARITY_THRESHOLD + step as f64 * 1_000.0;
            let total = solidarity_quota(gross).total();
            assert!(total > previous, "not increasing at {}", gross);
            previous = total;
        }
    }
}
