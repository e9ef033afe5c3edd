// stats.rs - TDT and FBAT statistics over aggregated trio counts

use super::tables::{Score, ScoreBounds, Transmission, TransmissionBounds};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF, Normal};

/// A test statistic with its p-value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    pub value: f64,
    pub p_value: f64,
}

/// Smallest and largest attainable statistic; either side may be undefined
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Option<Statistic>,
    pub max: Option<Statistic>,
}

/// Reference (B) and alternate (C) transmission ranges over all completions of missing calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransmissionRange {
    pub b_min: u32,
    pub b_max: u32,
    pub c_min: u32,
    pub c_max: u32,
}

/// Extended TDT outcome: the transmission range and the statistic bounds it implies
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtendedTdt {
    pub range: TransmissionRange,
    pub bounds: Bounds,
}

/// Upper tail of chi-square with one degree of freedom
pub fn chi_square_p_value(statistic: f64) -> f64 {
    ChiSquared::new(1.0)
        .map(|chi2| 1.0 - chi2.cdf(statistic))
        .unwrap_or(f64::NAN)
}

/// Two-sided standard normal p-value
pub fn normal_p_value(z: f64) -> f64 {
    Normal::new(0.0, 1.0)
        .map(|norm| 2.0 * (1.0 - norm.cdf(z.abs())))
        .unwrap_or(f64::NAN)
}

/// McNemar-style TDT statistic `(b - c)^2 / (b + c)`, undefined when no allele is transmitted
fn tdt_statistic(b: u32, c: u32) -> Option<Statistic> {
    let total = b + c;
    if total == 0 {
        return None;
    }
    let diff = f64::from(b) - f64::from(c);
    let value = diff * diff / f64::from(total);
    Some(Statistic {
        value,
        p_value: chi_square_p_value(value),
    })
}

/// Standard TDT over the transmissions of complete informative case trios
pub fn std_tdt(case_complete: Transmission) -> Option<Statistic> {
    tdt_statistic(case_complete.b, case_complete.c)
}

/// TDT bounds when incomplete case trios may transmit either allele.
///
/// `b_min`/`c_min` only include the incomplete trios whose transmission is the
/// same under every completion.
pub fn extended_tdt(case_complete: Transmission, case_incomplete: TransmissionBounds) -> ExtendedTdt {
    let range = TransmissionRange {
        b_min: case_complete.b + case_incomplete.b_min,
        b_max: case_complete.b + case_incomplete.b_max,
        c_min: case_complete.c + case_incomplete.c_min,
        c_max: case_complete.c + case_incomplete.c_max,
    };

    let toward_c = tdt_statistic(range.b_min, range.c_max);
    let toward_b = tdt_statistic(range.b_max, range.c_min);

    let bounds = if range.b_min >= range.c_max {
        Bounds { min: toward_c, max: toward_b }
    } else if range.b_max <= range.c_min {
        Bounds { min: toward_b, max: toward_c }
    } else {
        // B and C ranges overlap: some completion balances them exactly
        let max = match (toward_c, toward_b) {
            (Some(a), Some(b)) => Some(if a.value >= b.value { a } else { b }),
            (a, b) => a.or(b),
        };
        Bounds {
            min: Some(Statistic { value: 0.0, p_value: 1.0 }),
            max,
        }
    };

    ExtendedTdt { range, bounds }
}

/// Z score of an offset-weighted score sum, undefined on zero variance
fn fbat_statistic(total: Score) -> Option<Statistic> {
    if total.var_u <= 0.0 {
        return None;
    }
    let z = total.u / total.var_u.sqrt();
    Some(Statistic {
        value: z,
        p_value: normal_p_value(z),
    })
}

/// Combine case and control scores: cases weighted `1 - offset`, controls `-offset`
fn weighted_total(case: Score, control: Score, offset: f64) -> Score {
    case.weighted(1.0 - offset) + control.weighted(0.0 - offset)
}

/// Standard FBAT over complete informative case and control trios
pub fn std_fbat(case_complete: Score, control_complete: Score, offset: f64) -> Option<Statistic> {
    fbat_statistic(weighted_total(case_complete, control_complete, offset))
}

/// FBAT bounds with incomplete trios pushed toward each extreme.
///
/// The minimum pairs the lowest case completion with the highest control
/// completion (controls enter with a negative weight); the maximum does the
/// reverse.
pub fn extended_fbat(
    case_complete: Score,
    control_complete: Score,
    case_incomplete: ScoreBounds,
    control_incomplete: ScoreBounds,
    offset: f64,
) -> Bounds {
    let min = weighted_total(
        case_complete + case_incomplete.low,
        control_complete + control_incomplete.high,
        offset,
    );
    let max = weighted_total(
        case_complete + case_incomplete.high,
        control_complete + control_incomplete.low,
        offset,
    );
    Bounds {
        min: fbat_statistic(min),
        max: fbat_statistic(max),
    }
}
