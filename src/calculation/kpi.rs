//! KPI banding.
//!
//! Scores on the 0 to 100 scale are classified into four bands. Scores
//! outside that scale are rejected rather than clamped.

use rust_decimal::Decimal;

use super::rounding::round_two_places;
use crate::error::{EngineError, EngineResult};
use crate::models::{KpiBand, KpiClassification, KpiSummary};

/// Lowest score in the Excellent band.
pub const EXCELLENT_THRESHOLD: Decimal = Decimal::from_parts(90, 0, 0, false, 0);

/// Lowest score in the Good band.
pub const GOOD_THRESHOLD: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Lowest score in the Average band.
pub const AVERAGE_THRESHOLD: Decimal = Decimal::from_parts(70, 0, 0, false, 0);

const MAX_KPI: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Returns the band for a score already known to be in range.
fn band_for(kpi_value: Decimal) -> KpiBand {
    if kpi_value >= EXCELLENT_THRESHOLD {
        KpiBand::Excellent
    } else if kpi_value >= GOOD_THRESHOLD {
        KpiBand::Good
    } else if kpi_value >= AVERAGE_THRESHOLD {
        KpiBand::Average
    } else {
        KpiBand::BelowAverage
    }
}

/// Classifies a KPI score.
///
/// # Errors
///
/// Returns [`EngineError::OutOfRange`] if the score is below 0 or above 100.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::classify;
/// use payroll_engine::models::KpiBand;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(classify(Decimal::from(90)).unwrap().band, KpiBand::Excellent);
/// assert_eq!(classify(Decimal::from_str("89.999").unwrap()).unwrap().band, KpiBand::Good);
/// assert!(classify(Decimal::from(101)).is_err());
/// ```
pub fn classify(kpi_value: Decimal) -> EngineResult<KpiClassification> {
    if kpi_value < Decimal::ZERO || kpi_value > MAX_KPI {
        return Err(EngineError::OutOfRange { value: kpi_value });
    }

    let band = band_for(kpi_value);
    Ok(KpiClassification {
        kpi_value,
        band,
        color: band.color().to_string(),
        label: band.label().to_string(),
    })
}

/// Summarizes a set of KPI scores: count, mean, and per-band counts.
///
/// Fails on the first out-of-range score.
pub fn summarize_kpis(values: &[Decimal]) -> EngineResult<KpiSummary> {
    let mut summary = KpiSummary {
        count: values.len(),
        average: Decimal::ZERO,
        excellent: 0,
        good: 0,
        average_band: 0,
        below_average: 0,
    };

    let mut sum = Decimal::ZERO;
    for &value in values {
        match classify(value)?.band {
            KpiBand::Excellent => summary.excellent += 1,
            KpiBand::Good => summary.good += 1,
            KpiBand::Average => summary.average_band += 1,
            KpiBand::BelowAverage => summary.below_average += 1,
        }
        sum += value;
    }

    if !values.is_empty() {
        summary.average = round_two_places(sum / Decimal::from(values.len()));
    }

    Ok(summary)
}
