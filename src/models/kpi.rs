//! KPI classification models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Qualitative performance tier derived from a KPI score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiBand {
    /// Score of 90 or above.
    Excellent,
    /// Score from 80 up to 90.
    Good,
    /// Score from 70 up to 80.
    Average,
    /// Score below 70.
    BelowAverage,
}

impl KpiBand {
    /// The display color used for the band's tag.
    pub fn color(&self) -> &'static str {
        match self {
            KpiBand::Excellent => "green",
            KpiBand::Good => "blue",
            KpiBand::Average => "orange",
            KpiBand::BelowAverage => "red",
        }
    }

    /// The human-readable label of the band.
    pub fn label(&self) -> &'static str {
        match self {
            KpiBand::Excellent => "Excellent",
            KpiBand::Good => "Good",
            KpiBand::Average => "Average",
            KpiBand::BelowAverage => "Below Average",
        }
    }
}

/// A classified KPI score, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiClassification {
    /// The score that was classified.
    pub kpi_value: Decimal,
    /// The band the score falls into.
    pub band: KpiBand,
    /// Display color of the band.
    pub color: String,
    /// Display label of the band.
    pub label: String,
}

/// Aggregate view over a set of KPI scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Number of scores summarized.
    pub count: usize,
    /// Mean score rounded to two decimal places; zero for an empty set.
    pub average: Decimal,
    /// Scores in the Excellent band.
    pub excellent: usize,
    /// Scores in the Good band.
    pub good: usize,
    /// Scores in the Average band.
    pub average_band: usize,
    /// Scores in the Below Average band.
    pub below_average: usize,
}
