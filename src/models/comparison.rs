use super::Recommendation;
use serde::{Deserialize, Serialize};

/// A user metric next to its benchmark.
///
/// `diff` is the relative deviation in percent, rounded to one decimal, and
/// is `0` whenever there is no benchmark to compare against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    pub user: f64,
    pub benchmark: f64,
    pub diff: f64,
}

impl MetricComparison {
    pub fn new(user: f64, benchmark: Option<f64>) -> Self {
        Self {
            user,
            benchmark: benchmark.unwrap_or(0.0),
            diff: percent_difference(user, benchmark),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.user.is_finite() && self.benchmark.is_finite() && self.diff.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSet {
    pub pricing: MetricComparison,
    pub conversion: MetricComparison,
    pub ltv: MetricComparison,
    pub refund: MetricComparison,
}

impl ComparisonSet {
    /// Metrics in report order, with their display labels.
    pub fn labelled(&self) -> [(&'static str, &MetricComparison); 4] {
        [
            ("Pricing", &self.pricing),
            ("Conversion", &self.conversion),
            ("LTV", &self.ltv),
            ("Refund", &self.refund),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub results: ComparisonSet,
    pub recommendations: Vec<Recommendation>,
}

pub fn percent_difference(user: f64, benchmark: Option<f64>) -> f64 {
    match benchmark {
        Some(benchmark) if benchmark != 0.0 => round_one_decimal((user - benchmark) / benchmark * 100.0),
        _ => 0.0,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    // collapse -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
