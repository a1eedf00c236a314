use std::collections::HashMap;

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::state::dataset::Dataset;

/// Descriptive statistics for a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryStats {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    /// Every value tied for the highest occurrence count, ascending.
    ///
    /// When no value repeats, every distinct value is a mode with
    /// `mode_frequency == 1`; that case is not suppressed here, display
    /// layers are expected to special-case it (see [`SummaryStats::table_rows`]).
    pub modes: Vec<f64>,
    /// Occurrence count shared by the modes.
    pub mode_frequency: usize,
    pub min: f64,
    pub max: f64,
    /// 25th percentile, linear interpolation between closest ranks.
    pub q1: f64,
    /// 75th percentile, same convention as `q1`.
    pub q3: f64,
    /// Sample variance (n - 1 denominator); `None` for a single-element
    /// dataset, which has no defined sample spread.
    pub sample_variance: Option<f64>,
    /// Square root of the sample variance, `None` under the same rule.
    pub sample_std_dev: Option<f64>,
}

impl SummaryStats {
    /// Compute statistics over a dataset, or `None` when it is empty.
    ///
    /// Callers must check for `None` before formatting numeric output so the
    /// "no data" case never shows up as mean = 0.
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        if dataset.is_empty() {
            return None;
        }

        let vals = dataset.values();
        let count = vals.len();
        let sum: f64 = vals.iter().sum();
        let mean = sum / count as f64;
        let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
        let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let sorted = dataset.sorted();
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };
        let q1 = quantile(&sorted, 0.25);
        let q3 = quantile(&sorted, 0.75);

        let (modes, mode_frequency) = modes_of(vals);

        let (sample_variance, sample_std_dev) = if count >= 2 {
            let var = vals.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            (Some(var), Some(var.sqrt()))
        } else {
            (None, None)
        };

        Some(SummaryStats {
            count,
            sum,
            mean,
            median,
            modes,
            mode_frequency,
            min,
            max,
            q1,
            q3,
            sample_variance,
            sample_std_dev,
        })
    }

    /// Statistic-name / formatted-value rows for a display table.
    ///
    /// Mean and standard deviation are rounded to two decimals; a mode
    /// frequency of 1 renders as "none" rather than listing every value;
    /// undefined variance/std-dev render as "undefined".
    pub fn table_rows(&self) -> Vec<(String, String)> {
        let modes = if self.mode_frequency <= 1 {
            "none".to_string()
        } else {
            self.modes
                .iter()
                .map(|m| format!("{m}"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let opt = |v: Option<f64>| match v {
            Some(v) => format!("{v:.2}"),
            None => "undefined".to_string(),
        };

        vec![
            ("Count".to_string(), self.count.to_string()),
            ("Sum".to_string(), format!("{}", self.sum)),
            ("Mean".to_string(), format!("{:.2}", self.mean)),
            ("Median".to_string(), format!("{}", self.median)),
            ("Mode".to_string(), modes),
            ("Min".to_string(), format!("{}", self.min)),
            ("Max".to_string(), format!("{}", self.max)),
            ("Q1".to_string(), format!("{}", self.q1)),
            ("Q3".to_string(), format!("{}", self.q3)),
            ("Sample variance".to_string(), opt(self.sample_variance)),
            ("Sample std dev".to_string(), opt(self.sample_std_dev)),
        ]
    }
}

/// Quantile at `p` in `0.0..=1.0` over an ascending, non-empty slice.
///
/// Uses linear interpolation between the closest ranks at `p * (n - 1)`, the
/// convention a spreadsheet QUARTILE.INC / PERCENTILE.INC applies.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
    }
}

/// All values holding the highest occurrence count, ascending, plus that count.
fn modes_of(vals: &[f64]) -> (Vec<f64>, usize) {
    let mut freq: HashMap<OrderedFloat<f64>, usize> = HashMap::new();
    for &v in vals {
        *freq.entry(OrderedFloat(v)).or_insert(0) += 1;
    }
    let top = freq.values().copied().max().unwrap_or(0);
    let mut modes: Vec<f64> = freq
        .into_iter()
        .filter(|&(_, c)| c == top)
        .map(|(v, _)| v.into_inner())
        .collect();
    modes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    (modes, top)
}
