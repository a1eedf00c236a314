use serde::{Deserialize, Serialize};

/// Built-in example dataset (20 test scores) for sessions that start without
/// user input.
pub const SAMPLE_VALUES: [f64; 20] = [
    75.0, 88.0, 92.0, 61.0, 70.0, 84.0, 95.0, 100.0, 68.0, 73.0, 77.0, 82.0, 89.0, 90.0, 55.0,
    60.0, 65.0, 78.0, 85.0, 91.0,
];

/// An ordered sequence of numeric values.
///
/// Every element is a finite real number; rows that failed to parse were
/// dropped, never stored as NaN. The empty dataset is a valid state meaning
/// "no data", distinct from any computed statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Build a dataset from raw values, dropping anything non-finite.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            values: values.into_iter().filter(|v| v.is_finite()).collect(),
        }
    }

    /// The built-in example dataset.
    pub fn sample() -> Self {
        Self {
            values: SAMPLE_VALUES.to_vec(),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Ascending copy of the values. The dataset itself keeps input order.
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_drops_non_finite() {
        let ds = Dataset::from_values(vec![1.0, f64::NAN, f64::INFINITY, 2.0]);
        assert_eq!(ds.values(), &[1.0, 2.0]);
    }

    #[test]
    fn sorted_does_not_reorder_the_dataset() {
        let ds = Dataset::from_values(vec![3.0, 1.0, 2.0]);
        assert_eq!(ds.sorted(), vec![1.0, 2.0, 3.0]);
        assert_eq!(ds.values(), &[3.0, 1.0, 2.0]);
    }

    #[test]
    fn sample_has_twenty_values() {
        assert_eq!(Dataset::sample().len(), 20);
    }
}
