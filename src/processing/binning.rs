use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use crate::state::dataset::Dataset;

/// One chart bar: a bin label and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyBin {
    pub label: String,
    pub count: usize,
}

/// One bin per distinct value, ascending by value.
///
/// The domain is not predefined here, so zero-count bins never appear.
pub fn exact_value_bins(dataset: &Dataset) -> Vec<FrequencyBin> {
    let mut counts: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
    for &v in dataset.values() {
        *counts.entry(OrderedFloat(v)).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(v, count)| FrequencyBin {
            label: format!("{}", v.into_inner()),
            count,
        })
        .collect()
}

/// Fixed-width buckets over a predefined inclusive domain.
///
/// Every bucket appears in the output, zero counts included, labelled
/// `"{lo}~{lo + width - 1}"` (0–100 at width 10 gives `"0~9"` through
/// `"90~99"`). Both domain ends are inclusive: a value equal to `domain_end`
/// counts in the last bucket. Values outside the domain are not counted.
/// A zero width or an empty domain yields no buckets.
pub fn fixed_width_bins(
    dataset: &Dataset,
    domain_start: i64,
    domain_end: i64,
    width: u32,
) -> Vec<FrequencyBin> {
    if width == 0 || domain_end <= domain_start {
        return Vec::new();
    }
    let width = i64::from(width);
    let span = domain_end - domain_start;
    let bucket_count = ((span + width - 1) / width) as usize;

    let mut counts = vec![0usize; bucket_count];
    for &v in dataset.values() {
        if v < domain_start as f64 || v > domain_end as f64 {
            continue;
        }
        let idx = ((v - domain_start as f64) / width as f64) as usize;
        counts[idx.min(bucket_count - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lo = domain_start + i as i64 * width;
            let hi = (lo + width - 1).min(domain_end);
            FrequencyBin {
                label: format!("{lo}~{hi}"),
                count,
            }
        })
        .collect()
}
