use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingStats {
    pub average: f64,
    pub count: usize,
    /// How many ratings fell on each whole value 1 through 10.
    pub distribution: BTreeMap<u8, u32>,
}

impl RatingStats {
    pub fn from_values(values: &[f64]) -> Self {
        let mut distribution: BTreeMap<u8, u32> = (1..=10).map(|v| (v, 0)).collect();
        for value in values {
            let bucket = (value.trunc() as i64).clamp(1, 10) as u8;
            *distribution.entry(bucket).or_insert(0) += 1;
        }

        let average = if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        };

        Self {
            average,
            count: values.len(),
            distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rating_set_reports_zero_average() {
        let stats = RatingStats::from_values(&[]);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.count, 0);
        assert!(stats.distribution.values().all(|&n| n == 0));
    }

    #[test]
    fn distribution_buckets_by_whole_value() {
        let stats = RatingStats::from_values(&[7.0, 7.5, 10.0, 1.0]);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.distribution[&7], 2);
        assert_eq!(stats.distribution[&10], 1);
        assert_eq!(stats.distribution[&1], 1);
        assert!((stats.average - 6.375).abs() < 1e-9);
    }
}
