//! Threshold sweep statistics

use serde::{Deserialize, Serialize};

/// Classification counts and rates at one decision threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Decision threshold
    pub threshold: f64,
    /// Normal messages scoring >= threshold (misclassified as spam)
    pub false_positives: usize,
    /// false_positives / normal corpus size
    pub false_positive_rate: f64,
    /// Spam messages scoring >= threshold (correctly detected)
    pub true_positives: usize,
    /// true_positives / spam corpus size
    pub true_positive_rate: f64,
}

/// Evaluate classification outcomes at each threshold.
///
/// Thresholds are evaluated independently; an empty corpus yields a rate
/// of 0 rather than a NaN.
pub fn sweep_thresholds(
    normal_scores: &[f64],
    spam_scores: &[f64],
    thresholds: &[f64],
) -> Vec<SweepPoint> {
    thresholds
        .iter()
        .map(|&threshold| {
            let false_positives = normal_scores.iter().filter(|&&s| s >= threshold).count();
            let true_positives = spam_scores.iter().filter(|&&s| s >= threshold).count();
            SweepPoint {
                threshold,
                false_positives,
                false_positive_rate: rate(false_positives, normal_scores.len()),
                true_positives,
                true_positive_rate: rate(true_positives, spam_scores.len()),
            }
        })
        .collect()
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_counts_and_rates() {
        let normal = [0.01, 0.02, 0.5, 0.95];
        let spam = [0.5, 0.8, 0.99];

        let points = sweep_thresholds(&normal, &spam, &[0.5]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].false_positives, 2);
        assert!((points[0].false_positive_rate - 0.5).abs() < 1e-12);
        assert_eq!(points[0].true_positives, 3);
        assert!((points[0].true_positive_rate - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sweep_monotonic_over_ascending_thresholds() {
        let normal = [0.01, 0.03, 0.2, 0.4, 0.6, 0.9];
        let spam = [0.05, 0.5, 0.85, 0.99, 0.99];
        let thresholds = [0.01, 0.03, 0.05, 0.07, 0.09, 0.5, 0.9];

        let points = sweep_thresholds(&normal, &spam, &thresholds);
        for pair in points.windows(2) {
            assert!(pair[0].false_positives >= pair[1].false_positives);
            assert!(pair[0].true_positives >= pair[1].true_positives);
        }
    }

    #[test]
    fn test_sweep_empty_corpus_has_zero_rate() {
        let points = sweep_thresholds(&[], &[0.9], &[0.5]);
        assert_eq!(points[0].false_positives, 0);
        assert_eq!(points[0].false_positive_rate, 0.0);
        assert_eq!(points[0].true_positives, 1);
    }
}
