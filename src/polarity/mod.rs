//! Polarity scoring: five independent [0,1] components blended into one
//! distinctiveness index by a fixed weight vector.
//!
//! Everything here is deterministic; identical inputs reproduce the score
//! bit for bit.

mod patterns;

pub use patterns::{detect_patterns, Pattern, PATTERNS};

use crate::networks::{ActivationVector, Network, NETWORK_COUNT};
use crate::profile::models::{ConsolidatedTaste, PolarityComponents, PolarityScore, TasteSignal, Trend};

/// Component weights, in declaration order of [`PolarityComponents`]:
/// signature strength, pattern diversity, consolidation, uniqueness,
/// engagement depth. They sum to 1.0.
pub const WEIGHTS: [f64; 5] = [0.25, 0.20, 0.20, 0.20, 0.15];

/// Gain applied to the mean out-of-typical-range deviation; a user sitting
/// a third of the way outside the typical bands on average maxes out.
const UNIQUENESS_GAIN: f64 = 3.0;

const REVIEW_COUNT_GAIN: f64 = 1.0 / 40.0;
const REVIEW_LENGTH_GAIN: f64 = 1.0 / 120.0;

/// Neutral consolidation score when no genre or artist met the sample
/// minimums; sparse histories are not scored as "all fading".
const NEUTRAL_CONSOLIDATION: f64 = 0.5;

pub fn compute_polarity(
    signal: &TasteSignal,
    activations: &ActivationVector,
    consolidations: &[ConsolidatedTaste],
) -> PolarityScore {
    let components = PolarityComponents {
        signature_strength: signature_strength(activations),
        pattern_diversity: pattern_diversity(signal, activations),
        consolidation_score: consolidation_score(consolidations),
        uniqueness_score: uniqueness_score(activations),
        engagement_depth: engagement_depth(signal),
    };
    PolarityScore {
        value: weighted_value(&components),
        components,
    }
}

/// The fixed weighted sum the score invariant is stated over.
pub fn weighted_value(components: &PolarityComponents) -> f64 {
    let values = [
        components.signature_strength,
        components.pattern_diversity,
        components.consolidation_score,
        components.uniqueness_score,
        components.engagement_depth,
    ];
    values
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(value, weight)| value * weight)
        .sum()
}

/// How peaked vs. flat the activation vector is: population variance across
/// the seven axes, normalized by the maximum possible variance of values in
/// [0,1] (0.25).
fn signature_strength(activations: &ActivationVector) -> f64 {
    let values = activations.values();
    let mean = values.iter().sum::<f64>() / NETWORK_COUNT as f64;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / NETWORK_COUNT as f64;
    (variance / 0.25).clamp(0.0, 1.0)
}

/// Detected behavioral patterns over the size of the pattern registry.
fn pattern_diversity(signal: &TasteSignal, activations: &ActivationVector) -> f64 {
    let detected = detect_patterns(signal, activations).len();
    (detected as f64 / PATTERNS.len() as f64).clamp(0.0, 1.0)
}

/// Fraction of consolidated tastes holding or growing rather than fading.
fn consolidation_score(consolidations: &[ConsolidatedTaste]) -> f64 {
    if consolidations.is_empty() {
        return NEUTRAL_CONSOLIDATION;
    }
    let holding = consolidations
        .iter()
        .filter(|c| matches!(c.trend, Trend::Strengthening | Trend::Stable))
        .count();
    (holding as f64 / consolidations.len() as f64).clamp(0.0, 1.0)
}

/// Mean normalized deviation of each activation outside its
/// population-typical range, scaled by [`UNIQUENESS_GAIN`]. A user inside
/// every typical band scores 0.
fn uniqueness_score(activations: &ActivationVector) -> f64 {
    let total: f64 = Network::ALL
        .iter()
        .map(|&network| {
            let value = activations.get(network);
            let (lo, hi) = network.typical_range();
            if value < lo {
                (lo - value) / lo
            } else if value > hi {
                (value - hi) / (1.0 - hi)
            } else {
                0.0
            }
        })
        .sum();
    (total / NETWORK_COUNT as f64 * UNIQUENESS_GAIN).clamp(0.0, 1.0)
}

/// Saturating blend of how much and how long the user writes.
fn engagement_depth(signal: &TasteSignal) -> f64 {
    let count = crate::networks::saturate(signal.review_count as f64, REVIEW_COUNT_GAIN);
    let length = crate::networks::saturate(signal.avg_review_length, REVIEW_LENGTH_GAIN);
    (0.5 * count + 0.5 * length).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::TasteKind;

    fn make_signal() -> TasteSignal {
        let mut signal = TasteSignal::empty("u1");
        signal.review_count = 60;
        signal.avg_review_length = 90.0;
        signal.rating_mean = 7.0;
        signal.max_albums_per_artist = 5;
        signal.genre_vector = (0..9)
            .map(|i| (format!("genre-{i}"), 0.5))
            .collect();
        signal.decade_vector = [1970, 1980, 1990, 2000, 2010]
            .into_iter()
            .map(|d| (d, 0.5))
            .collect();
        signal
    }

    fn make_consolidation(name: &str, trend: Trend) -> ConsolidatedTaste {
        ConsolidatedTaste {
            name: name.to_string(),
            kind: TasteKind::Genre,
            trend,
            recent_avg: 7.0,
            older_avg: 7.0,
            total_reviews: 6,
        }
    }

    // ==========================================================================
    // Weight invariant
    // ==========================================================================

    #[test]
    fn test_weights_sum_to_one() {
        assert!((WEIGHTS.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_value_equals_weighted_component_sum() {
        let activations = ActivationVector::new([0.9, 0.1, 0.7, 0.05, 0.6, 0.0, 0.5]);
        let consolidations = vec![
            make_consolidation("jazz", Trend::Strengthening),
            make_consolidation("rock", Trend::Fading),
            make_consolidation("pop", Trend::Stable),
        ];
        let score = compute_polarity(&make_signal(), &activations, &consolidations);

        let expected = 0.25 * score.components.signature_strength
            + 0.20 * score.components.pattern_diversity
            + 0.20 * score.components.consolidation_score
            + 0.20 * score.components.uniqueness_score
            + 0.15 * score.components.engagement_depth;
        assert!((score.value - expected).abs() < 1e-12);
    }

    // ==========================================================================
    // Components
    // ==========================================================================

    #[test]
    fn test_flat_activations_have_zero_signature_strength() {
        let flat = ActivationVector::new([0.4; 7]);
        let score = compute_polarity(&make_signal(), &flat, &[]);
        assert_eq!(score.components.signature_strength, 0.0);
    }

    #[test]
    fn test_peaked_activations_score_higher_than_flat() {
        let signal = make_signal();
        let flat = compute_polarity(&signal, &ActivationVector::new([0.5; 7]), &[]);
        let peaked = compute_polarity(
            &signal,
            &ActivationVector::new([1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]),
            &[],
        );
        assert!(
            peaked.components.signature_strength > flat.components.signature_strength
        );
    }

    #[test]
    fn test_consolidation_score_fraction() {
        let consolidations = vec![
            make_consolidation("jazz", Trend::Strengthening),
            make_consolidation("rock", Trend::Stable),
            make_consolidation("pop", Trend::Fading),
            make_consolidation("folk", Trend::Fading),
        ];
        let score = compute_polarity(&make_signal(), &ActivationVector::default(), &consolidations);
        assert!((score.components.consolidation_score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_no_consolidations_is_neutral_not_zero() {
        let score = compute_polarity(&make_signal(), &ActivationVector::default(), &[]);
        assert_eq!(score.components.consolidation_score, NEUTRAL_CONSOLIDATION);
    }

    #[test]
    fn test_in_band_activations_have_zero_uniqueness() {
        // Midpoint of every typical range.
        let mid: Vec<f64> = Network::ALL
            .iter()
            .map(|n| {
                let (lo, hi) = n.typical_range();
                (lo + hi) / 2.0
            })
            .collect();
        let activations = ActivationVector::new(mid.try_into().unwrap());
        let score = compute_polarity(&make_signal(), &activations, &[]);
        assert_eq!(score.components.uniqueness_score, 0.0);
    }

    #[test]
    fn test_extreme_activations_maximize_uniqueness() {
        let activations = ActivationVector::new([1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let score = compute_polarity(&make_signal(), &activations, &[]);
        assert_eq!(score.components.uniqueness_score, 1.0);
    }

    #[test]
    fn test_pattern_diversity_counts_registry_hits() {
        // make_signal() trips completionist, essayist, wide-spectrum and
        // era-hopper; discovery activation adds explorer.
        let activations = ActivationVector::new([0.8, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let signal = make_signal();
        let detected = detect_patterns(&signal, &activations);

        assert!(detected.contains(&"explorer"));
        assert!(detected.contains(&"completionist"));
        assert!(detected.contains(&"essayist"));

        let score = compute_polarity(&signal, &activations, &[]);
        let expected = detected.len() as f64 / PATTERNS.len() as f64;
        assert!((score.components.pattern_diversity - expected).abs() < 1e-12);
    }

    #[test]
    fn test_engagement_depth_saturates() {
        let mut heavy = make_signal();
        heavy.review_count = 10_000;
        heavy.avg_review_length = 10_000.0;
        let score = compute_polarity(&heavy, &ActivationVector::default(), &[]);

        assert!(score.components.engagement_depth > 0.99);
        assert!(score.components.engagement_depth <= 1.0);
    }

    // ==========================================================================
    // Bounds and determinism
    // ==========================================================================

    #[test]
    fn test_all_components_bounded_for_degenerate_input() {
        let score = compute_polarity(
            &TasteSignal::empty("u1"),
            &ActivationVector::default(),
            &[],
        );
        for component in [
            score.components.signature_strength,
            score.components.pattern_diversity,
            score.components.consolidation_score,
            score.components.uniqueness_score,
            score.components.engagement_depth,
            score.value,
        ] {
            assert!((0.0..=1.0).contains(&component));
        }
    }

    #[test]
    fn test_polarity_is_reproducible() {
        let activations = ActivationVector::new([0.7, 0.2, 0.55, 0.1, 0.45, 0.3, 0.15]);
        let consolidations = vec![make_consolidation("jazz", Trend::Stable)];
        let signal = make_signal();

        let first = compute_polarity(&signal, &activations, &consolidations);
        let second = compute_polarity(&signal, &activations, &consolidations);
        assert_eq!(first, second);
    }
}
