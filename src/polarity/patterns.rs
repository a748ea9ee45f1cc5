//! Behavioral pattern registry backing the polarity diversity component.
//!
//! Like the archetype table, patterns are data: a name and a detector
//! predicate over the signal and activations.

use crate::networks::{ActivationVector, Network};
use crate::profile::models::TasteSignal;

pub struct Pattern {
    pub id: &'static str,
    pub detect: fn(&TasteSignal, &ActivationVector) -> bool,
}

pub static PATTERNS: &[Pattern] = &[
    Pattern {
        id: "explorer",
        detect: |_, activations| activations.get(Network::Discovery) > 0.5,
    },
    Pattern {
        id: "loyalist",
        detect: |_, activations| activations.get(Network::Comfort) > 0.5,
    },
    Pattern {
        id: "completionist",
        detect: |signal, _| signal.max_albums_per_artist >= 4,
    },
    Pattern {
        id: "early-adopter",
        detect: |signal, _| signal.recent_release_ratio > 0.5,
    },
    Pattern {
        id: "essayist",
        detect: |signal, _| signal.avg_review_length >= 80.0,
    },
    Pattern {
        id: "prolific",
        detect: |signal, _| signal.review_count >= 100,
    },
    Pattern {
        id: "wide-spectrum",
        detect: |signal, _| signal.genre_vector.len() >= 8,
    },
    Pattern {
        id: "era-hopper",
        detect: |signal, _| signal.decade_vector.len() >= 4,
    },
    Pattern {
        id: "hard-grader",
        detect: |signal, _| signal.review_count >= 10 && signal.rating_mean < 5.5,
    },
    Pattern {
        id: "easy-grader",
        detect: |signal, _| signal.review_count >= 10 && signal.rating_mean > 7.5,
    },
];

/// Names of all patterns the user currently exhibits, in registry order.
pub fn detect_patterns(signal: &TasteSignal, activations: &ActivationVector) -> Vec<&'static str> {
    PATTERNS
        .iter()
        .filter(|pattern| (pattern.detect)(signal, activations))
        .map(|pattern| pattern.id)
        .collect()
}
