//! Archetype classification from the activation vector.

mod registry;

pub use registry::{find, Archetype, ARCHETYPES};

use crate::networks::ActivationVector;
use crate::profile::models::{ArchetypeAssignment, TasteSignal};

/// Minimum ratings before classification runs at all. Below this the user is
/// unclassified, never a guessed label.
pub const MIN_REVIEWS: usize = 10;

/// A secondary archetype must score within this margin of the primary.
pub const SECONDARY_MARGIN: f64 = 0.15;

/// ...and above this absolute floor.
pub const SECONDARY_FLOOR: f64 = 0.45;

const COSINE_WEIGHT: f64 = 0.85;
const AFFINITY_WEIGHT: f64 = 0.15;

/// Scores every archetype in the registry against the user's activation
/// vector and genre emphasis, and picks primary/secondary.
pub fn classify(signal: &TasteSignal, activations: &ActivationVector) -> ArchetypeAssignment {
    if signal.review_count < MIN_REVIEWS {
        return ArchetypeAssignment::unclassified();
    }

    let mut scored: Vec<(&'static Archetype, f64)> = ARCHETYPES
        .iter()
        .map(|archetype| (archetype, archetype_score(archetype, signal, activations)))
        .collect();
    // Highest score first; ties broken by id so classification is
    // deterministic.
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.id.cmp(b.0.id))
    });

    let (primary, primary_score) = scored[0];
    let secondary = scored.get(1).and_then(|&(archetype, score)| {
        let within_margin = primary_score - score <= SECONDARY_MARGIN;
        let above_floor = score >= SECONDARY_FLOOR;
        (within_margin && above_floor).then(|| archetype.id.to_string())
    });

    ArchetypeAssignment {
        primary: Some(primary.id.to_string()),
        primary_confidence: primary_score.clamp(0.0, 1.0),
        secondary,
    }
}

/// Similarity of one archetype to the user: weighted blend of activation
/// cosine similarity and genre affinity. Archetypes without affinities score
/// on the cosine term alone, so a strong genre match always outranks a
/// behavior-only lookalike.
pub fn archetype_score(
    archetype: &Archetype,
    signal: &TasteSignal,
    activations: &ActivationVector,
) -> f64 {
    let cosine = cosine_similarity(activations.values(), &archetype.reference);
    let affinity = genre_affinity(archetype, signal);
    (COSINE_WEIGHT * cosine + AFFINITY_WEIGHT * affinity).clamp(0.0, 1.0)
}

/// Weighted mean of the user's genre emphasis over the archetype's affinity
/// genres; 0 when the archetype declares none.
fn genre_affinity(archetype: &Archetype, signal: &TasteSignal) -> f64 {
    let total_weight: f64 = archetype.genre_affinities.iter().map(|(_, w)| w).sum();
    if total_weight <= 0.0 {
        return 0.0;
    }
    let weighted: f64 = archetype
        .genre_affinities
        .iter()
        .map(|(genre, weight)| signal.genre_vector.get(*genre).copied().unwrap_or(0.0) * weight)
        .sum();
    (weighted / total_weight).clamp(0.0, 1.0)
}

/// Cosine similarity between two non-negative vectors; 0 when either is all
/// zero, and in [0,1] otherwise.
fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a <= 0.0 || norm_b <= 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
