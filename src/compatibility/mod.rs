//! Pairwise compatibility between two taste signatures.
//!
//! Every term is symmetric in its inputs and the reported pair is ordered by
//! user id, so `compatibility(a, b)` and `compatibility(b, a)` are
//! identical results.

use std::collections::BTreeSet;

use crate::profile::models::{
    CompatibilityBreakdown, CompatibilityResult, MatchType, TasteSignal,
};

/// Artist overlap compares the users' top-N artist sets.
pub const TOP_ARTIST_COUNT: usize = 20;

/// Blend weights for the overall score: genre, artist, rating alignment.
pub const BLEND_WEIGHTS: [f64; 3] = [0.45, 0.30, 0.25];

const MEAN_DIFF_PENALTY: f64 = 7.0;
const STDDEV_DIFF_PENALTY: f64 = 6.0;

/// Computes the full compatibility result for two signatures. Order of the
/// two arguments does not matter.
pub fn compute_compatibility(a: &TasteSignal, b: &TasteSignal) -> CompatibilityResult {
    // Canonical pair order, so both call orders serialize identically.
    let (first, second) = if a.user_id <= b.user_id { (a, b) } else { (b, a) };

    let genre_overlap = genre_overlap(first, second);
    let artist_overlap = artist_overlap(first, second);
    let rating_alignment = rating_alignment(first, second);

    let overall = BLEND_WEIGHTS[0] * genre_overlap as f64
        + BLEND_WEIGHTS[1] * artist_overlap as f64
        + BLEND_WEIGHTS[2] * rating_alignment as f64;
    let overall_score = overall.round().clamp(0.0, 100.0) as u8;

    CompatibilityResult {
        user_a: first.user_id.clone(),
        user_b: second.user_id.clone(),
        overall_score,
        match_type: MatchType::from_score(overall_score),
        breakdown: CompatibilityBreakdown {
            genre_overlap,
            artist_overlap,
            rating_alignment,
        },
        shared_genres: shared_genres(first, second),
        shared_artists: shared_artists(first, second),
    }
}

/// Cosine similarity of the two genre vectors over the union of their keys,
/// scaled to [0,100].
fn genre_overlap(a: &TasteSignal, b: &TasteSignal) -> u8 {
    let keys: BTreeSet<&String> = a.genre_vector.keys().chain(b.genre_vector.keys()).collect();
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for key in keys {
        let va = a.genre_vector.get(key).copied().unwrap_or(0.0);
        let vb = b.genre_vector.get(key).copied().unwrap_or(0.0);
        dot += va * vb;
        norm_a += va * va;
        norm_b += vb * vb;
    }
    if norm_a <= 0.0 || norm_b <= 0.0 {
        return 0;
    }
    to_percent(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Jaccard overlap of the two top-N artist sets, scaled to [0,100].
fn artist_overlap(a: &TasteSignal, b: &TasteSignal) -> u8 {
    let top_a = top_artists(a);
    let top_b = top_artists(b);
    if top_a.is_empty() || top_b.is_empty() {
        return 0;
    }
    let intersection = top_a.intersection(&top_b).count();
    let union = top_a.union(&top_b).count();
    to_percent(intersection as f64 / union as f64)
}

/// Similarity of rating *style*: 100 minus scaled differences of mean and
/// spread. Rewards users who grade alike, independent of what they grade.
fn rating_alignment(a: &TasteSignal, b: &TasteSignal) -> u8 {
    let mean_diff = (a.rating_mean - b.rating_mean).abs();
    let stddev_diff = (a.rating_stddev - b.rating_stddev).abs();
    let score = 100.0 - MEAN_DIFF_PENALTY * mean_diff - STDDEV_DIFF_PENALTY * stddev_diff;
    score.round().clamp(0.0, 100.0) as u8
}

/// The user's top artists by rated-album count, ties broken by name so the
/// set is deterministic.
fn top_artists(signal: &TasteSignal) -> BTreeSet<String> {
    let mut ranked: Vec<(&String, &u32)> = signal.artist_frequency.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(TOP_ARTIST_COUNT)
        .map(|(name, _)| name.clone())
        .collect()
}

fn shared_genres(a: &TasteSignal, b: &TasteSignal) -> Vec<String> {
    a.genre_vector
        .iter()
        .filter(|(genre, weight)| {
            **weight > 0.0 && b.genre_vector.get(*genre).is_some_and(|w| *w > 0.0)
        })
        .map(|(genre, _)| genre.clone())
        .collect()
}

fn shared_artists(a: &TasteSignal, b: &TasteSignal) -> Vec<String> {
    top_artists(a)
        .intersection(&top_artists(b))
        .cloned()
        .collect()
}

fn to_percent(ratio: f64) -> u8 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}
