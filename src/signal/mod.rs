//! Signal extraction: raw rating history -> normalized [`TasteSignal`].
//!
//! All aggregates are recomputed wholesale from the full history, so there
//! is no incremental state to corrupt; calling this twice on the same input
//! yields identical output.

use std::collections::{BTreeMap, HashSet};

use chrono::Datelike;
use lazy_static::lazy_static;
use unicode_segmentation::UnicodeSegmentation;

use crate::profile::models::{RatingRecord, TasteSignal};

/// An album released within this many years of the rating date counts as a
/// recent-release rating for the Reactive network input.
pub const RECENT_RELEASE_YEARS: i32 = 2;

lazy_static! {
    static ref POSITIVE_WORDS: HashSet<&'static str> = [
        "love", "loved", "amazing", "beautiful", "brilliant", "perfect",
        "stunning", "masterpiece", "incredible", "gorgeous", "great",
        "favorite", "fantastic", "excellent", "wonderful", "best", "classic",
        "essential", "flawless", "timeless",
    ]
    .into_iter()
    .collect();
    static ref NEGATIVE_WORDS: HashSet<&'static str> = [
        "hate", "hated", "boring", "bland", "awful", "terrible", "worst",
        "disappointing", "mediocre", "forgettable", "overrated", "weak",
        "mess", "dull", "annoying", "generic", "tedious", "lifeless",
        "shallow", "bad",
    ]
    .into_iter()
    .collect();
}

/// Builds the full taste signal for one user from their joined rating
/// history. Never fails: an empty history yields the all-zero signal.
pub fn extract_signal(user_id: &str, records: &[RatingRecord]) -> TasteSignal {
    if records.is_empty() {
        return TasteSignal::empty(user_id);
    }

    let review_count = records.len();
    let scores: Vec<f64> = records.iter().map(|r| r.rating.score).collect();
    let rating_mean = mean(&scores);
    let rating_stddev = sample_stddev(&scores, rating_mean);

    // Frequency-weighted accumulation: a 9/10 rating contributes more signal
    // to its genres and decade than a 4/10 one.
    let mut genre_weights: BTreeMap<String, f64> = BTreeMap::new();
    let mut decade_weights: BTreeMap<i32, f64> = BTreeMap::new();
    let mut artist_frequency: BTreeMap<String, u32> = BTreeMap::new();
    let mut recent_release_count = 0usize;

    for record in records {
        let weight = record.rating.score / 10.0;
        for genre in &record.album.genres {
            *genre_weights.entry(normalize_genre(genre)).or_insert(0.0) += weight;
        }
        let decade = (record.album.release_year / 10) * 10;
        *decade_weights.entry(decade).or_insert(0.0) += weight;
        *artist_frequency
            .entry(record.album.artist.clone())
            .or_insert(0) += 1;

        if record.rating.created_at.year() - record.album.release_year <= RECENT_RELEASE_YEARS {
            recent_release_count += 1;
        }
    }

    let distinct_artist_rate = artist_frequency.len() as f64 / review_count as f64;
    let max_albums_per_artist = artist_frequency.values().copied().max().unwrap_or(0);

    let review_lengths: Vec<f64> = records
        .iter()
        .filter_map(|r| r.rating.review_text.as_deref())
        .filter(|text| !text.trim().is_empty())
        .map(|text| text.unicode_words().count() as f64)
        .collect();
    let avg_review_length = if review_lengths.is_empty() {
        0.0
    } else {
        mean(&review_lengths)
    };

    let sentiments: Vec<f64> = records
        .iter()
        .filter_map(|r| r.rating.review_text.as_deref())
        .filter(|text| !text.trim().is_empty())
        .map(review_sentiment)
        .collect();
    let sentiment_variance = if sentiments.len() < 2 {
        0.0
    } else {
        population_variance(&sentiments, mean(&sentiments))
    };

    TasteSignal {
        user_id: user_id.to_string(),
        genre_vector: min_max_normalize(genre_weights),
        artist_frequency,
        decade_vector: min_max_normalize(decade_weights),
        rating_mean,
        rating_stddev,
        review_count,
        avg_review_length,
        distinct_artist_rate,
        max_albums_per_artist,
        recent_release_ratio: recent_release_count as f64 / review_count as f64,
        sentiment_variance,
    }
}

/// Lexicon sentiment score for one review, in [-1,1].
/// 0 when the text contains no lexicon words at all.
pub fn review_sentiment(text: &str) -> f64 {
    let mut positive = 0usize;
    let mut negative = 0usize;
    for word in text.to_lowercase().unicode_words() {
        if POSITIVE_WORDS.contains(word) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(word) {
            negative += 1;
        }
    }
    let matched = positive + negative;
    if matched == 0 {
        return 0.0;
    }
    (positive as f64 - negative as f64) / matched as f64
}

fn normalize_genre(genre: &str) -> String {
    genre.trim().to_lowercase()
}

/// Min-max normalization into [0,1] within the map itself, so the vector
/// reflects relative emphasis inside this user's own history. A map whose
/// values are all equal normalizes to 1.0 everywhere.
fn min_max_normalize<K: Ord>(weights: BTreeMap<K, f64>) -> BTreeMap<K, f64> {
    if weights.is_empty() {
        return weights;
    }
    let min = weights.values().cloned().fold(f64::INFINITY, f64::min);
    let max = weights.values().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    weights
        .into_iter()
        .map(|(key, value)| {
            let normalized = if span <= f64::EPSILON {
                1.0
            } else {
                (value - min) / span
            };
            (key, normalized)
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_variance(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n-1 denominator); 0 for fewer than 2 values.
fn sample_stddev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}
