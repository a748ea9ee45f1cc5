//! Consolidation tracking: which genres and artists are strengthening,
//! fading or stable across a recent/older split of the rating history.
//!
//! The sample minimums are part of the observable contract: an entity below
//! them is omitted entirely, never emitted with a trend guessed from
//! insufficient data.

use std::collections::BTreeMap;

use chrono::{DateTime, Months, Utc};

use crate::profile::models::{ConsolidatedTaste, RatingRecord, TasteKind, Trend};

/// The recent window is the last 6 calendar months before `now`.
pub const RECENT_WINDOW_MONTHS: u32 = 6;

/// A genre needs at least this many ratings in *each* window.
pub const GENRE_MIN_PER_WINDOW: usize = 2;

/// An artist needs at least this many ratings in total (and at least one in
/// each window, so both averages exist).
pub const ARTIST_MIN_TOTAL: usize = 3;

/// Average-score shift (on the 0-10 scale) that flips a trend away from
/// stable.
pub const TREND_DELTA: f64 = 0.5;

#[derive(Debug, Default)]
struct WindowedScores {
    recent: Vec<f64>,
    older: Vec<f64>,
}

impl WindowedScores {
    fn push(&mut self, score: f64, is_recent: bool) {
        if is_recent {
            self.recent.push(score);
        } else {
            self.older.push(score);
        }
    }

    fn total(&self) -> usize {
        self.recent.len() + self.older.len()
    }
}

/// Splits the history at `now - 6 months` and reports every genre and
/// artist with enough samples on both sides. Output is sorted by kind then
/// name, so the result is deterministic for any input order.
pub fn compute_consolidation(
    records: &[RatingRecord],
    now: DateTime<Utc>,
) -> Vec<ConsolidatedTaste> {
    let cutoff = now - Months::new(RECENT_WINDOW_MONTHS);

    let mut genres: BTreeMap<String, WindowedScores> = BTreeMap::new();
    let mut artists: BTreeMap<String, WindowedScores> = BTreeMap::new();

    for record in records {
        let is_recent = record.rating.created_at >= cutoff;
        for genre in &record.album.genres {
            genres
                .entry(genre.trim().to_lowercase())
                .or_default()
                .push(record.rating.score, is_recent);
        }
        artists
            .entry(record.album.artist.clone())
            .or_default()
            .push(record.rating.score, is_recent);
    }

    let mut out = Vec::new();
    for (name, scores) in genres {
        if scores.recent.len() >= GENRE_MIN_PER_WINDOW && scores.older.len() >= GENRE_MIN_PER_WINDOW
        {
            out.push(consolidate(name, TasteKind::Genre, &scores));
        }
    }
    for (name, scores) in artists {
        if scores.total() >= ARTIST_MIN_TOTAL
            && !scores.recent.is_empty()
            && !scores.older.is_empty()
        {
            out.push(consolidate(name, TasteKind::Artist, &scores));
        }
    }
    out
}

fn consolidate(name: String, kind: TasteKind, scores: &WindowedScores) -> ConsolidatedTaste {
    let recent_avg = mean(&scores.recent);
    let older_avg = mean(&scores.older);
    ConsolidatedTaste {
        name,
        kind,
        trend: classify_trend(recent_avg, older_avg),
        recent_avg,
        older_avg,
        total_reviews: scores.total(),
    }
}

fn classify_trend(recent_avg: f64, older_avg: f64) -> Trend {
    let delta = recent_avg - older_avg;
    if delta >= TREND_DELTA {
        Trend::Strengthening
    } else if delta <= -TREND_DELTA {
        Trend::Fading
    } else {
        Trend::Stable
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
