//! Taste profiling data models.
//!
//! Everything here is plain data: the engine takes these in, hands these
//! back, and never talks to a framework type.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single album rating, the immutable input event of the whole engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Rating {
    pub user_id: String,
    pub album_id: String,
    /// Score on the platform's 0-10 scale.
    pub score: f64,
    pub created_at: DateTime<Utc>,
    /// Free-form review text, if the user wrote one.
    pub review_text: Option<String>,
}

/// Album metadata, resolved from the catalog. Read-only to this engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AlbumMeta {
    pub album_id: String,
    pub artist: String,
    pub genres: BTreeSet<String>,
    pub release_year: i32,
    /// Popularity rank in the catalog, lower is more popular.
    pub popularity_rank: Option<u32>,
}

/// A rating joined with the metadata of the album it rates.
///
/// The engine resolves these once per computation so the pure per-component
/// functions never need to call back into a metadata source.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingRecord {
    pub rating: Rating,
    pub album: AlbumMeta,
}

/// Engagement counters sourced from the social layer.
///
/// These feed the Social and Aesthetic network activations only. When no
/// counters exist for a user both activations degrade to zero.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct SocialSignals {
    pub collaboration_count: u64,
    pub comment_count: u64,
    pub list_share_count: u64,
    pub artwork_view_count: u64,
}

/// Normalized per-user signal aggregate, recomputed wholesale from the full
/// rating history. Superseded, never merged, on each recompute.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TasteSignal {
    pub user_id: String,
    /// Per-genre emphasis, min-max normalized within this user's history.
    pub genre_vector: BTreeMap<String, f64>,
    /// Number of rated albums per artist.
    pub artist_frequency: BTreeMap<String, u32>,
    /// Per-release-decade emphasis (keyed by decade start year, e.g. 1990),
    /// min-max normalized within this user's history.
    pub decade_vector: BTreeMap<i32, f64>,
    pub rating_mean: f64,
    pub rating_stddev: f64,
    /// Total ratings in the history. Downstream consumers gate on this for
    /// confidence; a small count means every vector is low-confidence.
    pub review_count: usize,
    /// Mean word count of written reviews; 0 when none were written.
    pub avg_review_length: f64,
    /// Distinct artists / review count.
    pub distinct_artist_rate: f64,
    /// Largest number of rated albums by a single artist.
    pub max_albums_per_artist: u32,
    /// Fraction of ratings placed on albums released within 2 years of the
    /// rating date.
    pub recent_release_ratio: f64,
    /// Population variance of per-review sentiment scores.
    pub sentiment_variance: f64,
}

impl TasteSignal {
    /// The all-zero signal produced for an empty rating history.
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            genre_vector: BTreeMap::new(),
            artist_frequency: BTreeMap::new(),
            decade_vector: BTreeMap::new(),
            rating_mean: 0.0,
            rating_stddev: 0.0,
            review_count: 0,
            avg_review_length: 0.0,
            distinct_artist_rate: 0.0,
            max_albums_per_artist: 0,
            recent_release_ratio: 0.0,
            sentiment_variance: 0.0,
        }
    }

    /// Herfindahl concentration of the genre vector: 1.0 for a single-genre
    /// listener, approaching 0 the more evenly spread the listening is.
    pub fn genre_concentration(&self) -> f64 {
        let total: f64 = self.genre_vector.values().sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.genre_vector
            .values()
            .map(|v| {
                let share = v / total;
                share * share
            })
            .sum()
    }
}

/// Archetype assignment for a user.
///
/// `primary` is `None` only below the classification review minimum
/// ("unclassified"); once assigned there is always exactly one primary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArchetypeAssignment {
    pub primary: Option<String>,
    pub primary_confidence: f64,
    pub secondary: Option<String>,
}

impl ArchetypeAssignment {
    pub fn unclassified() -> Self {
        Self {
            primary: None,
            primary_confidence: 0.0,
            secondary: None,
        }
    }

    pub fn is_classified(&self) -> bool {
        self.primary.is_some()
    }
}

/// The five independent polarity components, each in [0,1].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PolarityComponents {
    pub signature_strength: f64,
    pub pattern_diversity: f64,
    pub consolidation_score: f64,
    pub uniqueness_score: f64,
    pub engagement_depth: f64,
}

/// Distinctiveness index: fixed weighted sum of the five components.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PolarityScore {
    pub value: f64,
    pub components: PolarityComponents,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TasteKind {
    Genre,
    Artist,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Strengthening,
    Fading,
    Stable,
}

/// A genre or artist with enough history in both time windows to call a
/// trend on it. Entities below the sample minimums are omitted entirely.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConsolidatedTaste {
    pub name: String,
    pub kind: TasteKind,
    pub trend: Trend,
    pub recent_avg: f64,
    pub older_avg: f64,
    pub total_reviews: usize,
}

/// Discrete bucket over the overall compatibility score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    TasteTwin,
    StrongMatch,
    CompatibleExplorer,
    LowMatch,
}

impl MatchType {
    pub fn from_score(overall: u8) -> Self {
        match overall {
            80..=u8::MAX => MatchType::TasteTwin,
            60..=79 => MatchType::StrongMatch,
            40..=59 => MatchType::CompatibleExplorer,
            _ => MatchType::LowMatch,
        }
    }
}

/// Per-dimension compatibility breakdown, each value in [0,100].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityBreakdown {
    pub genre_overlap: u8,
    pub artist_overlap: u8,
    pub rating_alignment: u8,
}

/// Pairwise compatibility between two users' signatures.
///
/// The pair is ordered by user id so both call orders produce an identical
/// result; computed on demand and never persisted by this engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompatibilityResult {
    pub user_a: String,
    pub user_b: String,
    pub overall_score: u8,
    pub match_type: MatchType,
    pub breakdown: CompatibilityBreakdown,
    pub shared_genres: Vec<String>,
    pub shared_artists: Vec<String>,
}

/// Everything the engine derives for one user, in one pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TasteProfile {
    pub signal: TasteSignal,
    pub activations: crate::networks::ActivationVector,
    pub archetype: ArchetypeAssignment,
    pub polarity: PolarityScore,
    pub consolidations: Vec<ConsolidatedTaste>,
}
