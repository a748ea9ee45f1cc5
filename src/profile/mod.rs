//! The TasteID engine facade.
//!
//! Wires the pure components to the external collaborators (rating store,
//! album catalog, social counters) and exposes the per-user and pairwise
//! entry points. All computation is synchronous and deterministic; callers
//! own any parallelism beyond the batch helper here.

pub mod error;
pub mod models;
pub mod sources;

pub use error::{EngineError, RatingValidationError};
pub use models::{
    AlbumMeta, ArchetypeAssignment, CompatibilityBreakdown, CompatibilityResult,
    ConsolidatedTaste, MatchType, PolarityComponents, PolarityScore, Rating, RatingRecord,
    SocialSignals, TasteKind, TasteProfile, TasteSignal, Trend,
};
pub use sources::{
    AlbumMetadataResolver, EngagementSource, InMemoryAlbums, InMemoryEngagement,
    InMemoryRatings, RatingSource,
};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::{archetype, compatibility, consolidation, networks, polarity, signal};

/// Checks one rating against the boundary contract: finite score in [0,10],
/// non-empty album id.
pub fn validate_rating(rating: &Rating) -> Result<(), RatingValidationError> {
    if rating.album_id.is_empty() {
        return Err(RatingValidationError::EmptyAlbumId);
    }
    if !rating.score.is_finite() {
        return Err(RatingValidationError::NonFiniteScore {
            album_id: rating.album_id.clone(),
        });
    }
    if !(0.0..=10.0).contains(&rating.score) {
        return Err(RatingValidationError::ScoreOutOfRange {
            album_id: rating.album_id.clone(),
            score: rating.score,
        });
    }
    Ok(())
}

#[derive(Clone)]
pub struct TasteEngine {
    ratings: Arc<dyn RatingSource>,
    albums: Arc<dyn AlbumMetadataResolver>,
    engagement: Option<Arc<dyn EngagementSource>>,
}

impl TasteEngine {
    pub fn new(ratings: Arc<dyn RatingSource>, albums: Arc<dyn AlbumMetadataResolver>) -> Self {
        Self {
            ratings,
            albums,
            engagement: None,
        }
    }

    /// Attaches the optional social/engagement counters. Without them the
    /// Social and Aesthetic activations stay at zero.
    pub fn with_engagement(mut self, engagement: Arc<dyn EngagementSource>) -> Self {
        self.engagement = Some(engagement);
        self
    }

    /// Recomputes the user's taste signal wholesale from their full rating
    /// history.
    pub fn compute_taste_signal(&self, user_id: &str) -> Result<TasteSignal, EngineError> {
        let records = self.load_records(user_id)?;
        let signal = signal::extract_signal(user_id, &records);
        debug!(
            user_id,
            review_count = signal.review_count,
            genres = signal.genre_vector.len(),
            "extracted taste signal"
        );
        Ok(signal)
    }

    /// Consolidation trends for the user's history, split at `now - 6
    /// months`. `now` is explicit so recomputation stays reproducible.
    pub fn compute_consolidation(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<ConsolidatedTaste>, EngineError> {
        let records = self.load_records(user_id)?;
        Ok(consolidation::compute_consolidation(&records, now))
    }

    /// Runs the full pipeline for one user: signal, consolidation,
    /// activations, archetype, polarity.
    pub fn compute_profile(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<TasteProfile, EngineError> {
        let records = self.load_records(user_id)?;
        let signal = signal::extract_signal(user_id, &records);
        let consolidations = consolidation::compute_consolidation(&records, now);

        let social = self.load_social_signals(user_id)?;
        let activations = networks::map_activations(&signal, social.as_ref());
        let archetype = archetype::classify(&signal, &activations);
        let polarity = polarity::compute_polarity(&signal, &activations, &consolidations);

        debug!(
            user_id,
            archetype = archetype.primary.as_deref().unwrap_or("unclassified"),
            polarity = polarity.value,
            "computed taste profile"
        );
        Ok(TasteProfile {
            signal,
            activations,
            archetype,
            polarity,
            consolidations,
        })
    }

    /// Batch recompute across many users. Each user succeeds or fails on
    /// their own; a bad history never poisons the batch.
    pub fn compute_profiles(
        &self,
        user_ids: &[String],
        now: DateTime<Utc>,
    ) -> Vec<(String, Result<TasteProfile, EngineError>)> {
        let results: Vec<_> = user_ids
            .par_iter()
            .map(|user_id| (user_id.clone(), self.compute_profile(user_id, now)))
            .collect();
        let failures = results.iter().filter(|(_, r)| r.is_err()).count();
        info!(
            users = user_ids.len(),
            failures, "batch profile recompute finished"
        );
        results
    }

    /// Pairwise compatibility from both users' freshly computed signals.
    /// Reads only; neither signature is touched.
    pub fn compute_compatibility(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<CompatibilityResult, EngineError> {
        let signal_a = self.compute_taste_signal(user_a)?;
        let signal_b = self.compute_taste_signal(user_b)?;
        Ok(compatibility::compute_compatibility(&signal_a, &signal_b))
    }

    /// Loads the user's ratings, validates them at the boundary, and joins
    /// each with its album metadata.
    fn load_records(&self, user_id: &str) -> Result<Vec<RatingRecord>, EngineError> {
        let ratings =
            self.ratings
                .get_ratings(user_id)
                .map_err(|source| EngineError::RatingSource {
                    user_id: user_id.to_string(),
                    source,
                })?;

        let mut records = Vec::with_capacity(ratings.len());
        for rating in ratings {
            validate_rating(&rating).map_err(|source| EngineError::InvalidRating {
                user_id: user_id.to_string(),
                source,
            })?;
            let album = self
                .albums
                .get_album(&rating.album_id)
                .map_err(|source| EngineError::MetadataSource {
                    album_id: rating.album_id.clone(),
                    source,
                })?
                .ok_or_else(|| EngineError::UnknownAlbum {
                    user_id: user_id.to_string(),
                    album_id: rating.album_id.clone(),
                })?;
            records.push(RatingRecord { rating, album });
        }
        Ok(records)
    }

    fn load_social_signals(&self, user_id: &str) -> Result<Option<SocialSignals>, EngineError> {
        match &self.engagement {
            Some(source) => {
                source
                    .get_social_signals(user_id)
                    .map_err(|source| EngineError::EngagementSource {
                        user_id: user_id.to_string(),
                        source,
                    })
            }
            None => Ok(None),
        }
    }
}
