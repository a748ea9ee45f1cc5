//! Error types for the profiling engine.

use thiserror::Error;

/// Rejection of a malformed rating at the engine boundary.
///
/// The pure component functions assume validated input; everything entering
/// through [`crate::profile::TasteEngine`] is checked first.
#[derive(Debug, Error)]
pub enum RatingValidationError {
    #[error("rating score {score} for album {album_id} is outside [0,10]")]
    ScoreOutOfRange { album_id: String, score: f64 },

    #[error("rating score for album {album_id} is not a finite number")]
    NonFiniteScore { album_id: String },

    #[error("rating with empty album id")]
    EmptyAlbumId,
}

/// Errors surfaced by the engine facade.
///
/// Insufficient data is never an error: it comes back as an unclassified
/// archetype or an omitted consolidation entry, since it is the expected
/// steady state for new users.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("rating source failure for user {user_id}")]
    RatingSource {
        user_id: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("album metadata failure for album {album_id}")]
    MetadataSource {
        album_id: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("engagement source failure for user {user_id}")]
    EngagementSource {
        user_id: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("rating of user {user_id} references unknown album {album_id}")]
    UnknownAlbum { user_id: String, album_id: String },

    #[error("invalid rating for user {user_id}")]
    InvalidRating {
        user_id: String,
        #[source]
        source: RatingValidationError,
    },
}
