//! Collaborator traits the engine consumes.
//!
//! The rating store, catalog and social layer live outside this crate; the
//! engine only sees them through these seams. In-memory implementations are
//! provided for tests and the offline CLI.

use std::collections::HashMap;

use anyhow::Result;

use super::models::{AlbumMeta, Rating, SocialSignals};

pub trait RatingSource: Send + Sync {
    /// Returns the user's full rating history as a consistent snapshot.
    /// An unknown user yields Ok with an empty list.
    /// Returns Err if the underlying store fails.
    fn get_ratings(&self, user_id: &str) -> Result<Vec<Rating>>;
}

pub trait AlbumMetadataResolver: Send + Sync {
    /// Returns metadata for the given album.
    /// Returns Ok(None) if the album is not in the catalog.
    /// Returns Err if the underlying store fails.
    fn get_album(&self, album_id: &str) -> Result<Option<AlbumMeta>>;
}

pub trait EngagementSource: Send + Sync {
    /// Returns the user's social/engagement counters.
    /// Returns Ok(None) when no counters exist for the user.
    /// Returns Err if the underlying store fails.
    fn get_social_signals(&self, user_id: &str) -> Result<Option<SocialSignals>>;
}

/// Rating source backed by a plain map, for tests and offline snapshots.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRatings {
    by_user: HashMap<String, Vec<Rating>>,
}

impl InMemoryRatings {
    pub fn new(ratings: impl IntoIterator<Item = Rating>) -> Self {
        let mut by_user: HashMap<String, Vec<Rating>> = HashMap::new();
        for rating in ratings {
            by_user.entry(rating.user_id.clone()).or_default().push(rating);
        }
        Self { by_user }
    }

    pub fn user_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.by_user.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl RatingSource for InMemoryRatings {
    fn get_ratings(&self, user_id: &str) -> Result<Vec<Rating>> {
        Ok(self.by_user.get(user_id).cloned().unwrap_or_default())
    }
}

/// Album metadata resolver backed by a plain map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAlbums {
    by_id: HashMap<String, AlbumMeta>,
}

impl InMemoryAlbums {
    pub fn new(albums: impl IntoIterator<Item = AlbumMeta>) -> Self {
        Self {
            by_id: albums
                .into_iter()
                .map(|album| (album.album_id.clone(), album))
                .collect(),
        }
    }
}

impl AlbumMetadataResolver for InMemoryAlbums {
    fn get_album(&self, album_id: &str) -> Result<Option<AlbumMeta>> {
        Ok(self.by_id.get(album_id).cloned())
    }
}

/// Engagement counters backed by a plain map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEngagement {
    by_user: HashMap<String, SocialSignals>,
}

impl InMemoryEngagement {
    pub fn new(counters: impl IntoIterator<Item = (String, SocialSignals)>) -> Self {
        Self {
            by_user: counters.into_iter().collect(),
        }
    }
}

impl EngagementSource for InMemoryEngagement {
    fn get_social_signals(&self, user_id: &str) -> Result<Option<SocialSignals>> {
        Ok(self.by_user.get(user_id).copied())
    }
}
