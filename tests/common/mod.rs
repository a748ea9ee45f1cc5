//! Shared fixtures for the engine integration tests.
//!
//! The "hip-hop head" fixture is the canonical scenario user: 50 ratings
//! dominated by highly-rated hip-hop, a handful of jazz and soul on the
//! side, a few written reviews and modest engagement counters.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Months, TimeZone, Utc};
use tasteid_engine::profile::{
    InMemoryAlbums, InMemoryEngagement, InMemoryRatings, SocialSignals,
};
use tasteid_engine::{AlbumMeta, Rating, TasteEngine};

pub const HIP_HOP_USER: &str = "hiphop_head";
pub const TWIN_USER: &str = "twin";
pub const JAZZ_USER: &str = "jazz_purist";
pub const SPARSE_USER: &str = "newcomer";

/// Fixed reference time for every test; the engine takes `now` explicitly.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 20, 12, 0, 0).unwrap()
}

fn rated_at(index: usize) -> DateTime<Utc> {
    // Spread ratings over the last 12 months so both consolidation windows
    // are populated.
    Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap() - Months::new((index % 12) as u32)
}

fn album(album_id: &str, artist: &str, genre: &str, release_year: i32) -> AlbumMeta {
    AlbumMeta {
        album_id: album_id.to_string(),
        artist: artist.to_string(),
        genres: [genre.to_string()].into_iter().collect(),
        release_year,
        popularity_rank: None,
    }
}

fn rating(
    user_id: &str,
    album_id: &str,
    score: f64,
    index: usize,
    review: Option<&str>,
) -> Rating {
    Rating {
        user_id: user_id.to_string(),
        album_id: album_id.to_string(),
        score,
        created_at: rated_at(index),
        review_text: review.map(|r| r.to_string()),
    }
}

/// The catalog every fixture user rates from.
pub fn fixture_albums() -> Vec<AlbumMeta> {
    let mut albums = Vec::new();
    for i in 0..30 {
        let release_year = if i % 3 == 0 { 2023 } else { 1990 + (i as i32 % 25) };
        albums.push(album(
            &format!("hh-{i:02}"),
            &format!("MC {}", i % 15),
            "hip-hop",
            release_year,
        ));
    }
    for i in 0..3 {
        albums.push(album(&format!("mad-{i}"), "Madvillain", "hip-hop", 2004));
    }
    for i in 0..9 {
        albums.push(album(
            &format!("jz-{i}"),
            &format!("Quartet {}", i % 6),
            "jazz",
            1955 + i as i32,
        ));
    }
    for i in 0..8 {
        albums.push(album(
            &format!("so-{i}"),
            &format!("Soul {}", i % 5),
            "soul",
            1968 + i as i32,
        ));
    }
    albums
}

/// 50 ratings: hip-hop loved, jazz and soul liked less.
pub fn hip_hop_ratings(user_id: &str) -> Vec<Rating> {
    let hip_hop_scores = [7.0, 8.0, 9.0, 9.5, 6.5, 8.5];
    let jazz_scores = [5.5, 6.5, 7.5];
    let soul_scores = [6.0, 7.0];
    let reviews = [
        Some("an amazing timeless classic"),
        Some("boring and forgettable"),
        Some("warm dusty loops all over this record"),
    ];

    let mut ratings = Vec::new();
    for i in 0..30 {
        let review = if i < reviews.len() { reviews[i] } else { None };
        ratings.push(rating(
            user_id,
            &format!("hh-{i:02}"),
            hip_hop_scores[i % 6],
            i,
            review,
        ));
    }
    for i in 0..3 {
        ratings.push(rating(user_id, &format!("mad-{i}"), 9.0, 30 + i, None));
    }
    for i in 0..9 {
        ratings.push(rating(
            user_id,
            &format!("jz-{i}"),
            jazz_scores[i % 3],
            33 + i,
            None,
        ));
    }
    for i in 0..8 {
        ratings.push(rating(
            user_id,
            &format!("so-{i}"),
            soul_scores[i % 2],
            42 + i,
            None,
        ));
    }
    ratings
}

/// A jazz-only grader with a very different rating style.
pub fn jazz_ratings(user_id: &str) -> Vec<Rating> {
    (0..9)
        .map(|i| rating(user_id, &format!("jz-{i}"), 4.0 + (i % 4) as f64, i, None))
        .collect()
}

/// Two ratings: below every classification minimum.
pub fn sparse_ratings(user_id: &str) -> Vec<Rating> {
    vec![
        rating(user_id, "hh-00", 8.0, 0, None),
        rating(user_id, "jz-0", 6.0, 1, None),
    ]
}

pub fn fixture_engagement() -> Vec<(String, SocialSignals)> {
    vec![(
        HIP_HOP_USER.to_string(),
        SocialSignals {
            collaboration_count: 5,
            comment_count: 4,
            list_share_count: 2,
            artwork_view_count: 5,
        },
    )]
}

/// Engine over the full fixture population, engagement counters attached.
pub fn build_engine() -> TasteEngine {
    let mut ratings = hip_hop_ratings(HIP_HOP_USER);
    ratings.extend(hip_hop_ratings(TWIN_USER));
    ratings.extend(jazz_ratings(JAZZ_USER));
    ratings.extend(sparse_ratings(SPARSE_USER));

    TasteEngine::new(
        Arc::new(InMemoryRatings::new(ratings)),
        Arc::new(InMemoryAlbums::new(fixture_albums())),
    )
    .with_engagement(Arc::new(InMemoryEngagement::new(fixture_engagement())))
}
