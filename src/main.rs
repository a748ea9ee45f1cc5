//! Offline taste profile inspector.
//!
//! Loads rating and album snapshots from JSON files, runs the engine and
//! prints the result as pretty JSON. This binary is a caller of the engine,
//! not part of it; serialization and time live out here.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use serde::de::DeserializeOwned;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tasteid_engine::profile::{
    InMemoryAlbums, InMemoryEngagement, InMemoryRatings, SocialSignals,
};
use tasteid_engine::{AlbumMeta, Rating, TasteEngine};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a JSON array of rating records.
    pub ratings: PathBuf,

    /// Path to a JSON array of album metadata records.
    pub albums: PathBuf,

    /// Optional path to a JSON map of user id -> engagement counters.
    #[clap(long)]
    pub engagement: Option<PathBuf>,

    /// Compute the full profile of this user.
    #[clap(long)]
    pub user: Option<String>,

    /// Compute pairwise compatibility between two users.
    #[clap(long, num_args = 2, value_names = ["USER_A", "USER_B"])]
    pub compare: Option<Vec<String>>,

    /// Profile every user found in the ratings snapshot.
    #[clap(long)]
    pub all: bool,
}

fn load_json<T: DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let file =
        File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let ratings: Vec<Rating> = load_json(&cli_args.ratings)?;
    let albums: Vec<AlbumMeta> = load_json(&cli_args.albums)?;
    info!(ratings = ratings.len(), albums = albums.len(), "loaded snapshots");

    let rating_source = InMemoryRatings::new(ratings);
    let all_user_ids = rating_source.user_ids();
    let mut engine = TasteEngine::new(
        Arc::new(rating_source),
        Arc::new(InMemoryAlbums::new(albums)),
    );
    if let Some(path) = &cli_args.engagement {
        let counters: std::collections::HashMap<String, SocialSignals> = load_json(path)?;
        engine = engine.with_engagement(Arc::new(InMemoryEngagement::new(counters)));
    }

    let now = Utc::now();

    if let Some(pair) = &cli_args.compare {
        let result = engine.compute_compatibility(&pair[0], &pair[1])?;
        return print_json(&result);
    }

    if let Some(user_id) = &cli_args.user {
        let profile = engine.compute_profile(user_id, now)?;
        return print_json(&profile);
    }

    if cli_args.all {
        for (user_id, result) in engine.compute_profiles(&all_user_ids, now) {
            match result {
                Ok(profile) => print_json(&profile)?,
                Err(err) => eprintln!("{user_id}: {err:#}"),
            }
        }
        return Ok(());
    }

    bail!("Nothing to do: pass --user, --compare or --all");
}
