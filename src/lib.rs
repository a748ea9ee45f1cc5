//! TasteID: taste profiling and compatibility engine.
//!
//! Converts a user's accumulated album ratings into a multi-dimensional
//! taste signature, classifies the user into archetypes, tracks how their
//! taste consolidates over time, and scores pairwise compatibility between
//! users. Pure and synchronous throughout: persistence, transport and
//! presentation live with the callers.

pub mod archetype;
pub mod compatibility;
pub mod consolidation;
pub mod networks;
pub mod polarity;
pub mod profile;
pub mod signal;

// Re-export the engine surface for convenience.
pub use compatibility::compute_compatibility;
pub use consolidation::compute_consolidation;
pub use networks::{map_activations, ActivationVector, Network};
pub use polarity::compute_polarity;
pub use profile::{
    AlbumMeta, ArchetypeAssignment, CompatibilityResult, ConsolidatedTaste, EngineError,
    MatchType, PolarityScore, Rating, SocialSignals, TasteEngine, TasteProfile, TasteSignal,
};
pub use signal::extract_signal;
