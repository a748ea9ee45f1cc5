//! The archetype registry.
//!
//! Archetypes are declarative data: a reference activation profile over the
//! seven networks (in [`Network::ALL`] index order: discovery, comfort,
//! deep dive, reactive, emotional, social, aesthetic) plus optional genre
//! affinities. Adding an archetype is a new table row, never new logic.
//!
//! [`Network::ALL`]: crate::networks::Network::ALL

use crate::networks::NETWORK_COUNT;

#[derive(Debug, Clone, Copy)]
pub struct Archetype {
    /// Stable identifier used in assignments.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Reference activation profile.
    pub reference: [f64; NETWORK_COUNT],
    /// Genre keys (normalized lowercase) with affinity weights; empty for
    /// behavior-only archetypes.
    pub genre_affinities: &'static [(&'static str, f64)],
}

pub static ARCHETYPES: &[Archetype] = &[
    // Behavior-led archetypes.
    Archetype {
        id: "crate-digger",
        name: "Crate Digger",
        reference: [0.85, 0.15, 0.60, 0.20, 0.35, 0.15, 0.30],
        genre_affinities: &[],
    },
    Archetype {
        id: "comfort-listener",
        name: "Comfort Listener",
        reference: [0.15, 0.85, 0.30, 0.10, 0.25, 0.15, 0.10],
        genre_affinities: &[],
    },
    Archetype {
        id: "completionist",
        name: "Completionist",
        reference: [0.25, 0.55, 0.90, 0.15, 0.30, 0.10, 0.15],
        genre_affinities: &[],
    },
    Archetype {
        id: "trend-surfer",
        name: "Trend Surfer",
        reference: [0.55, 0.20, 0.15, 0.90, 0.30, 0.45, 0.25],
        genre_affinities: &[],
    },
    Archetype {
        id: "heart-on-sleeve",
        name: "Heart on Sleeve",
        reference: [0.30, 0.40, 0.35, 0.20, 0.90, 0.30, 0.25],
        genre_affinities: &[],
    },
    Archetype {
        id: "scene-connector",
        name: "Scene Connector",
        reference: [0.45, 0.30, 0.20, 0.45, 0.35, 0.90, 0.35],
        genre_affinities: &[],
    },
    Archetype {
        id: "cover-collector",
        name: "Cover Collector",
        reference: [0.40, 0.30, 0.30, 0.25, 0.30, 0.30, 0.90],
        genre_affinities: &[],
    },
    Archetype {
        id: "omnivore",
        name: "Omnivore",
        reference: [0.75, 0.30, 0.40, 0.40, 0.40, 0.35, 0.35],
        genre_affinities: &[],
    },
    Archetype {
        id: "lone-wolf",
        name: "Lone Wolf",
        reference: [0.45, 0.45, 0.70, 0.15, 0.40, 0.05, 0.15],
        genre_affinities: &[],
    },
    Archetype {
        id: "chart-watcher",
        name: "Chart Watcher",
        reference: [0.35, 0.35, 0.15, 0.75, 0.25, 0.60, 0.25],
        genre_affinities: &[],
    },
    Archetype {
        id: "nostalgist",
        name: "Nostalgist",
        reference: [0.20, 0.75, 0.45, 0.05, 0.45, 0.15, 0.25],
        genre_affinities: &[],
    },
    Archetype {
        id: "critic-at-large",
        name: "Critic at Large",
        reference: [0.60, 0.25, 0.45, 0.40, 0.65, 0.40, 0.30],
        genre_affinities: &[],
    },
    // Genre-led archetypes.
    Archetype {
        id: "hip-hop-head",
        name: "Hip-Hop Head",
        reference: [0.45, 0.50, 0.55, 0.40, 0.45, 0.35, 0.30],
        genre_affinities: &[("hip-hop", 1.0), ("rap", 0.8), ("trap", 0.4)],
    },
    Archetype {
        id: "jazz-cat",
        name: "Jazz Cat",
        reference: [0.50, 0.45, 0.60, 0.15, 0.50, 0.20, 0.30],
        genre_affinities: &[("jazz", 1.0), ("bebop", 0.6), ("fusion", 0.5)],
    },
    Archetype {
        id: "metalhead",
        name: "Metalhead",
        reference: [0.35, 0.60, 0.65, 0.25, 0.55, 0.25, 0.30],
        genre_affinities: &[("metal", 1.0), ("heavy metal", 0.8), ("doom metal", 0.5)],
    },
    Archetype {
        id: "indie-archivist",
        name: "Indie Archivist",
        reference: [0.65, 0.35, 0.50, 0.35, 0.45, 0.30, 0.40],
        genre_affinities: &[("indie", 1.0), ("indie rock", 0.9), ("lo-fi", 0.5)],
    },
    Archetype {
        id: "popologist",
        name: "Popologist",
        reference: [0.40, 0.50, 0.30, 0.65, 0.40, 0.45, 0.35],
        genre_affinities: &[("pop", 1.0), ("synth-pop", 0.6), ("dance-pop", 0.6)],
    },
    Archetype {
        id: "club-cartographer",
        name: "Club Cartographer",
        reference: [0.55, 0.35, 0.40, 0.55, 0.35, 0.50, 0.35],
        genre_affinities: &[
            ("electronic", 1.0),
            ("house", 0.8),
            ("techno", 0.8),
            ("ambient", 0.3),
        ],
    },
    Archetype {
        id: "folk-revivalist",
        name: "Folk Revivalist",
        reference: [0.40, 0.60, 0.45, 0.15, 0.60, 0.20, 0.30],
        genre_affinities: &[("folk", 1.0), ("singer-songwriter", 0.8), ("americana", 0.6)],
    },
    Archetype {
        id: "classical-scholar",
        name: "Classical Scholar",
        reference: [0.35, 0.55, 0.75, 0.05, 0.55, 0.15, 0.35],
        genre_affinities: &[("classical", 1.0), ("baroque", 0.6), ("opera", 0.5)],
    },
    Archetype {
        id: "punk-lifer",
        name: "Punk Lifer",
        reference: [0.45, 0.55, 0.45, 0.30, 0.60, 0.40, 0.25],
        genre_affinities: &[("punk", 1.0), ("hardcore", 0.8), ("post-punk", 0.6)],
    },
    Archetype {
        id: "country-roader",
        name: "Country Roader",
        reference: [0.30, 0.70, 0.40, 0.25, 0.50, 0.25, 0.20],
        genre_affinities: &[("country", 1.0), ("bluegrass", 0.6), ("americana", 0.5)],
    },
    Archetype {
        id: "soul-devotee",
        name: "Soul Devotee",
        reference: [0.40, 0.55, 0.50, 0.20, 0.65, 0.30, 0.30],
        genre_affinities: &[("soul", 1.0), ("r&b", 0.8), ("funk", 0.7)],
    },
    Archetype {
        id: "ambient-drifter",
        name: "Ambient Drifter",
        reference: [0.50, 0.45, 0.55, 0.15, 0.35, 0.10, 0.45],
        genre_affinities: &[("ambient", 1.0), ("drone", 0.6), ("new age", 0.4)],
    },
];

/// Looks up an archetype by id.
pub fn find(id: &str) -> Option<&'static Archetype> {
    ARCHETYPES.iter().find(|a| a.id == id)
}
