//! The seven listening networks and the activation mapper.
//!
//! Each network is an independent 0-1 axis; activations are never
//! normalized against each other. The typical ranges below are a display
//! reference only: an activation outside its typical range is valid, and is
//! exactly what the polarity uniqueness component rewards.

use serde::{Deserialize, Serialize};

use crate::profile::models::{SocialSignals, TasteSignal};

pub const NETWORK_COUNT: usize = 7;

/// Closed set of listening networks. The order here is the canonical index
/// order of [`ActivationVector`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    Discovery,
    Comfort,
    DeepDive,
    Reactive,
    Emotional,
    Social,
    Aesthetic,
}

impl Network {
    pub const ALL: [Network; NETWORK_COUNT] = [
        Network::Discovery,
        Network::Comfort,
        Network::DeepDive,
        Network::Reactive,
        Network::Emotional,
        Network::Social,
        Network::Aesthetic,
    ];

    pub fn index(self) -> usize {
        match self {
            Network::Discovery => 0,
            Network::Comfort => 1,
            Network::DeepDive => 2,
            Network::Reactive => 3,
            Network::Emotional => 4,
            Network::Social => 5,
            Network::Aesthetic => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Network::Discovery => "Discovery",
            Network::Comfort => "Comfort",
            Network::DeepDive => "Deep Dive",
            Network::Reactive => "Reactive",
            Network::Emotional => "Emotional",
            Network::Social => "Social",
            Network::Aesthetic => "Aesthetic",
        }
    }

    /// Population-typical activation range, for display and for the
    /// uniqueness deviation measure. Not a constraint.
    pub fn typical_range(self) -> (f64, f64) {
        match self {
            Network::Discovery => (0.15, 0.30),
            Network::Comfort => (0.25, 0.45),
            Network::DeepDive => (0.10, 0.35),
            Network::Reactive => (0.10, 0.30),
            Network::Emotional => (0.20, 0.40),
            Network::Social => (0.05, 0.25),
            Network::Aesthetic => (0.05, 0.20),
        }
    }
}

/// Fixed-size activation vector keyed by [`Network`]. Every value is in
/// [0,1]; the values deliberately do not sum to any fixed total.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivationVector([f64; NETWORK_COUNT]);

impl ActivationVector {
    pub fn new(values: [f64; NETWORK_COUNT]) -> Self {
        Self(values.map(|v| v.clamp(0.0, 1.0)))
    }

    pub fn get(&self, network: Network) -> f64 {
        self.0[network.index()]
    }

    pub fn values(&self) -> &[f64; NETWORK_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Network, f64)> + '_ {
        Network::ALL.iter().map(move |&n| (n, self.0[n.index()]))
    }
}

/// Monotonic saturating squash into [0,1): `1 - exp(-k * x)`.
pub fn saturate(x: f64, k: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    1.0 - (-k * x).exp()
}

// Per-network input gains. These constants are the authoritative contract
// for the activation shapes; the upstream artifacts only fix the output
// ranges.
const GENRE_BREADTH_GAIN: f64 = 1.0 / 6.0;
const DEEP_DIVE_GAIN: f64 = 0.35;
const REACTIVE_GAIN: f64 = 2.2;
const STDDEV_GAIN: f64 = 0.6;
const SENTIMENT_VARIANCE_GAIN: f64 = 4.0;
const ENGAGEMENT_COUNT_GAIN: f64 = 0.05;

/// Maps a taste signal (plus optional social counters) onto the seven
/// network activations.
///
/// Social and Aesthetic are driven entirely by the external engagement
/// counters; when those are absent both activations degrade to 0.
pub fn map_activations(signal: &TasteSignal, social: Option<&SocialSignals>) -> ActivationVector {
    let breadth = saturate(signal.genre_vector.len() as f64, GENRE_BREADTH_GAIN);
    let discovery = 0.6 * signal.distinct_artist_rate + 0.4 * breadth;

    let repeat_rate = if signal.review_count == 0 {
        0.0
    } else {
        1.0 - signal.distinct_artist_rate
    };
    let comfort = 0.6 * repeat_rate + 0.4 * signal.genre_concentration();

    let deep_dive = saturate(
        signal.max_albums_per_artist.saturating_sub(1) as f64,
        DEEP_DIVE_GAIN,
    );

    let reactive = saturate(signal.recent_release_ratio, REACTIVE_GAIN);

    let emotional = 0.5 * saturate(signal.rating_stddev, STDDEV_GAIN)
        + 0.5 * saturate(signal.sentiment_variance, SENTIMENT_VARIANCE_GAIN);

    let (social_activation, aesthetic) = match social {
        Some(counters) => (
            saturate(
                (counters.collaboration_count + counters.comment_count) as f64,
                ENGAGEMENT_COUNT_GAIN,
            ),
            saturate(
                (counters.artwork_view_count + counters.list_share_count) as f64,
                ENGAGEMENT_COUNT_GAIN,
            ),
        ),
        None => (0.0, 0.0),
    };

    ActivationVector::new([
        discovery,
        comfort,
        deep_dive,
        reactive,
        emotional,
        social_activation,
        aesthetic,
    ])
}
