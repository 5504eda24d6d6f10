//! Recommendation tuning options.
//!
//! Callers may pass any query parameters alongside a recommendation request.
//! Only the fixed set of [`OptionKey`]s is forwarded to the provider; every
//! other key is dropped without an error. Values are passed through as
//! received, the provider is responsible for range checks.

use std::{collections::BTreeMap, fmt, str::FromStr};

/// Query parameter carrying the seed track. Never produced by [`filter_options`].
pub const SEED_TRACKS_KEY: &str = "seed_tracks";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionKey {
    /// 0.0 to 1.0 confidence that the track is acoustic.
    TargetAcousticness,
    /// 0.0 (least) to 1.0 (most) danceable.
    TargetDanceability,
    TargetDuration,
    /// 0.0 to 1.0 perceptual intensity.
    TargetEnergy,
    /// 0.0 to 1.0, above 0.5 suggests no vocals.
    TargetInstrumentalness,
    /// Pitch class, 0 = C, 1 = C#/Db and so on.
    TargetKey,
    /// 0.0 to 1.0, above 0.8 strongly suggests a live recording.
    TargetLiveness,
    /// Decibels, typically -60 to 0.
    TargetLoudness,
    /// 1 = major, 0 = minor.
    TargetMode,
    /// 0 to 100.
    TargetPopularity,
    /// 0.0 to 1.0, above 0.66 is probably spoken word.
    TargetSpeechiness,
    /// Beats per minute.
    MinTempo,
    MaxTempo,
    /// 0.0 to 1.0 musical positiveness.
    MinValence,
    MaxValence,
}

impl OptionKey {
    pub const ALL: [OptionKey; 15] = [
        OptionKey::TargetAcousticness,
        OptionKey::TargetDanceability,
        OptionKey::TargetDuration,
        OptionKey::TargetEnergy,
        OptionKey::TargetInstrumentalness,
        OptionKey::TargetKey,
        OptionKey::TargetLiveness,
        OptionKey::TargetLoudness,
        OptionKey::TargetMode,
        OptionKey::TargetPopularity,
        OptionKey::TargetSpeechiness,
        OptionKey::MinTempo,
        OptionKey::MaxTempo,
        OptionKey::MinValence,
        OptionKey::MaxValence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::TargetAcousticness => "target_acousticness",
            OptionKey::TargetDanceability => "target_danceability",
            OptionKey::TargetDuration => "target_duration",
            OptionKey::TargetEnergy => "target_energy",
            OptionKey::TargetInstrumentalness => "target_instrumentalness",
            OptionKey::TargetKey => "target_key",
            OptionKey::TargetLiveness => "target_liveness",
            OptionKey::TargetLoudness => "target_loudness",
            OptionKey::TargetMode => "target_mode",
            OptionKey::TargetPopularity => "target_popularity",
            OptionKey::TargetSpeechiness => "target_speechiness",
            OptionKey::MinTempo => "min_tempo",
            OptionKey::MaxTempo => "max_tempo",
            OptionKey::MinValence => "min_valence",
            OptionKey::MaxValence => "max_valence",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OptionKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown option key: {}", s))
    }
}

/// Allow-listed tuning options, ordered by key.
pub type TuningOptions = BTreeMap<OptionKey, String>;

/// Projects an arbitrary key/value mapping onto the [`OptionKey`] allow-list.
///
/// Keys are matched exactly. Unknown keys, including `seed_tracks`, are dropped.
pub fn filter_options<I, K, V>(raw: I) -> TuningOptions
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|(key, value)| {
            key.as_ref()
                .parse::<OptionKey>()
                .ok()
                .map(|k| (k, value.as_ref().to_string()))
        })
        .collect()
}

/// Parses a `key=value` pair as given on the command line.
pub fn parse_option_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected key=value, got '{}'", s)),
    }
}
