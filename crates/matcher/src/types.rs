use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An sRGB triple with 8-bit channels.
///
/// Serialized as a bare `[r, g, b]` array so it lines up with the request and
/// response payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb([u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Build a triple from arbitrary numeric components.
    ///
    /// Each component is rounded to the nearest integer and then clamped to
    /// `[0, 255]`. Non-finite components are rejected.
    pub fn from_components(r: f64, g: f64, b: f64) -> Result<Self, MatchError> {
        Ok(Self([
            clamp_channel(r)?,
            clamp_channel(g)?,
            clamp_channel(b)?,
        ]))
    }

    pub const fn r(self) -> u8 {
        self.0[0]
    }

    pub const fn g(self) -> u8 {
        self.0[1]
    }

    pub const fn b(self) -> u8 {
        self.0[2]
    }

    pub const fn channels(self) -> [u8; 3] {
        self.0
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r(), self.g(), self.b())
    }
}

fn clamp_channel(value: f64) -> Result<u8, MatchError> {
    if !value.is_finite() {
        return Err(MatchError::InvalidInput(format!(
            "channel value {value} is not a finite number"
        )));
    }
    // Negative values clamp to zero, so half-away-from-zero rounding agrees
    // with half-up rounding everywhere it matters.
    Ok(value.round().clamp(0.0, 255.0) as u8)
}

/// Coarse warm/cool classification shared by catalog shades and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Undertone {
    NeutralCool,
    NeutralWarm,
    Cool,
    Warm,
}

impl Undertone {
    pub const fn as_str(self) -> &'static str {
        match self {
            Undertone::NeutralCool => "neutral-cool",
            Undertone::NeutralWarm => "neutral-warm",
            Undertone::Cool => "cool",
            Undertone::Warm => "warm",
        }
    }
}

impl fmt::Display for Undertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named reference shade from the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShadeEntry {
    pub name: &'static str,
    pub rgb: Rgb,
    pub undertone: Undertone,
}

/// A catalog shade paired with its distance to the current query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredShade {
    pub shade: ShadeEntry,
    pub distance: f64,
}

/// The closest shade plus the derived confidence percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BestMatch {
    #[serde(flatten)]
    pub shade: ShadeEntry,
    /// Always within `[0, 100]`.
    pub confidence: u8,
    /// Exact weighted distance to the query; not part of the wire format.
    #[serde(skip)]
    pub distance: f64,
}

/// A runner-up shade. `distance` is exact here and rounded on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlternativeMatch {
    #[serde(flatten)]
    pub shade: ShadeEntry,
    #[serde(serialize_with = "crate::serde_distance::serialize")]
    pub distance: f64,
}

impl From<ScoredShade> for AlternativeMatch {
    fn from(scored: ScoredShade) -> Self {
        Self {
            shade: scored.shade,
            distance: scored.distance,
        }
    }
}

/// Full response for a single query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub best_match: BestMatch,
    /// Next-best shades in ascending distance order; never contains `best_match`.
    pub alternative_matches: Vec<AlternativeMatch>,
    pub user_undertone: Undertone,
    pub recommendations: Vec<String>,
}

/// Errors produced by the matching layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The request did not carry a usable RGB triple.
    #[error("invalid RGB input: {0}")]
    InvalidInput(String),
    /// Something that should be impossible once input is validated.
    #[error("internal matching failure: {0}")]
    Internal(String),
}
