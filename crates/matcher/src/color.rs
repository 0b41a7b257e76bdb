//! Color math used by the matcher.
//!
//! Neither function here is real colorimetry: the distance is a channel
//! weighted Euclidean metric in raw sRGB, not CIE Lab Delta-E, and the
//! undertone rule is a channel-ordering heuristic. Both are kept exactly as
//! they are so results stay stable across releases.

use crate::types::{Rgb, Undertone};

/// Per-channel weights for red, green and blue.
pub const CHANNEL_WEIGHTS: [f64; 3] = [2.0, 4.0, 3.0];

/// Weighted Euclidean distance `sqrt(2*dr^2 + 4*dg^2 + 3*db^2)`.
pub fn weighted_distance(a: Rgb, b: Rgb) -> f64 {
    a.channels()
        .iter()
        .zip(b.channels().iter())
        .zip(CHANNEL_WEIGHTS.iter())
        .map(|((&x, &y), &weight)| {
            let delta = f64::from(x) - f64::from(y);
            weight * delta * delta
        })
        .sum::<f64>()
        .sqrt()
}

/// Classify the undertone of a raw color.
///
/// Red strictly dominant: warm when green beats blue, otherwise neutral-warm.
/// Blue strictly dominant: cool. Anything else, including ties for the top
/// channel and green dominance, is neutral-cool.
pub fn classify_undertone(rgb: Rgb) -> Undertone {
    let (r, g, b) = (rgb.r(), rgb.g(), rgb.b());
    if r > g && r > b {
        if g > b {
            Undertone::Warm
        } else {
            Undertone::NeutralWarm
        }
    } else if b > r && b > g {
        Undertone::Cool
    } else {
        Undertone::NeutralCool
    }
}
