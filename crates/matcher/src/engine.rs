use serde_json::Value;

use crate::catalog::catalog;
use crate::color::{classify_undertone, weighted_distance};
use crate::input::parse_request;
use crate::recommend::recommendations;
use crate::types::{BestMatch, MatchError, MatchResult, Rgb, ScoredShade, ShadeEntry};


/// Number of runner-up shades reported after the best match.
pub const ALTERNATIVE_COUNT: usize = 3;

/// Distance at which confidence bottoms out at zero.
pub const CONFIDENCE_CEILING: f64 = 200.0;

/// Score every catalog entry against `query`, closest first.
///
/// The sort is stable, so entries at equal distance keep catalog order.
pub fn rank_shades(query: Rgb, shades: &[ShadeEntry]) -> Vec<ScoredShade> {
    let mut scored: Vec<ScoredShade> = shades
        .iter()
        .map(|shade| ScoredShade {
            shade: *shade,
            distance: weighted_distance(query, shade.rgb),
        })
        .collect();
    scored.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    scored
}

/// Map a best-match distance to a percentage in `[0, 100]`.
pub fn confidence_for(distance: f64) -> u8 {
    let pct = ((1.0 - distance / CONFIDENCE_CEILING) * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Matches query colors against a fixed shade table.
///
/// Holds only a reference to an immutable table, so a single instance can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct ShadeMatcher {
    shades: &'static [ShadeEntry],
}

impl Default for ShadeMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ShadeMatcher {
    /// Matcher over the built-in catalog.
    pub fn new() -> Self {
        Self::with_catalog(catalog())
    }

    /// Matcher over an alternate static table.
    pub fn with_catalog(shades: &'static [ShadeEntry]) -> Self {
        Self { shades }
    }

    pub fn shades(&self) -> &'static [ShadeEntry] {
        self.shades
    }

    /// Validate a JSON request body and match it.
    ///
    /// Invalid bodies are rejected before the catalog is scanned.
    pub fn match_request(&self, body: &Value) -> Result<MatchResult, MatchError> {
        let query = parse_request(body)?;
        self.match_rgb(query)
    }

    /// Match an already validated color.
    pub fn match_rgb(&self, query: Rgb) -> Result<MatchResult, MatchError> {
        let ranked = rank_shades(query, self.shades);
        let mut ranked = ranked.into_iter();

        let best = ranked
            .next()
            .ok_or_else(|| MatchError::Internal("shade catalog is empty".into()))?;

        let confidence = confidence_for(best.distance);
        let user_undertone = classify_undertone(query);
        let alternative_matches = ranked.take(ALTERNATIVE_COUNT).map(Into::into).collect();
        let recommendations = recommendations(confidence, user_undertone, best.shade.undertone);

        tracing::debug!(
            query = %query,
            best = best.shade.name,
            distance = best.distance,
            confidence,
            user_undertone = %user_undertone,
            "matched foundation shade"
        );

        Ok(MatchResult {
            best_match: BestMatch {
                shade: best.shade,
                confidence,
                distance: best.distance,
            },
            alternative_matches,
            user_undertone,
            recommendations,
        })
    }
}

/// Match a color against the built-in catalog.
pub fn match_rgb(query: Rgb) -> Result<MatchResult, MatchError> {
    ShadeMatcher::new().match_rgb(query)
}
