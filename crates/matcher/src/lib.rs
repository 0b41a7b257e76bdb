//! # Shade Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` turns a single sampled RGB color into a ranked foundation shade
//! recommendation drawn from a fixed catalog. It is a pure, synchronous
//! transformation: no I/O, no shared mutable state, and the same input
//! always yields the same [`MatchResult`].
//!
//! The pipeline for one query is:
//!
//! 1. validate and clamp the input ([`input`]),
//! 2. score every catalog shade with a channel-weighted distance ([`color`]),
//! 3. stable-sort, take the best shade and the next three ([`engine`]),
//! 4. classify the query's undertone and derive a confidence percentage,
//! 5. attach recommendation strings ([`recommend`]).
//!
//! The distance weights `(2, 4, 3)` and the confidence ceiling of `200` are
//! fixed constants. This is an approximation in raw sRGB, not CIE Lab
//! Delta-E, and the undertone rule is a heuristic.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{Rgb, ShadeMatcher, Undertone};
//!
//! let matcher = ShadeMatcher::new();
//! let result = matcher.match_rgb(Rgb::new(250, 215, 185)).expect("match");
//!
//! assert_eq!(result.best_match.shade.name, "W1");
//! assert_eq!(result.best_match.confidence, 100);
//! assert_eq!(result.user_undertone, Undertone::Warm);
//! assert_eq!(result.alternative_matches.len(), 3);
//! ```
//!
//! JSON request bodies go through [`ShadeMatcher::match_request`], which
//! rejects anything that is not `{"rgb": [r, g, b]}` with
//! [`MatchError::InvalidInput`] before touching the catalog.

pub mod catalog;
pub mod color;
pub mod engine;
pub mod input;
pub mod recommend;
pub mod serde_distance;
pub mod types;

pub use crate::catalog::{catalog, find_shade, CATALOG};
pub use crate::color::{classify_undertone, weighted_distance, CHANNEL_WEIGHTS};
pub use crate::engine::{
    confidence_for, match_rgb, rank_shades, ShadeMatcher, ALTERNATIVE_COUNT, CONFIDENCE_CEILING,
};
pub use crate::input::{parse_request, parse_rgb};
pub use crate::recommend::recommendations;
pub use crate::types::{
    AlternativeMatch, BestMatch, MatchError, MatchResult, Rgb, ScoredShade, ShadeEntry, Undertone,
};
