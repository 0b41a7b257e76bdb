use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use matcher::{MatchResult, ShadeEntry};
use serde::Serialize;
use std::sync::Arc;

/// Match a sampled color against the shade catalog.
///
/// The body is read as raw bytes so that every malformed payload, including
/// non-JSON bodies and a missing content type, yields the same 400 response
/// instead of an extractor rejection. A body over the configured limit is
/// answered with 413.
///
/// # Request
///
/// ```json
/// { "rgb": [200, 160, 130] }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "bestMatch": { "name": "NW30", "rgb": [195, 160, 130], "undertone": "neutral-warm", "confidence": 96 },
///   "alternativeMatches": [{ "name": "C4", "rgb": [200, 165, 135], "undertone": "cool", "distance": 13 }],
///   "userUndertone": "warm",
///   "recommendations": ["..."]
/// }
/// ```
pub async fn match_foundation(
    State(state): State<Arc<ServerState>>,
    body: Result<Bytes, BytesRejection>,
) -> ServerResult<Json<MatchResult>> {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            let err = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ServerError::PayloadTooLarge {
                    limit: state.config.max_body_size(),
                }
            } else {
                ServerError::InvalidInput(rejection.body_text())
            };
            metrics::counter!("shadematch_requests_total", "outcome" => "rejected").increment(1);
            return Err(err);
        }
    };

    match shadematch::process_request_with(&state.matcher, &body) {
        Ok(result) => {
            metrics::counter!("shadematch_requests_total", "outcome" => "ok").increment(1);
            metrics::histogram!("shadematch_confidence")
                .record(f64::from(result.best_match.confidence));
            tracing::info!(
                best = result.best_match.shade.name,
                confidence = result.best_match.confidence,
                user_undertone = %result.user_undertone,
                "Foundation match"
            );
            Ok(Json(result))
        }
        Err(err) => {
            let err = ServerError::from(err);
            let outcome = match &err {
                ServerError::InvalidInput(_) => "invalid",
                _ => "error",
            };
            metrics::counter!("shadematch_requests_total", "outcome" => outcome).increment(1);
            Err(err)
        }
    }
}

/// Catalog listing response
#[derive(Debug, Serialize)]
pub struct ShadeListResponse {
    pub total: usize,
    pub shades: &'static [ShadeEntry],
}

/// List every shade the matcher ranks against
pub async fn list_shades(State(state): State<Arc<ServerState>>) -> Json<ShadeListResponse> {
    let shades = state.matcher.shades();
    Json(ShadeListResponse {
        total: shades.len(),
        shades,
    })
}
