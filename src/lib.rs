//! Workspace umbrella crate for foundation shade matching.
//!
//! This crate takes raw request bodies, decodes them, and runs them through
//! the [`matcher`] core with a single API entry point. Transports (the HTTP
//! server, the CLI) only deal in bytes and [`MatchResult`] values.

pub use matcher::{
    AlternativeMatch, BestMatch, MatchError, MatchResult, Rgb, ShadeEntry, ShadeMatcher,
    Undertone, catalog, classify_undertone, confidence_for, find_shade, parse_request,
    rank_shades, weighted_distance,
};

use serde_json::Value;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Metrics observer for pipeline stages.
pub trait PipelineMetrics: Send + Sync {
    /// Body decoding and validation. An `Err` here means no catalog scan ran.
    fn record_decode(&self, latency: Duration, result: Result<(), MatchError>);
    /// Catalog scan and result synthesis.
    fn record_match(&self, latency: Duration, result: Result<u8, MatchError>);
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn PipelineMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_decode(self, result: Result<(), MatchError>) {
        self.recorder.record_decode(self.start.elapsed(), result);
    }

    fn record_match(self, result: Result<u8, MatchError>) {
        self.recorder.record_match(self.start.elapsed(), result);
    }
}

/// Decode a raw JSON body and match it against the built-in catalog.
///
/// Bodies that are not JSON, or JSON without a usable `rgb` triple, produce
/// [`MatchError::InvalidInput`].
pub fn process_request(body: &[u8]) -> Result<MatchResult, MatchError> {
    process_request_with(&ShadeMatcher::new(), body)
}

/// Decode a raw JSON body and match it with an explicit matcher.
///
/// The decode stage is timed from before the JSON parse, so its latency
/// covers both parsing and `rgb` validation.
pub fn process_request_with(
    matcher: &ShadeMatcher,
    body: &[u8],
) -> Result<MatchResult, MatchError> {
    let decode_metrics = MetricsSpan::start();
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(value) => value,
        Err(err) => {
            let err = MatchError::InvalidInput(format!("request body is not valid JSON: {err}"));
            return Err(reject(decode_metrics, err));
        }
    };
    run_pipeline(matcher, &value, decode_metrics)
}

/// Match an already decoded JSON body against the built-in catalog.
pub fn process_value(body: &Value) -> Result<MatchResult, MatchError> {
    process_value_with(&ShadeMatcher::new(), body)
}

/// Match an already decoded JSON body with an explicit matcher.
pub fn process_value_with(
    matcher: &ShadeMatcher,
    body: &Value,
) -> Result<MatchResult, MatchError> {
    run_pipeline(matcher, body, MetricsSpan::start())
}

fn reject(decode_metrics: Option<MetricsSpan>, err: MatchError) -> MatchError {
    tracing::debug!(error = %err, "rejected match request");
    if let Some(span) = decode_metrics {
        span.record_decode(Err(err.clone()));
    }
    err
}

fn run_pipeline(
    matcher: &ShadeMatcher,
    body: &Value,
    decode_metrics: Option<MetricsSpan>,
) -> Result<MatchResult, MatchError> {
    let query = match parse_request(body) {
        Ok(query) => {
            if let Some(span) = decode_metrics {
                span.record_decode(Ok(()));
            }
            query
        }
        Err(err) => return Err(reject(decode_metrics, err)),
    };

    let match_metrics = MetricsSpan::start();
    let result = matcher.match_rgb(query);
    if let Some(span) = match_metrics {
        span.record_match(
            result
                .as_ref()
                .map(|res| res.best_match.confidence)
                .map_err(Clone::clone),
        );
    }
    result
}
