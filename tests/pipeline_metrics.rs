//! Pipeline metrics hooks. Kept in its own test binary because the recorder
//! is process-wide; tests here also serialize on `RECORDER_GUARD`.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use serde_json::Value;
use shadematch::{MatchError, PipelineMetrics, process_request, set_pipeline_metrics};

static RECORDER_GUARD: Mutex<()> = Mutex::new(());

fn exclusive_recorder() -> MutexGuard<'static, ()> {
    RECORDER_GUARD
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Default)]
struct Recorder {
    decodes: Mutex<Vec<bool>>,
    decode_latencies: Mutex<Vec<Duration>>,
    matches: Mutex<Vec<Result<u8, MatchError>>>,
}

impl PipelineMetrics for Recorder {
    fn record_decode(&self, latency: Duration, result: Result<(), MatchError>) {
        self.decodes.lock().unwrap().push(result.is_ok());
        self.decode_latencies.lock().unwrap().push(latency);
    }

    fn record_match(&self, _latency: Duration, result: Result<u8, MatchError>) {
        self.matches.lock().unwrap().push(result);
    }
}

/// Fastest of a few parses of `body`, whether the parse succeeds or not.
fn fastest_parse(body: &[u8]) -> Duration {
    (0..3)
        .map(|_| {
            let start = Instant::now();
            let _ = std::hint::black_box(serde_json::from_slice::<Value>(body));
            start.elapsed()
        })
        .min()
        .unwrap()
}

/// A large JSON object with no `rgb` field, optionally cut short so it no
/// longer parses.
fn padded_body(truncated: bool) -> Vec<u8> {
    let numbers = vec!["123456.789"; 200_000].join(",");
    let body = format!(r#"{{"pad":[{numbers}]}}"#);
    let mut bytes = body.into_bytes();
    if truncated {
        bytes.truncate(bytes.len() - 2);
    }
    bytes
}

#[test]
fn invalid_input_never_reaches_the_catalog_scan() {
    let _guard = exclusive_recorder();
    let recorder = Arc::new(Recorder::default());
    set_pipeline_metrics(Some(recorder.clone()));

    process_request(b"{}").expect_err("missing rgb");
    process_request(b"not json").expect_err("not json");
    assert_eq!(*recorder.decodes.lock().unwrap(), vec![false, false]);
    assert!(recorder.matches.lock().unwrap().is_empty());

    process_request(br#"{"rgb":[250,215,185]}"#).expect("match");
    assert_eq!(*recorder.decodes.lock().unwrap(), vec![false, false, true]);
    assert_eq!(*recorder.matches.lock().unwrap(), vec![Ok(100)]);

    set_pipeline_metrics(None);
    process_request(br#"{"rgb":[250,215,185]}"#).expect("match");
    assert_eq!(recorder.decodes.lock().unwrap().len(), 3);
}

#[test]
fn decode_latency_includes_json_parsing() {
    let _guard = exclusive_recorder();
    let recorder = Arc::new(Recorder::default());
    set_pipeline_metrics(Some(recorder.clone()));

    let missing_rgb = padded_body(false);
    let broken_json = padded_body(true);
    let parse_missing_rgb = fastest_parse(&missing_rgb);
    let parse_broken_json = fastest_parse(&broken_json);

    process_request(&missing_rgb).expect_err("missing rgb");
    process_request(&broken_json).expect_err("not json");
    set_pipeline_metrics(None);

    assert_eq!(*recorder.decodes.lock().unwrap(), vec![false, false]);
    let latencies = recorder.decode_latencies.lock().unwrap();
    assert!(
        latencies[0] >= parse_missing_rgb / 2,
        "decode of a parsed body took {:?}, parsing alone takes {:?}",
        latencies[0],
        parse_missing_rgb
    );
    assert!(
        latencies[1] >= parse_broken_json / 2,
        "decode of unparseable body took {:?}, parsing alone takes {:?}",
        latencies[1],
        parse_broken_json
    );
}
