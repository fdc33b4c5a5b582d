//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::sync::Once;

use nucleus_types::{Array, Value};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static TRACING: Once = Once::new();

/// Route `tracing` output to the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_test_writer())
            .with(EnvFilter::from_default_env())
            .try_init();
    });
}

/// Keyed input from a JSON object literal.
pub fn attributes(json: serde_json::Value) -> Array {
    match Value::from(json) {
        Value::Array(array) => array,
        other => panic!("expected a JSON object, got {other:?}"),
    }
}
