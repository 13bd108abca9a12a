pub mod builders;

use std::sync::Once;

use serde_json::Value;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// The `id` member of each payload, in order.
///
/// Panics if a payload has no string `id`; only meant for task payloads.
pub fn ids(payloads: &[Value]) -> Vec<String> {
    payloads
        .iter()
        .map(|p| {
            p.get(taskplan::dag::task::ID)
                .and_then(Value::as_str)
                .expect("payload without string id")
                .to_string()
        })
        .collect()
}

/// Index of `id` in `order`; panics if absent.
pub fn position(order: &[String], id: &str) -> usize {
    order
        .iter()
        .position(|x| x == id)
        .unwrap_or_else(|| panic!("task {id} missing from order {order:?}"))
}
