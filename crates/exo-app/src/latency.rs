use std::thread;
use std::time::Duration;

use tracing::trace;

/// Runs `call` after sleeping for `latency`, imitating a remote API.
///
/// A zero latency calls straight through.
pub fn simulated_fetch<T>(latency: Duration, call: impl FnOnce() -> T) -> T {
    if !latency.is_zero() {
        trace!(latency_ms = latency.as_millis() as u64, "simulating fetch latency");
        thread::sleep(latency);
    }
    call()
}
