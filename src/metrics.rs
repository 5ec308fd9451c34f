//! Prometheus metrics for request tracking and upstream latency.
//!
//! Instrument names and tags are fixed for dashboard compatibility:
//! - `sms_requests_total` (counter): POST requests received
//! - `sms_queue_size` (gauge): classification calls currently in flight
//! - `sms_classification_duration_seconds` (histogram): upstream latency

use std::time::Instant;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// SMS requests counter metric name.
pub const METRIC_SMS_REQUESTS: &str = "sms_requests_total";
/// In-flight classification gauge metric name.
pub const METRIC_QUEUE_SIZE: &str = "sms_queue_size";
/// Classification latency histogram metric name.
pub const METRIC_CLASSIFICATION_DURATION: &str = "sms_classification_duration_seconds";

/// Initialize all metric descriptions.
/// Call this once at startup, after the recorder is installed.
pub fn init_metrics() {
    describe_counter!(METRIC_SMS_REQUESTS, "Total SMS classification requests");
    describe_gauge!(METRIC_QUEUE_SIZE, "Messages in processing queue");
    describe_histogram!(METRIC_CLASSIFICATION_DURATION, "Time to classify SMS");

    debug!("Metrics initialized");
}

/// Increment the SMS request counter.
pub fn inc_sms_requests() {
    counter!(METRIC_SMS_REQUESTS, "endpoint" => "/sms").increment(1);
}

/// Record the duration of one upstream classification call.
pub fn record_classification_duration(start: Instant) {
    histogram!(METRIC_CLASSIFICATION_DURATION, "model_version" => "v1")
        .record(start.elapsed().as_secs_f64());
}

/// RAII guard for the in-flight gauge.
///
/// Increments `sms_queue_size` on creation and decrements it on drop, so the
/// release runs on every exit path of the classification handler.
pub struct InFlightGuard {
    _private: (),
}

impl InFlightGuard {
    /// Enter the in-flight window.
    pub fn enter() -> Self {
        gauge!(METRIC_QUEUE_SIZE, "priority" => "normal").increment(1.0);
        Self { _private: () }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        gauge!(METRIC_QUEUE_SIZE, "priority" => "normal").decrement(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn guard_survives_early_scope_exit() {
        // No recorder installed here, so the gauge calls are no-ops; this
        // checks the guard can be created and dropped on an error path.
        fn failing_call() -> Result<(), &'static str> {
            let _guard = InFlightGuard::enter();
            Err("boom")
        }

        assert!(failing_call().is_err());
    }

    #[test]
    fn duration_recording_accepts_elapsed_time() {
        let start = Instant::now();
        sleep(Duration::from_millis(5));
        record_classification_duration(start);
    }
}
