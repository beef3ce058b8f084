//! Request metrics
//!
//! Emitted through the `metrics` facade; the library installs no recorder,
//! so these are no-ops unless the host application installs one.
//!
//! - `workos_requests_total` (counter): labels `method`, `status`
//! - `workos_request_duration_seconds` (histogram): label `method`
//! - `workos_transport_errors_total` (counter): label `method`

/// Record a completed request.
pub fn record_request(method: &'static str, status: u16, duration_secs: f64) {
    metrics::counter!("workos_requests_total", "method" => method, "status" => status.to_string())
        .increment(1);
    metrics::histogram!("workos_request_duration_seconds", "method" => method)
        .record(duration_secs);
}

/// Record a request that never produced a response (DNS, TLS, timeout).
pub fn record_transport_error(method: &'static str) {
    metrics::counter!("workos_transport_errors_total", "method" => method).increment(1);
}
