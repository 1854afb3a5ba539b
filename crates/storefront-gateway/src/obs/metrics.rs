//! Request metrics for the storefront.
//!
//! Two instruments on a private `prometheus::Registry`:
//! - `requests_total`: unlabeled counter, one per instrumented request
//! - `request_latency_seconds`: handler latency, default buckets
//!
//! Each `StoreMetrics` owns its registry, so tests can build isolated
//! instances instead of sharing the process-global default registry.

use prometheus::{
    Encoder, Histogram, HistogramOpts, HistogramTimer, IntCounter, Registry, TextEncoder,
};

/// Content type of the text exposition format.
pub const EXPOSITION_CONTENT_TYPE: &str = prometheus::TEXT_FORMAT;

pub struct StoreMetrics {
    registry: Registry,
    requests: IntCounter,
    latency: Histogram,
}

impl StoreMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests = IntCounter::new("requests_total", "Total requests")?;
        let latency = Histogram::with_opts(HistogramOpts::new(
            "request_latency_seconds",
            "Request latency in seconds",
        ))?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(latency.clone()))?;

        Ok(Self { registry, requests, latency })
    }

    pub fn requests_total(&self) -> u64 {
        self.requests.get()
    }

    pub fn latency_samples(&self) -> u64 {
        self.latency.get_sample_count()
    }

    /// Open a timing scope for one request.
    ///
    /// Dropping the returned guard counts the request and records its
    /// latency, including when the handler unwinds.
    pub fn start_request(&self) -> RequestScope {
        RequestScope {
            timer: Some(self.latency.start_timer()),
            requests: self.requests.clone(),
        }
    }

    /// Render the registry in Prometheus text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(format!("non-utf8 exposition: {e}")))
    }
}

/// Guard returned by [`StoreMetrics::start_request`].
#[must_use = "dropping the scope immediately records a zero-length request"]
pub struct RequestScope {
    timer: Option<HistogramTimer>,
    requests: IntCounter,
}

impl RequestScope {
    /// Close the scope without counting or timing the request.
    pub fn discard(mut self) {
        if let Some(timer) = self.timer.take() {
            timer.stop_and_discard();
        }
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.requests.inc();
            timer.observe_duration();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_counts_and_times_on_drop() {
        let m = StoreMetrics::new().unwrap();
        {
            let _scope = m.start_request();
        }
        let _ = m.start_request();
        assert_eq!(m.requests_total(), 2);
        assert_eq!(m.latency_samples(), 2);
    }

    #[test]
    fn discarded_scope_records_nothing() {
        let m = StoreMetrics::new().unwrap();
        m.start_request().discard();
        assert_eq!(m.requests_total(), 0);
        assert_eq!(m.latency_samples(), 0);
    }

    #[test]
    fn scope_records_on_unwind() {
        let m = StoreMetrics::new().unwrap();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _scope = m.start_request();
            panic!("handler blew up");
        }));
        assert!(result.is_err());
        assert_eq!(m.requests_total(), 1);
        assert_eq!(m.latency_samples(), 1);
    }

    #[test]
    fn render_uses_exposition_names() {
        let m = StoreMetrics::new().unwrap();
        drop(m.start_request());
        let text = m.render().unwrap();
        assert!(text.contains("# TYPE requests_total counter"));
        assert!(text.lines().any(|l| l == "requests_total 1"));
        assert!(text.contains("# TYPE request_latency_seconds histogram"));
        assert!(text.contains("request_latency_seconds_bucket{le=\"+Inf\"} 1"));
    }
}
