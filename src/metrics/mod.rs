//! Prometheus metrics exposed on `/metrics`

use prometheus::{
    Encoder, Gauge, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts,
    Registry, TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: Gauge,
    pub commands_total: IntCounterVec,
    pub price_fetch_failures_total: IntCounter,
    pub profile_sessions_active: IntGauge,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::with_opts(Opts::new("http_requests_total", "Total HTTP requests"))?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight = Gauge::with_opts(Opts::new(
            "http_requests_in_flight",
            "HTTP requests currently being served",
        ))?;
        let commands_total = IntCounterVec::new(
            Opts::new("commands_total", "Slash commands received"),
            &["command"],
        )?;
        let price_fetch_failures_total = IntCounter::with_opts(Opts::new(
            "price_fetch_failures_total",
            "Price fetches that ended on the error path",
        ))?;
        let profile_sessions_active = IntGauge::with_opts(Opts::new(
            "profile_sessions_active",
            "Profile dialogs waiting for user input",
        ))?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(commands_total.clone()))?;
        registry.register(Box::new(price_fetch_failures_total.clone()))?;
        registry.register(Box::new(profile_sessions_active.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            commands_total,
            price_fetch_failures_total,
            profile_sessions_active,
        })
    }

    /// Render all metrics in the Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
