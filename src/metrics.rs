use std::sync::atomic::{AtomicU64, Ordering};
use serde::Serialize;

#[derive(Debug, Default)]
pub struct Metrics {
    pub root_requests: AtomicU64,
    pub readiness_probes: AtomicU64,
    pub liveness_probes: AtomicU64,
    pub total_requests: AtomicU64,
}

/// Which counter a served request lands in besides `total_requests`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Readiness,
    Liveness,
    Other
}

impl Route {

    pub fn from_path(path: &str) -> Self {

        match path {
            "/" => Route::Root,
            "/healthz" => Route::Readiness,
            "/livez" => Route::Liveness,
            _ => Route::Other
        }

    }

}

impl Metrics {
    pub fn new() -> Self {

        Self::default()

    }

    pub fn record(&self, route: Route) {

        match route {
            Route::Root => { self.root_requests.fetch_add(1, Ordering::Relaxed); }
            Route::Readiness => { self.readiness_probes.fetch_add(1, Ordering::Relaxed); }
            Route::Liveness => { self.liveness_probes.fetch_add(1, Ordering::Relaxed); }
            Route::Other => {}
        }
        self.total_requests.fetch_add(1, Ordering::Relaxed);

    }

    pub fn snapshot(&self) -> MetricsSnapshot {

        MetricsSnapshot {
            root_requests: self.root_requests.load(Ordering::Relaxed),
            readiness_probes: self.readiness_probes.load(Ordering::Relaxed),
            liveness_probes: self.liveness_probes.load(Ordering::Relaxed),
            total_requests: self.total_requests.load(Ordering::Relaxed),
        }

    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub root_requests: u64,
    pub readiness_probes: u64,
    pub liveness_probes: u64,
    pub total_requests: u64,
}
