//! Application state shared across requests

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use crate::config::AppConfig;

pub struct AppState {
    pub config: AppConfig,
    last_artifact_id: AtomicI64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            last_artifact_id: AtomicI64::new(0),
        }
    }

    /// Millisecond timestamp made strictly monotonic within the process,
    /// so two requests landing in the same millisecond (or a clock step
    /// backwards) still get distinct artifact names.
    pub fn next_artifact_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last_artifact_id.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self.last_artifact_id.compare_exchange(
                last,
                next,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return next,
                Err(current) => last = current,
            }
        }
    }
}
