//! Per-provider fixed-window rate limiting.
//!
//! Every dispatch consults [`RateLimiter::try_acquire`] before a network
//! call is made. Rejection is immediate and synchronous - there is no
//! queuing and no blocking, and a rejected attempt does not touch the
//! window state, so it costs nothing toward future windows.
//!
//! Time is read through [`tokio::time::Instant`] so tests can drive the
//! window with `tokio::time::{pause, advance}`.

use crate::logging::log_debug;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// Length of one rate window.
const WINDOW: Duration = Duration::from_secs(60);

/// Maximum accepted calls per provider per window.
const MAX_CALLS_PER_WINDOW: u32 = 10;

/// Mutable counter state for one provider.
#[derive(Debug, Clone, Copy)]
struct WindowState {
    window_start: Instant,
    calls_in_window: u32,
}

/// Fixed-window call counter, scoped per provider id.
///
/// Providers never contend with each other; the mutex only serializes the
/// check-and-increment so concurrent calls to the same provider within one
/// batch observe a consistent count. The lock is never held across an
/// await point.
#[derive(Debug, Default)]
pub struct RateLimiter {
    windows: Mutex<HashMap<String, WindowState>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to reserve one call slot for the given provider.
    ///
    /// Returns `true` and increments the counter when the window has
    /// capacity. Returns `false` without mutating anything when the
    /// window is full. A window older than [`WINDOW`] is reset before
    /// the new call is evaluated.
    pub fn try_acquire(&self, provider_id: &str) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());

        let state = windows
            .entry(provider_id.to_string())
            .or_insert(WindowState {
                window_start: now,
                calls_in_window: 0,
            });

        // Stale window: start a fresh one before evaluating this call.
        if now.duration_since(state.window_start) > WINDOW {
            state.window_start = now;
            state.calls_in_window = 0;
        }

        if state.calls_in_window >= MAX_CALLS_PER_WINDOW {
            log_debug!(
                provider = %provider_id,
                calls_in_window = state.calls_in_window,
                "Rate limit window full, rejecting call"
            );
            return false;
        }

        state.calls_in_window += 1;
        log_debug!(
            provider = %provider_id,
            calls_in_window = state.calls_in_window,
            "Rate limit slot acquired"
        );
        true
    }
}
