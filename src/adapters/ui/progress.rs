//! Spinner shown while the "calculation" runs.
//!
//! The estimate itself is instant; the delay only paces the reveal.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::debug;

const TICK: Duration = Duration::from_millis(80);

/// Show a spinner with `message` for `delay`, then clear it. No-op for a zero delay.
pub async fn simulate_loading(delay: Duration, message: &str) {
    if delay.is_zero() {
        return;
    }
    debug!(delay_ms = delay.as_millis() as u64, "simulating calculation delay");
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.magenta} {msg}") {
        pb.set_style(style.tick_chars("♡♥❤♥♡ "));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(TICK);
    tokio::time::sleep(delay).await;
    pb.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let start = std::time::Instant::now();
        simulate_loading(Duration::ZERO, "calculating").await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_waits_for_delay() {
        let start = std::time::Instant::now();
        simulate_loading(Duration::from_millis(120), "calculating").await;
        assert!(start.elapsed() >= Duration::from_millis(120));
    }
}
