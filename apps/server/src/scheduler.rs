//! Background fetch jobs.
//!
//! Static data is refreshed once a day at 06:05 UTC, market data every
//! 15 minutes. Both loops stop when the shutdown token is cancelled.

use std::sync::Arc;

use bond_recommender_core::utils::time_utils::exchange_today;
use chrono::{DateTime, Days, NaiveTime, Utc};
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::main_lib::AppState;

/// Daily static fetch time, UTC
const STATIC_FETCH_HOUR: u32 = 6;
const STATIC_FETCH_MINUTE: u32 = 5;

/// Market data refresh interval: 15 minutes
const MARKET_DATA_INTERVAL_SECS: u64 = 15 * 60;

/// Starts both background jobs.
pub fn start_fetch_scheduler(state: Arc<AppState>) {
    tokio::spawn(run_static_schedule(state.clone()));
    tokio::spawn(run_market_data_schedule(state));
}

/// Runs the initial fetch for an empty database in the background.
pub fn spawn_initial_fetch(state: Arc<AppState>) {
    tokio::spawn(async move {
        if let Err(e) = state.fetch_service.init(exchange_today()).await {
            warn!("Initial fetch failed: {}", e);
        }
    });
}

/// Next `hh:mm` UTC strictly after `now`.
fn next_daily_run(now: DateTime<Utc>, hour: u32, minute: u32) -> DateTime<Utc> {
    let at = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
    let today = now.date_naive().and_time(at).and_utc();
    if today > now {
        today
    } else {
        today + Days::new(1)
    }
}

async fn run_static_schedule(state: Arc<AppState>) {
    info!(
        "Static data scheduler started (daily at {:02}:{:02} UTC)",
        STATIC_FETCH_HOUR, STATIC_FETCH_MINUTE
    );
    loop {
        let now = Utc::now();
        let next = next_daily_run(now, STATIC_FETCH_HOUR, STATIC_FETCH_MINUTE);
        let wait = (next - now).to_std().unwrap_or_default();
        debug!("Next static fetch at {}", next);

        tokio::select! {
            _ = state.shutdown.cancelled() => break,
            _ = tokio::time::sleep(wait) => {}
        }

        match state.fetch_service.fetch_static_data(exchange_today()).await {
            Ok(stats) => info!(
                "Scheduled static fetch completed: {} new bond(s)",
                stats.bonds.new_bonds
            ),
            Err(e) => warn!("Scheduled static fetch failed: {}", e),
        }
    }
    info!("Static data scheduler stopped");
}

async fn run_market_data_schedule(state: Arc<AppState>) {
    info!("Market data scheduler started (15-minute interval)");
    let mut ticker = interval(Duration::from_secs(MARKET_DATA_INTERVAL_SECS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; the startup fetch covers it.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = state.shutdown.cancelled() => break,
            _ = ticker.tick() => {}
        }

        match state.fetch_service.fetch_market_data(exchange_today()).await {
            Ok(Some(stats)) => info!(
                "Scheduled market data fetch completed: {} updated, {} skipped",
                stats.updated, stats.skipped
            ),
            Ok(None) => debug!("Scheduled market data fetch skipped: another fetch is running"),
            Err(e) => warn!("Scheduled market data fetch failed: {}", e),
        }
    }
    info!("Market data scheduler stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_next_daily_run() {
        let before = Utc.with_ymd_and_hms(2024, 3, 1, 5, 0, 0).unwrap();
        assert_eq!(
            next_daily_run(before, 6, 5),
            Utc.with_ymd_and_hms(2024, 3, 1, 6, 5, 0).unwrap()
        );

        let exactly = Utc.with_ymd_and_hms(2024, 3, 1, 6, 5, 0).unwrap();
        assert_eq!(
            next_daily_run(exactly, 6, 5),
            Utc.with_ymd_and_hms(2024, 3, 2, 6, 5, 0).unwrap()
        );

        let month_end = Utc.with_ymd_and_hms(2024, 2, 29, 23, 0, 0).unwrap();
        assert_eq!(
            next_daily_run(month_end, 6, 5),
            Utc.with_ymd_and_hms(2024, 3, 1, 6, 5, 0).unwrap()
        );
    }
}
