use std::time::Duration;

use dioxus::prelude::*;

use super::sleep;

pub fn unix_now() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default()
}

/// Current unix time, refreshed every `period`.
pub fn use_clock(period: Duration) -> Signal<u64> {
    let mut now = use_signal(unix_now);

    use_future(move || async move {
        loop {
            sleep(period).await;
            now.set(unix_now());
        }
    });

    now
}
