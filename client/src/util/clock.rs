//! Wall-clock labels for message bubbles.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Format an hour/minute pair as `HH:MM`.
pub fn format_clock(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

/// Current local time as `HH:MM`.
///
/// In the browser this reads the user's local clock. Off-browser (SSR and
/// tests) it falls back to UTC.
pub fn local_time_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format_clock(now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        utc_label(secs)
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
fn utc_label(epoch_secs: u64) -> String {
    let minutes_of_day = u32::try_from((epoch_secs / 60) % (24 * 60)).unwrap_or(0);
    format_clock(minutes_of_day / 60, minutes_of_day % 60)
}
