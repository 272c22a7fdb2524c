use chrono::{DateTime, NaiveDateTime, Utc};

/// Wall clock of `epoch` in a city `offset_secs` east of UTC.
///
/// The instant is shifted by the offset and read back as UTC, so the result
/// never depends on the zone of the machine doing the rendering.
pub fn shifted(epoch: i64, offset_secs: i64) -> Option<NaiveDateTime> {
    let local = epoch.checked_add(offset_secs)?;
    DateTime::from_timestamp(local, 0).map(|dt| dt.naive_utc())
}

/// Placeholder for a clock time that cannot be shown.
pub const NO_CLOCK: &str = "--:--";

/// `HH:MM`, zero padded.
pub fn clock(epoch: i64, offset_secs: i64) -> String {
    shifted(epoch, offset_secs)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| NO_CLOCK.to_string())
}

/// Like [`clock`], for sun times the provider may omit.
pub fn clock_opt(epoch: Option<i64>, offset_secs: i64) -> String {
    epoch.map_or_else(|| NO_CLOCK.to_string(), |epoch| clock(epoch, offset_secs))
}

/// Long English weekday name, e.g. `Wednesday`.
pub fn weekday(epoch: i64, offset_secs: i64) -> String {
    shifted(epoch, offset_secs)
        .map(|dt| dt.format("%A").to_string())
        .unwrap_or_default()
}

/// Current date and time in the city, e.g. `Tuesday 14 Nov 2023 at 22:13`.
pub fn city_now(now: DateTime<Utc>, offset_secs: i64) -> String {
    shifted(now.timestamp(), offset_secs)
        .map(|dt| dt.format("%A %-d %b %Y at %H:%M").to_string())
        .unwrap_or_default()
}

/// Alert window bound, e.g. `15/11/2023, 06:33:20`.
pub fn alert_time(epoch: i64, offset_secs: i64) -> String {
    shifted(epoch, offset_secs)
        .map(|dt| dt.format("%d/%m/%Y, %H:%M:%S").to_string())
        .unwrap_or_default()
}
