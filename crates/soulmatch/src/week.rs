//! Weekly partition keys for match quotas.
//!
//! A week starts on Monday at local midnight. The key is that instant rendered
//! in UTC with millisecond precision, e.g. `2026-10-11T16:00:00.000Z` for a
//! week starting in UTC+08:00.

use chrono::{
    DateTime, Datelike, Duration, Local, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc,
};

const GAP_PROBE_STEP_MINUTES: i64 = 15;
const GAP_PROBE_LIMIT: i64 = 96;

/// Start of the current local week as a partition key.
pub fn week_start() -> String {
    week_start_key_at(&Local::now())
}

/// Partition key for the week containing `now`, judged in `now`'s time zone.
pub fn week_start_key_at<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format_week_key(&week_start_at(now))
}

/// Monday 00:00 of the week containing `now`, as a UTC instant.
///
/// Sunday belongs to the week that began six days earlier.
pub fn week_start_at<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let days_since_monday = i64::from(now.weekday().num_days_from_monday());
    let monday = now.date_naive() - Duration::days(days_since_monday);
    local_midnight_in_utc(&now.timezone(), monday.and_time(NaiveTime::MIN))
}

pub fn format_week_key(start: &DateTime<Utc>) -> String {
    start.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Ambiguous midnights resolve to the earlier instant; a midnight skipped by
/// a DST jump resolves to the first local time that exists after it.
fn local_midnight_in_utc<Tz: TimeZone>(tz: &Tz, midnight: NaiveDateTime) -> DateTime<Utc> {
    (0..=GAP_PROBE_LIMIT)
        .map(|step| midnight + Duration::minutes(step * GAP_PROBE_STEP_MINUTES))
        .find_map(|candidate| tz.from_local_datetime(&candidate).earliest())
        .map(|resolved| resolved.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}
