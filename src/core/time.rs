//! Time representation shared by the timing table and the provider codec.
//! Internally everything is nanoseconds (i64); the video provider speaks
//! floating-point seconds, so conversion happens at the wire boundary.

/// Time in nanoseconds from the start of the video
pub type Time = i64;

/// Time constants for conversions
pub mod constants {
    use super::Time;

    pub const NANOS_PER_SECOND: Time = 1_000_000_000;
    pub const NANOS_PER_MILLI: Time = 1_000_000;
}

/// Convert seconds (f64) to nanoseconds (i64)
#[inline]
pub fn from_seconds(seconds: f64) -> Time {
    (seconds * constants::NANOS_PER_SECOND as f64).round() as Time
}

/// Convert nanoseconds (i64) to seconds (f64)
#[inline]
pub fn to_seconds(nanos: Time) -> f64 {
    nanos as f64 / constants::NANOS_PER_SECOND as f64
}

/// Convert nanoseconds to milliseconds
#[inline]
pub fn to_millis(nanos: Time) -> i64 {
    nanos / constants::NANOS_PER_MILLI
}

/// Checked conversion for values coming from outside (step metadata, provider).
///
/// Rejects NaN, infinities and negative values.
pub fn seconds_checked(seconds: f64) -> Option<Time> {
    if seconds.is_finite() && seconds >= 0.0 {
        Some(from_seconds(seconds))
    } else {
        None
    }
}

/// Parse a declared time such as `"12.5"` into nanoseconds.
pub fn parse_seconds(raw: &str) -> Option<Time> {
    raw.trim().parse::<f64>().ok().and_then(seconds_checked)
}

/// Time zero constant
pub const ZERO: Time = 0;

/// Format time as HH:MM:SS.mmm
pub fn format_time(nanos: Time) -> String {
    let total_millis = to_millis(nanos.max(0));
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis % 3_600_000) / 60_000;
    let seconds = (total_millis % 60_000) / 1000;
    let millis = total_millis % 1000;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}
