use std::fmt;
use std::ops::{Add, Sub};

use crate::errors::TimestampError;

// @module: Transcript timestamp parsing and SRT time formatting

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;

/// Absolute time offset from zero, in whole milliseconds.
///
/// Stored as a signed count so that an hour correction applied to a
/// timestamp below one hour, or a negative interval between two
/// out-of-order timestamps, stays representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOffset(i64);

impl TimeOffset {
    pub const ZERO: TimeOffset = TimeOffset(0);

    pub const fn from_millis(ms: i64) -> Self {
        TimeOffset(ms)
    }

    /// Flattens an `{hours, minutes, seconds, milliseconds}` tuple, `None` on overflow
    pub fn from_hms_millis(hours: i64, minutes: i64, seconds: i64, millis: i64) -> Option<Self> {
        let total = hours
            .checked_mul(MS_PER_HOUR)?
            .checked_add(minutes.checked_mul(MS_PER_MINUTE)?)?
            .checked_add(seconds.checked_mul(MS_PER_SECOND)?)?
            .checked_add(millis)?;
        Some(TimeOffset(total))
    }

    pub const fn as_millis(&self) -> i64 {
        self.0
    }
}

impl Add for TimeOffset {
    type Output = TimeOffset;

    fn add(self, rhs: TimeOffset) -> TimeOffset {
        TimeOffset(self.0 + rhs.0)
    }
}

impl Sub for TimeOffset {
    type Output = TimeOffset;

    fn sub(self, rhs: TimeOffset) -> TimeOffset {
        TimeOffset(self.0 - rhs.0)
    }
}

impl fmt::Display for TimeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_srt_time(*self, 0))
    }
}

/// Parse a transcript timestamp token into an absolute offset.
///
/// Accepted shapes are `mm:ss`, `hh:mm:ss` and `hh:mm:ss:ff`, where `ff` is a
/// frame number converted to milliseconds at the given frame rate (truncated).
/// With `apply_hour_correction` the hour group is reduced by exactly one.
pub fn parse_time(token: &str, apply_hour_correction: bool, fps: f64) -> Result<TimeOffset, TimestampError> {
    let invalid = || TimestampError::InvalidTimestampFormat(token.to_string());

    let parts = token
        .trim()
        .split(':')
        .map(|part| part.trim().parse::<i64>())
        .collect::<Result<Vec<i64>, _>>()
        .map_err(|_| invalid())?;

    let (mut hours, minutes, seconds, millis) = match parts.as_slice() {
        [m, s] => (0, *m, *s, 0),
        [h, m, s] => (*h, *m, *s, 0),
        [h, m, s, frames] => (*h, *m, *s, frames_to_millis(*frames, fps)),
        _ => return Err(invalid()),
    };

    if apply_hour_correction {
        hours = hours.checked_sub(1).ok_or_else(invalid)?;
    }

    TimeOffset::from_hms_millis(hours, minutes, seconds, millis).ok_or_else(invalid)
}

/// Convert a frame index within a second to milliseconds
fn frames_to_millis(frames: i64, fps: f64) -> i64 {
    ((frames as f64 / fps) * 1000.0) as i64
}

/// Format an offset as `HH:MM:SS,mmm`, adding `hour_offset` to the hour field.
///
/// The decomposition uses floor division, so a negative total yields a
/// negative hour with positive minute, second and millisecond fields.
pub fn format_srt_time(offset: TimeOffset, hour_offset: i64) -> String {
    let total_ms = offset.as_millis();
    let hours = total_ms.div_euclid(MS_PER_HOUR) + hour_offset;
    let minutes = total_ms.rem_euclid(MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = total_ms.rem_euclid(MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = total_ms.rem_euclid(MS_PER_SECOND);

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}
