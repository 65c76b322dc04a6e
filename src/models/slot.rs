//! Meeting days and time slots.
//!
//! Defines the weekly time model shared by every other module: a fixed
//! six-day week, HHMM-encoded clock times, and the slot overlap predicate
//! that drives conflict detection.
//!
//! # Time Model
//! Times are integers encoding `hour * 100 + minute` (915 = 9:15,
//! 1600 = 16:00). This matches the source catalog's military-time
//! notation and is **not** minutes-since-midnight — any duration
//! arithmetic must go through [`hhmm_to_minutes`] first.
//!
//! # Overlap Convention
//! Overlap comparison is inclusive on both boundaries: a slot ending at
//! 10:00 conflicts with a slot starting at 10:00. Back-to-back classes
//! in different rooms are not considered attendable.

use serde::{Deserialize, Serialize};

/// A weekday on which classes meet.
///
/// Saturday is included; Sunday never carries classes in the source
/// catalog. Slots whose day cannot be determined carry `None` instead
/// (see [`TimeSlot::day`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Day {
    /// All six scheduling days, in week order.
    pub const ALL: [Day; 6] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat];
}

/// One recurring meeting block within a section.
///
/// `day` is `None` when the day could not be determined from source data
/// (e.g. "TBA" rows). Unknown-day slots never participate in overlap
/// checks or per-day aggregation; they are always schedule-compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Meeting day, or `None` if not determinable.
    pub day: Option<Day>,
    /// Start time (HHMM, inclusive).
    pub start: u16,
    /// End time (HHMM, inclusive).
    pub end: u16,
    /// Whether this block meets online rather than on campus.
    pub is_online: bool,
}

impl TimeSlot {
    /// Creates an on-campus slot on a known day.
    pub fn new(day: Day, start: u16, end: u16) -> Self {
        Self {
            day: Some(day),
            start,
            end,
            is_online: false,
        }
    }

    /// Creates an online slot on a known day.
    pub fn online(day: Day, start: u16, end: u16) -> Self {
        Self {
            day: Some(day),
            start,
            end,
            is_online: true,
        }
    }

    /// Creates a slot whose day is not determinable.
    pub fn unknown_day(start: u16, end: u16) -> Self {
        Self {
            day: None,
            start,
            end,
            is_online: false,
        }
    }

    /// Whether two slots conflict in time.
    ///
    /// Returns `false` when the days differ or either day is unknown.
    /// Same-day comparison is inclusive on both boundaries, so slots
    /// that touch exactly (one ends at 1000, the other starts at 1000)
    /// are reported as conflicting.
    pub fn overlaps(&self, other: &Self) -> bool {
        match (self.day, other.day) {
            (Some(a), Some(b)) if a == b => self.start <= other.end && other.start <= self.end,
            _ => false,
        }
    }

    /// Slot duration in minutes.
    pub fn duration_minutes(&self) -> u32 {
        hhmm_to_minutes(self.end).saturating_sub(hhmm_to_minutes(self.start))
    }
}

/// Converts an HHMM time to minutes since midnight.
///
/// 915 → 555, 1600 → 960. The HHMM encoding is positional, so gaps and
/// durations computed directly on raw times are wrong across the hour
/// boundary (1000 - 950 = 50, but the real gap is 10 minutes).
#[inline]
pub fn hhmm_to_minutes(time: u16) -> u32 {
    (time as u32 / 100) * 60 + (time as u32 % 100)
}
