//! Per-day load post-filter.
//!
//! Rejects completed schedules that overload any single day: too many
//! meetings, or too long a run of back-to-back meetings. This has to
//! run after combination because the load on a day only exists once a
//! full schedule is assembled.
//!
//! # Consecutive Runs
//! A day's slots are sorted by start time; two adjacent slots belong to
//! the same run iff the gap between the first's end and the second's
//! start is at most 15 minutes, measured in real minutes (HHMM times
//! are converted first). A larger gap resets the run to 1.

use crate::models::{hhmm_to_minutes, Filter, Schedule, TimeSlot};

/// Keeps only schedules within every day's load limits.
///
/// A schedule is rejected when any day with at least one slot holds
/// more than `max_per_day` slots or a consecutive run longer than
/// `max_consecutive` under that day's effective rule. Idempotent: the
/// survivors pass unchanged on a second application.
pub fn postfilter_schedules(schedules: Vec<Schedule>, filter: &Filter) -> Vec<Schedule> {
    schedules
        .into_iter()
        .filter(|schedule| within_day_limits(schedule, filter))
        .collect()
}

fn within_day_limits(schedule: &Schedule, filter: &Filter) -> bool {
    for (day, mut slots) in schedule.slots_by_day() {
        let rule = filter.rule_for(day);

        if slots.len() as u32 > rule.max_per_day {
            return false;
        }
        // Fewer slots than the run limit can never exceed it.
        if (slots.len() as u32) < rule.max_consecutive {
            continue;
        }

        slots.sort_by_key(|slot| slot.start);
        if longest_run_exceeds(&slots, rule.max_consecutive) {
            return false;
        }
    }
    true
}

/// Whether the slots (sorted by start) contain a run longer than `max`.
fn longest_run_exceeds(slots: &[TimeSlot], max: u32) -> bool {
    let mut run = 1u32;

    for i in 1..slots.len() {
        let prev_end = hhmm_to_minutes(slots[i - 1].end) as i64;
        let curr_start = hhmm_to_minutes(slots[i].start) as i64;

        if curr_start - prev_end <= 15 {
            run += 1;
        } else {
            run = 1;
        }

        if run > max {
            return true;
        }

        // Not enough slots left to push the run over the limit.
        let remaining = (slots.len() - (i + 1)) as u32;
        if remaining + run < max {
            return false;
        }
    }

    false
}
