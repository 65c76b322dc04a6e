//! Generated schedule model.
//!
//! A schedule is one complete, conflict-free selection of exactly one
//! section per required course, in the order the candidate sets were
//! supplied to the generator. Schedules are produced fresh on every
//! generator run and owned by the caller.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Day, Section, TimeSlot};

/// One complete selection of sections, one per required course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Chosen sections, in candidate-set input order.
    pub sections: Vec<Section>,
}

impl Schedule {
    /// Creates an empty schedule (the seed of the builder's working set).
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the schedule holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Course codes of the chosen sections, in input order.
    pub fn course_codes(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.course_code.as_str()).collect()
    }

    /// Groups every known-day slot of every section by weekday.
    ///
    /// Unknown-day slots are skipped. Days with no slots are absent from
    /// the map. Within a day, slots appear in section order.
    pub fn slots_by_day(&self) -> HashMap<Day, Vec<TimeSlot>> {
        let mut by_day: HashMap<Day, Vec<TimeSlot>> = HashMap::new();
        for section in &self.sections {
            for slot in &section.slots {
                if let Some(day) = slot.day {
                    by_day.entry(day).or_default().push(*slot);
                }
            }
        }
        by_day
    }

    /// Whether no two sections in the schedule conflict.
    ///
    /// The builder only ever emits conflict-free schedules; this exists
    /// for invariant checks in tests and debug assertions.
    pub fn is_conflict_free(&self) -> bool {
        for (i, a) in self.sections.iter().enumerate() {
            for b in &self.sections[i + 1..] {
                if a.conflicts_with(b) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Modality;

    fn sample_schedule() -> Schedule {
        Schedule {
            sections: vec![
                Section::new(1, "CSMODEL", "S11")
                    .with_slot(TimeSlot::new(Day::Mon, 900, 1000))
                    .with_slot(TimeSlot::new(Day::Thu, 900, 1000)),
                Section::new(2, "CSADPRG", "S12")
                    .with_slot(TimeSlot::new(Day::Mon, 1015, 1115))
                    .with_slot(TimeSlot::unknown_day(0, 0))
                    .with_modality(Modality::Online),
            ],
        }
    }

    #[test]
    fn test_slots_by_day_skips_unknown() {
        let by_day = sample_schedule().slots_by_day();
        assert_eq!(by_day[&Day::Mon].len(), 2);
        assert_eq!(by_day[&Day::Thu].len(), 1);
        assert!(!by_day.contains_key(&Day::Tue));
        // The unknown-day slot lands nowhere.
        let total: usize = by_day.values().map(Vec::len).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_course_codes_in_order() {
        assert_eq!(sample_schedule().course_codes(), vec!["CSMODEL", "CSADPRG"]);
    }

    #[test]
    fn test_is_conflict_free() {
        assert!(sample_schedule().is_conflict_free());

        let clashing = Schedule {
            sections: vec![
                Section::new(1, "CSMODEL", "S11").with_slot(TimeSlot::new(Day::Mon, 900, 1000)),
                Section::new(2, "CSADPRG", "S12").with_slot(TimeSlot::new(Day::Mon, 930, 1030)),
            ],
        };
        assert!(!clashing.is_conflict_free());
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert!(s.is_conflict_free());
        assert!(s.slots_by_day().is_empty());
    }
}
