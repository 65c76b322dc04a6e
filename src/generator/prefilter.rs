//! Candidate pre-filter.
//!
//! Drops sections that violate a day-level rule before any combination
//! happens, shrinking the combinatorial space the builder has to walk.
//! Operates per section, independent of every other course: candidate
//! sets are never removed, only thinned (possibly to empty, which the
//! builder then treats as an unsatisfiable requirement).

use crate::models::{CourseCandidates, Filter, Modality, Section, TimeSlot};

/// Removes sections whose slots violate their day's effective rule.
///
/// A section survives iff **every** known-day slot passes the rule of
/// its own day: in-person slots need `allow_in_person`, the slot must
/// sit inside the day's time window, and the section's modality must be
/// acceptable on that day. Unknown-day slots always pass.
pub fn prefilter_sections(courses: &[CourseCandidates], filter: &Filter) -> Vec<CourseCandidates> {
    courses
        .iter()
        .map(|course| CourseCandidates {
            course_code: course.course_code.clone(),
            sections: course
                .sections
                .iter()
                .filter(|section| section_passes(section, filter))
                .cloned()
                .collect(),
        })
        .collect()
}

fn section_passes(section: &Section, filter: &Filter) -> bool {
    section
        .slots
        .iter()
        .all(|slot| slot_passes(slot, section.modality, filter))
}

fn slot_passes(slot: &TimeSlot, modality: Modality, filter: &Filter) -> bool {
    let Some(day) = slot.day else {
        // Day not determinable: nothing day-level to check.
        return true;
    };
    let rule = filter.rule_for(day);

    if !slot.is_online && !rule.allow_in_person {
        return false;
    }
    if slot.start < rule.window_start || slot.end > rule.window_end {
        return false;
    }
    rule.modalities.contains(&modality)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, DayRule};

    fn course(sections: Vec<Section>) -> CourseCandidates {
        CourseCandidates {
            course_code: "CSMODEL".into(),
            sections,
        }
    }

    fn morning_lecture(code: u32, day: Day) -> Section {
        Section::new(code, "CSMODEL", "S11").with_slot(TimeSlot::new(day, 900, 1030))
    }

    #[test]
    fn test_time_window_rejects() {
        let input = vec![course(vec![
            morning_lecture(1, Day::Mon),
            Section::new(2, "CSMODEL", "S12").with_slot(TimeSlot::new(Day::Mon, 1800, 1930)),
        ])];
        let filter = Filter::new().with_general(DayRule::new().with_window(730, 1700));

        let out = prefilter_sections(&input, &filter);
        assert_eq!(out[0].sections.len(), 1);
        assert_eq!(out[0].sections[0].code, 1);
    }

    #[test]
    fn test_boundary_times_pass() {
        // Window edges are inclusive.
        let input = vec![course(vec![
            Section::new(1, "CSMODEL", "S11").with_slot(TimeSlot::new(Day::Mon, 730, 1700)),
        ])];
        let filter = Filter::new().with_general(DayRule::new().with_window(730, 1700));

        assert_eq!(prefilter_sections(&input, &filter)[0].sections.len(), 1);
    }

    #[test]
    fn test_modality_rejects() {
        let input = vec![course(vec![
            morning_lecture(1, Day::Mon).with_modality(Modality::Online),
            morning_lecture(2, Day::Mon).with_modality(Modality::InPerson),
        ])];
        let filter =
            Filter::new().with_general(DayRule::new().with_modalities(vec![Modality::Online]));

        // Section 2 is in-person, and its Monday slot is an on-campus
        // slot; it fails the modality list.
        let out = prefilter_sections(&input, &filter);
        assert_eq!(out[0].sections.len(), 1);
        assert_eq!(out[0].sections[0].code, 1);
    }

    #[test]
    fn test_in_person_disallowed_on_day() {
        let input = vec![course(vec![
            morning_lecture(1, Day::Wed),
            Section::new(2, "CSMODEL", "S12").with_slot(TimeSlot::online(Day::Wed, 900, 1030)),
        ])];
        let filter = Filter::new().with_override(Day::Wed, DayRule::new().with_in_person(false));

        // Only the online-meeting section survives Wednesday.
        let out = prefilter_sections(&input, &filter);
        assert_eq!(out[0].sections.len(), 1);
        assert_eq!(out[0].sections[0].code, 2);
    }

    #[test]
    fn test_override_applies_only_to_its_day() {
        let input = vec![course(vec![
            morning_lecture(1, Day::Mon),
            morning_lecture(2, Day::Sat),
        ])];
        let filter = Filter::new().with_override(Day::Sat, DayRule::new().with_window(1300, 1700));

        let out = prefilter_sections(&input, &filter);
        assert_eq!(out[0].sections.len(), 1);
        assert_eq!(out[0].sections[0].code, 1);
    }

    #[test]
    fn test_unknown_day_slot_passes_through() {
        let input = vec![course(vec![
            Section::new(1, "NSTP", "S11").with_slot(TimeSlot::unknown_day(0, 0)),
        ])];
        // A window no real slot could satisfy.
        let filter = Filter::new().with_general(DayRule::new().with_window(100, 200));

        assert_eq!(prefilter_sections(&input, &filter)[0].sections.len(), 1);
    }

    #[test]
    fn test_set_may_become_empty_but_is_kept() {
        let input = vec![
            course(vec![morning_lecture(1, Day::Mon)]),
            CourseCandidates {
                course_code: "CSADPRG".into(),
                sections: vec![Section::new(2, "CSADPRG", "S12")
                    .with_slot(TimeSlot::new(Day::Mon, 1800, 1930))],
            },
        ];
        let filter = Filter::new().with_general(DayRule::new().with_window(730, 1700));

        let out = prefilter_sections(&input, &filter);
        assert_eq!(out.len(), 2);
        assert!(out[1].sections.is_empty());
    }

    #[test]
    fn test_monotonic_shrink() {
        let input = vec![course(vec![
            morning_lecture(1, Day::Mon),
            morning_lecture(2, Day::Tue),
            Section::new(3, "CSMODEL", "S13").with_slot(TimeSlot::new(Day::Fri, 1800, 2100)),
        ])];
        let filter = Filter::new().with_general(DayRule::new().with_window(700, 1900));

        let out = prefilter_sections(&input, &filter);
        assert!(out[0].sections.len() <= input[0].sections.len());
    }
}
