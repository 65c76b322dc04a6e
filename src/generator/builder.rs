//! Combinatorial schedule builder.
//!
//! Constructs every conflict-free selection of one section per course
//! as an incremental cross product with dead-branch pruning.
//!
//! # Algorithm
//!
//! 1. Seed the working set with the single empty schedule.
//! 2. For each candidate set, extend every partial schedule with every
//!    section that conflicts with nothing already placed.
//! 3. The extensions become the next working set. A partial that admits
//!    no extension simply does not survive the transition — it can
//!    never be completed and must not reappear.
//! 4. When the working set empties, stop: no schedule is possible.
//!
//! Each step produces a fresh working set instead of splicing entries
//! out of a shared list mid-iteration, so pruning is a property of the
//! transition rather than of iteration bookkeeping.
//!
//! # Complexity
//! Worst case O(∏ |sections per course| × courses) candidate checks;
//! memory is bounded by the live partial-schedule set at each step.
//!
//! # Determinism
//! Partial schedules and sections are visited in insertion order, so the
//! output order is reproducible for a given input order. No claim is
//! made about which combination appears first.

use crate::models::{CourseCandidates, Schedule};

/// Builds all conflict-free schedules, one section per candidate set.
///
/// Sections appear in each schedule in candidate-set input order. With
/// no candidate sets at all the result is the single empty schedule
/// (the empty combination); a candidate set with zero sections makes
/// every requirement unsatisfiable and yields no schedules.
pub fn build_schedules(courses: &[CourseCandidates]) -> Vec<Schedule> {
    let mut working = vec![Schedule::new()];

    for course in courses {
        let mut extended = Vec::new();

        for partial in &working {
            for section in &course.sections {
                let clashes = partial
                    .sections
                    .iter()
                    .any(|placed| placed.conflicts_with(section));
                if clashes {
                    continue;
                }

                let mut next = partial.clone();
                next.sections.push(section.clone());
                debug_assert!(next.is_conflict_free());
                extended.push(next);
            }
        }

        if extended.is_empty() {
            // Every branch is dead; no later course can revive one.
            return Vec::new();
        }
        working = extended;
    }

    working
}
