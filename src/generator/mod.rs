//! Schedule generation pipeline.
//!
//! Three stages around the combinatorial core:
//!
//! 1. **Pre-filter** ([`prefilter_sections`]): drop sections that break
//!    a day-level rule before any combination happens.
//! 2. **Builder** ([`build_schedules`]): enumerate every conflict-free
//!    selection of one section per course.
//! 3. **Post-filter** ([`postfilter_schedules`]): drop completed
//!    schedules that overload a day.
//!
//! [`generate_schedules`] runs the full pipeline. Without a filter the
//! pre- and post-stages are skipped entirely and the raw combinatorial
//! result is returned.
//!
//! The pipeline is pure and holds no state between invocations; callers
//! own the result. Result-count policy (reporting zero matches, capping
//! oversized result sets) belongs to the caller, not the engine.

mod builder;
mod postfilter;
mod prefilter;

pub use builder::build_schedules;
pub use postfilter::postfilter_schedules;
pub use prefilter::prefilter_sections;

use crate::models::{CourseCandidates, Filter, Schedule};

/// Generates every schedule satisfying the hard constraints.
///
/// With a filter: pre-filter → build → post-filter. Without one, the
/// builder's raw output. Schedules are returned unranked; the order is
/// deterministic for a given input order but carries no meaning.
pub fn generate_schedules(
    courses: &[CourseCandidates],
    filter: Option<&Filter>,
) -> Vec<Schedule> {
    match filter {
        None => build_schedules(courses),
        Some(filter) => {
            let narrowed = prefilter_sections(courses, filter);
            let built = build_schedules(&narrowed);
            postfilter_schedules(built, filter)
        }
    }
}
