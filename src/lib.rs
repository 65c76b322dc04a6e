//! Course schedule generation engine.
//!
//! Builds every non-conflicting combination of course sections a student
//! could take, then narrows that set by day-level workload rules. The
//! engine is a pure, synchronous computation over immutable input: it
//! performs no I/O, keeps no state between runs, and returns the complete
//! accepted set unranked. Fetching catalog data, persisting selections,
//! and rendering results are the caller's concern.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeSlot`, `Day`, `Section`,
//!   `CourseCandidates`, `Schedule`, `DayRule`, `Filter`
//! - **`generator`**: The pipeline — candidate pre-filter, combinatorial
//!   builder, per-day post-filter, and the `generate_schedules` entry point
//! - **`validation`**: Boundary integrity checks for catalogs and filters
//!
//! # Example
//!
//! ```
//! use coursegen::generator::generate_schedules;
//! use coursegen::models::{CourseCandidates, Day, Filter, Section, TimeSlot};
//!
//! let courses = vec![
//!     CourseCandidates::new("CSMODEL")
//!         .with_section(
//!             Section::new(1, "CSMODEL", "S11")
//!                 .with_slot(TimeSlot::new(Day::Mon, 900, 1000)),
//!         )
//!         .with_section(
//!             Section::new(2, "CSMODEL", "S12")
//!                 .with_slot(TimeSlot::new(Day::Mon, 1015, 1100)),
//!         ),
//!     CourseCandidates::new("CSADPRG").with_section(
//!         Section::new(3, "CSADPRG", "S11")
//!             .with_slot(TimeSlot::new(Day::Mon, 930, 1000)),
//!     ),
//! ];
//!
//! // S11 touches CSADPRG at 10:00 and conflicts; only S12 combines.
//! let schedules = generate_schedules(&courses, None);
//! assert_eq!(schedules.len(), 1);
//! assert_eq!(schedules[0].sections[0].code, 2);
//! ```

pub mod generator;
pub mod models;
pub mod validation;
