//! Course scheduling domain models.
//!
//! Provides the data types the generator operates on: meeting days and
//! time slots, catalog sections grouped into per-course candidate sets,
//! day-level filter rules, and the generated schedules themselves.
//!
//! All times are HHMM integers (915 = 9:15); see [`hhmm_to_minutes`]
//! for the conversion rule.

mod filter;
mod schedule;
mod section;
mod slot;

pub use filter::{DayRule, Filter};
pub use schedule::Schedule;
pub use section::{CourseCandidates, Modality, Section};
pub use slot::{hhmm_to_minutes, Day, TimeSlot};
