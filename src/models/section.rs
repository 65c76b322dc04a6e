//! Course sections and per-course candidate sets.
//!
//! A [`Section`] is one schedulable offering of a course: a specific
//! time/instructor/room combination pulled from the enrollment catalog.
//! A [`CourseCandidates`] groups every section a student could pick for
//! one course requirement; the generator chooses exactly one section
//! from each group.
//!
//! Sections are immutable once produced by the catalog collaborator —
//! the engine only reads and clones them.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// Delivery modality of a section, as advertised by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    /// Fully face-to-face.
    InPerson,
    /// Mix of on-campus and online meetings.
    Hybrid,
    /// Fully online.
    Online,
    /// Mostly online with occasional on-campus meetings.
    PredominantlyOnline,
    /// Modality not yet finalized by the department.
    Tentative,
}

impl Modality {
    /// All modalities. Useful as the permissive default for filters.
    pub const ALL: [Modality; 5] = [
        Modality::InPerson,
        Modality::Hybrid,
        Modality::Online,
        Modality::PredominantlyOnline,
        Modality::Tentative,
    ];
}

/// One offering of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Catalog registration code, unique across the catalog.
    pub code: u32,
    /// Course this section belongs to (e.g. "CSMODEL").
    pub course_code: String,
    /// Section label (e.g. "S11").
    pub label: String,
    /// Assigned instructor. May be empty when unassigned.
    pub instructor: String,
    /// Weekly meeting blocks.
    pub slots: Vec<TimeSlot>,
    /// Delivery modality.
    pub modality: Modality,
    /// Students currently enrolled.
    pub enrolled: u32,
    /// Enrollment cap.
    pub capacity: u32,
    /// Assigned rooms, parallel to on-campus slots when known.
    pub rooms: Vec<String>,
    /// Free-form catalog remarks and restrictions.
    pub remarks: String,
}

impl Section {
    /// Creates a section with the given code, course, and label.
    pub fn new(code: u32, course_code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code,
            course_code: course_code.into(),
            label: label.into(),
            instructor: String::new(),
            slots: Vec::new(),
            modality: Modality::InPerson,
            enrolled: 0,
            capacity: 0,
            rooms: Vec::new(),
            remarks: String::new(),
        }
    }

    /// Sets the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Adds a meeting slot.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Sets the modality.
    pub fn with_modality(mut self, modality: Modality) -> Self {
        self.modality = modality;
        self
    }

    /// Sets enrollment figures.
    pub fn with_enrollment(mut self, enrolled: u32, capacity: u32) -> Self {
        self.enrolled = enrolled;
        self.capacity = capacity;
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.rooms.push(room.into());
        self
    }

    /// Sets catalog remarks.
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    /// Whether the section has open seats.
    pub fn has_open_slots(&self) -> bool {
        self.enrolled < self.capacity
    }

    /// Whether any slot of this section overlaps any slot of `other`.
    ///
    /// Cross product over both slot lists, short-circuiting on the first
    /// hit. Unknown-day slots never contribute a conflict.
    pub fn conflicts_with(&self, other: &Section) -> bool {
        self.slots
            .iter()
            .any(|a| other.slots.iter().any(|b| a.overlaps(b)))
    }
}

/// All sections a student could choose for one course requirement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseCandidates {
    /// Course requirement being satisfied.
    pub course_code: String,
    /// Candidate sections. May legitimately be empty after filtering,
    /// which makes the requirement unsatisfiable.
    pub sections: Vec<Section>,
}

impl CourseCandidates {
    /// Creates an empty candidate set for a course.
    pub fn new(course_code: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            sections: Vec::new(),
        }
    }

    /// Adds a candidate section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }
}
