//! Scheduling filters: per-day rules and the general/override structure.
//!
//! A [`DayRule`] bundles every constraint that applies to one weekday:
//! the allowed time window, load limits, acceptable modalities, and
//! whether in-person meetings are allowed at all. A [`Filter`] holds one
//! general rule plus optional per-day overrides; days without an
//! override fall back to the general rule.
//!
//! # Policy
//! Every check — time window, modality, in-person allowance — consults
//! the *effective* rule for the slot's day ([`Filter::rule_for`]). The
//! in-person allowance is an ordinary per-day flag, not a separate
//! general-only day list.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Day, Modality};

/// Constraints applied to one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRule {
    /// Earliest acceptable slot start (HHMM, inclusive).
    pub window_start: u16,
    /// Latest acceptable slot end (HHMM, inclusive).
    pub window_end: u16,
    /// Maximum number of slots on this day.
    pub max_per_day: u32,
    /// Maximum run of back-to-back slots (gap ≤ 15 minutes).
    pub max_consecutive: u32,
    /// Section modalities acceptable on this day.
    pub modalities: Vec<Modality>,
    /// Whether on-campus meetings are acceptable on this day.
    pub allow_in_person: bool,
}

impl Default for DayRule {
    /// Fully permissive rule: whole day, limits of 10, all modalities,
    /// in-person allowed. Matches the enrollment form's defaults.
    fn default() -> Self {
        Self {
            window_start: 0,
            window_end: 2400,
            max_per_day: 10,
            max_consecutive: 10,
            modalities: Modality::ALL.to_vec(),
            allow_in_person: true,
        }
    }
}

impl DayRule {
    /// Creates a permissive rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the acceptable time window.
    pub fn with_window(mut self, start: u16, end: u16) -> Self {
        self.window_start = start;
        self.window_end = end;
        self
    }

    /// Caps the number of slots per day.
    pub fn with_max_per_day(mut self, max: u32) -> Self {
        self.max_per_day = max;
        self
    }

    /// Caps the run of back-to-back slots.
    pub fn with_max_consecutive(mut self, max: u32) -> Self {
        self.max_consecutive = max;
        self
    }

    /// Restricts the acceptable modalities.
    pub fn with_modalities(mut self, modalities: Vec<Modality>) -> Self {
        self.modalities = modalities;
        self
    }

    /// Sets whether on-campus meetings are acceptable.
    pub fn with_in_person(mut self, allowed: bool) -> Self {
        self.allow_in_person = allowed;
        self
    }
}

/// A general day rule plus per-day overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Rule applied to any day without an override.
    pub general: DayRule,
    /// Per-day overrides.
    pub overrides: HashMap<Day, DayRule>,
}

impl Filter {
    /// Creates a filter with a permissive general rule and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the general rule.
    pub fn with_general(mut self, rule: DayRule) -> Self {
        self.general = rule;
        self
    }

    /// Adds a per-day override.
    pub fn with_override(mut self, day: Day, rule: DayRule) -> Self {
        self.overrides.insert(day, rule);
        self
    }

    /// The effective rule for a day: its override, else the general rule.
    pub fn rule_for(&self, day: Day) -> &DayRule {
        self.overrides.get(&day).unwrap_or(&self.general)
    }
}
