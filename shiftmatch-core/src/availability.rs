//! Worker availability: declared slots with a self-reported priority.
//!
//! An [`AvailabilityIndex`] stores at most one [`Priority`] per slot in a
//! fixed week-sized grid, giving constant-time lookups during scoring.
//! When the same slot is declared more than once the last entry wins; the
//! index counts the overwritten entries and logs a warning because repeated
//! slots usually point at a bug in the caller's translation layer.

use crate::{SLOTS_PER_WEEK, TimeSlot, ValidationError};

/// How strongly a worker wants a slot they declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Priority {
    /// The worker explicitly prefers this slot.
    High,
    /// The worker can work this slot.
    Normal,
}

impl Priority {
    /// Return the priority as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Normal => "normal",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "normal" => Ok(Self::Normal),
            _ => Err(ValidationError::UnknownPriority(s.to_owned())),
        }
    }
}

/// One declared slot in a worker's availability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvailabilityEntry {
    /// The slot the worker can cover.
    pub slot: TimeSlot,
    /// How strongly the worker wants the slot.
    pub priority: Priority,
}

impl AvailabilityEntry {
    /// Validate raw values and construct an entry.
    ///
    /// # Errors
    /// Propagates [`TimeSlot::new`] range failures.
    pub fn new(day: u8, hour: u8, priority: Priority) -> Result<Self, ValidationError> {
        let slot = TimeSlot::new(day, hour)?;
        Ok(Self { slot, priority })
    }
}

/// Constant-time lookup of a worker's availability by slot.
///
/// # Examples
/// ```
/// use shiftmatch_core::{AvailabilityIndex, Priority, TimeSlot};
///
/// # fn main() -> Result<(), shiftmatch_core::ValidationError> {
/// let index = AvailabilityIndex::try_from_raw([
///     (0, 9, Priority::Normal),
///     (0, 9, Priority::High),
/// ])?;
/// assert_eq!(index.priority(TimeSlot::new(0, 9)?), Some(Priority::High));
/// assert_eq!(index.len(), 1);
/// assert_eq!(index.duplicate_count(), 1);
/// # Ok(())
/// # }
/// ```
///
/// Equality compares declared slots and priorities only. The duplicate
/// counter is a build diagnostic and does not survive serialisation.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "Vec<AvailabilityEntry>",
        into = "Vec<AvailabilityEntry>"
    )
)]
pub struct AvailabilityIndex {
    grid: [Option<Priority>; SLOTS_PER_WEEK],
    len: usize,
    duplicates: usize,
}

impl AvailabilityIndex {
    /// Construct an index with no declared slots.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid: [None; SLOTS_PER_WEEK],
            len: 0,
            duplicates: 0,
        }
    }

    /// Index already-validated entries. Later entries for a slot replace
    /// earlier ones.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = AvailabilityEntry>,
    {
        let mut index = Self::new();
        for entry in entries {
            index.insert(entry);
        }
        if index.duplicates > 0 {
            log::warn!(
                "availability set repeated {} slot(s); the last entry for each slot was kept",
                index.duplicates
            );
        }
        index
    }

    /// Validate raw `(day, hour, priority)` triples and index them.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] raised by an out-of-range slot.
    pub fn try_from_raw<I>(raw: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (u8, u8, Priority)>,
    {
        let entries = raw
            .into_iter()
            .map(|(day, hour, priority)| AvailabilityEntry::new(day, hour, priority))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::build(entries))
    }

    fn insert(&mut self, entry: AvailabilityEntry) {
        let Some(cell) = self.grid.get_mut(entry.slot.index()) else {
            return;
        };
        if cell.replace(entry.priority).is_some() {
            self.duplicates = self.duplicates.saturating_add(1);
        } else {
            self.len = self.len.saturating_add(1);
        }
    }

    /// Return the declared priority for `slot`, if any.
    #[must_use]
    pub fn priority(&self, slot: TimeSlot) -> Option<Priority> {
        self.grid.get(slot.index()).copied().flatten()
    }

    /// Report whether the worker declared `slot`.
    #[must_use]
    pub fn contains(&self, slot: TimeSlot) -> bool {
        self.priority(slot).is_some()
    }

    /// Number of distinct declared slots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Report whether no slot was declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of entries discarded because a later entry named the same slot.
    #[must_use]
    pub const fn duplicate_count(&self) -> usize {
        self.duplicates
    }

    /// Iterate over declared entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = AvailabilityEntry> + '_ {
        TimeSlot::all()
            .zip(self.grid.iter())
            .filter_map(|(slot, cell)| cell.map(|priority| AvailabilityEntry { slot, priority }))
    }
}

impl PartialEq for AvailabilityIndex {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for AvailabilityIndex {}

impl Default for AvailabilityIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<AvailabilityEntry> for AvailabilityIndex {
    fn from_iter<I: IntoIterator<Item = AvailabilityEntry>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl From<Vec<AvailabilityEntry>> for AvailabilityIndex {
    fn from(entries: Vec<AvailabilityEntry>) -> Self {
        Self::build(entries)
    }
}

impl From<AvailabilityIndex> for Vec<AvailabilityEntry> {
    fn from(index: AvailabilityIndex) -> Self {
        index.iter().collect()
    }
}

/// Validate raw `(day, hour, priority)` triples and build an
/// [`AvailabilityIndex`].
///
/// # Errors
/// Returns [`ValidationError`] when any slot is out of range.
pub fn build_availability_index<I>(raw: I) -> Result<AvailabilityIndex, ValidationError>
where
    I: IntoIterator<Item = (u8, u8, Priority)>,
{
    AvailabilityIndex::try_from_raw(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn monday_nine() -> TimeSlot {
        TimeSlot::new(0, 9).expect("valid slot")
    }

    #[rstest]
    fn empty_index_has_no_entries(monday_nine: TimeSlot) {
        let index = AvailabilityIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.priority(monday_nine), None);
        assert_eq!(index.iter().count(), 0);
    }

    #[rstest]
    fn lookup_returns_declared_priority(monday_nine: TimeSlot) {
        let index = AvailabilityIndex::try_from_raw([(0, 9, Priority::Normal), (2, 14, Priority::High)])
            .expect("valid availability");
        assert_eq!(index.priority(monday_nine), Some(Priority::Normal));
        assert!(index.contains(TimeSlot::new(2, 14).expect("valid slot")));
        assert!(!index.contains(TimeSlot::new(2, 15).expect("valid slot")));
        assert_eq!(index.len(), 2);
    }

    #[rstest]
    fn last_write_wins_and_duplicates_are_counted(monday_nine: TimeSlot) {
        let index = AvailabilityIndex::try_from_raw([
            (0, 9, Priority::High),
            (0, 9, Priority::Normal),
            (0, 9, Priority::Normal),
        ])
        .expect("valid availability");
        assert_eq!(index.priority(monday_nine), Some(Priority::Normal));
        assert_eq!(index.len(), 1);
        assert_eq!(index.duplicate_count(), 2);
    }

    #[test]
    fn equality_ignores_discarded_duplicates() {
        let repeated = AvailabilityIndex::try_from_raw([
            (0, 9, Priority::Normal),
            (0, 9, Priority::High),
            (3, 12, Priority::Normal),
        ])
        .expect("valid availability");
        let clean = AvailabilityIndex::try_from_raw([(0, 9, Priority::High), (3, 12, Priority::Normal)])
            .expect("valid availability");

        assert_eq!(repeated.duplicate_count(), 1);
        assert_eq!(repeated, clean);
        assert_ne!(
            repeated,
            AvailabilityIndex::try_from_raw([(0, 9, Priority::Normal), (3, 12, Priority::Normal)])
                .expect("valid availability")
        );
    }

    #[rstest]
    #[case(vec![(7, 0, Priority::High)], ValidationError::DayOutOfRange { day: 7 })]
    #[case(
        vec![(0, 9, Priority::High), (1, 24, Priority::Normal)],
        ValidationError::HourOutOfRange { hour: 24 }
    )]
    fn out_of_range_entries_fail(
        #[case] raw: Vec<(u8, u8, Priority)>,
        #[case] expected: ValidationError,
    ) {
        assert_eq!(build_availability_index(raw), Err(expected));
    }

    #[rstest]
    fn iteration_is_in_slot_order() {
        let index = AvailabilityIndex::try_from_raw([
            (4, 8, Priority::High),
            (0, 20, Priority::Normal),
            (0, 3, Priority::High),
        ])
        .expect("valid availability");
        let slots: Vec<(u8, u8)> = index
            .iter()
            .map(|entry| (entry.slot.day(), entry.slot.hour()))
            .collect();
        assert_eq!(slots, vec![(0, 3), (0, 20), (4, 8)]);
    }

    #[rstest]
    #[case("HIGH", Priority::High)]
    #[case("normal", Priority::Normal)]
    fn priority_parses_labels(#[case] input: &str, #[case] expected: Priority) {
        assert_eq!(input.parse::<Priority>(), Ok(expected));
    }

    #[test]
    fn priority_rejects_unknown_labels() {
        assert_eq!(
            "urgent".parse::<Priority>(),
            Err(ValidationError::UnknownPriority("urgent".into()))
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_from_entry_list(monday_nine: TimeSlot) {
        let json = r#"[
            {"slot": {"day": 0, "hour": 9}, "priority": "normal"},
            {"slot": {"day": 0, "hour": 9}, "priority": "high"}
        ]"#;
        let index: AvailabilityIndex = serde_json::from_str(json).expect("decode availability");
        assert_eq!(index.priority(monday_nine), Some(Priority::High));
        assert_eq!(index.duplicate_count(), 1);

        let encoded = serde_json::to_value(&index).expect("encode availability");
        assert_eq!(
            encoded,
            serde_json::json!([{"slot": {"day": 0, "hour": 9}, "priority": "high"}])
        );

        let decoded: AvailabilityIndex = serde_json::from_value(encoded).expect("decode again");
        assert_eq!(decoded.duplicate_count(), 0);
        assert_eq!(decoded, index);
    }
}
