use crate::shared::core::primitives::{BookingDate, PrimitiveError, Slot};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("slot template must not be empty")]
    Empty,

    #[error("slot {0} appears twice in the template")]
    Duplicate(Slot),

    #[error(transparent)]
    InvalidSlot(#[from] PrimitiveError),
}

/// The fixed daily slots, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTemplate(Vec<Slot>);

impl SlotTemplate {
    pub fn new(slots: Vec<Slot>) -> Result<Self, TemplateError> {
        if slots.is_empty() {
            return Err(TemplateError::Empty);
        }
        let mut seen = BTreeSet::new();
        for slot in &slots {
            if !seen.insert(*slot) {
                return Err(TemplateError::Duplicate(*slot));
            }
        }
        Ok(Self(slots))
    }

    /// Parses a comma separated list such as `09:00,10:00,11:00`.
    pub fn parse(value: &str) -> Result<Self, TemplateError> {
        let slots = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<Slot>)
            .collect::<Result<Vec<Slot>, _>>()?;
        Self::new(slots)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.0.contains(&slot)
    }
}

/// Hourly from 09:00 to 19:00.
impl Default for SlotTemplate {
    fn default() -> Self {
        Self((9..=19).filter_map(|hour| Slot::new(hour, 0)).collect())
    }
}

/// Slots already booked, per date. A missing date means nothing is booked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancySet(HashMap<BookingDate, BTreeSet<Slot>>);

impl OccupancySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_date(date: BookingDate, occupied: BTreeSet<Slot>) -> Self {
        Self(HashMap::from([(date, occupied)]))
    }

    /// Returns false when the slot was already occupied.
    pub fn occupy(&mut self, date: BookingDate, slot: Slot) -> bool {
        self.0.entry(date).or_default().insert(slot)
    }

    pub fn is_occupied(&self, date: BookingDate, slot: Slot) -> bool {
        self.0.get(&date).is_some_and(|slots| slots.contains(&slot))
    }
}

impl FromIterator<(BookingDate, Slot)> for OccupancySet {
    fn from_iter<T: IntoIterator<Item = (BookingDate, Slot)>>(iter: T) -> Self {
        let mut occupancy = Self::new();
        for (date, slot) in iter {
            occupancy.occupy(date, slot);
        }
        occupancy
    }
}

pub fn available_slots(
    date: BookingDate,
    template: &SlotTemplate,
    occupancy: &OccupancySet,
) -> Vec<Slot> {
    template
        .slots()
        .iter()
        .copied()
        .filter(|slot| !occupancy.is_occupied(date, *slot))
        .collect()
}
