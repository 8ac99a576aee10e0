// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use crate::{DateKey, Error, Event, YearMonth};

/// Events of each calendar day, in insertion order.
///
/// Every operation returns a new snapshot and leaves `self` untouched. A key
/// present in the store always maps to a non-empty list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventStore {
    days: BTreeMap<DateKey, Vec<Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event to the day, creating the day if needed.
    ///
    /// The store does not check whether the day is in the past, callers do.
    #[must_use]
    pub fn add(&self, key: DateKey, event: Event) -> Self {
        let mut next = self.clone();
        next.days.entry(key).or_default().push(event);
        next
    }

    /// Replaces the event at `index` of the day, keeping order and length.
    pub fn edit(&self, key: DateKey, index: usize, event: Event) -> Result<Self, Error> {
        self.check_index(key, index)?;

        let mut next = self.clone();
        if let Some(slot) = next.days.get_mut(&key).and_then(|list| list.get_mut(index)) {
            *slot = event;
        }
        Ok(next)
    }

    /// Removes the event at `index` of the day, dropping the day once it is empty.
    pub fn delete(&self, key: DateKey, index: usize) -> Result<Self, Error> {
        self.check_index(key, index)?;

        let mut next = self.clone();
        if let Some(list) = next.days.get_mut(&key) {
            list.remove(index);
            if list.is_empty() {
                next.days.remove(&key);
            }
        }
        Ok(next)
    }

    /// The events of the day, empty if there are none.
    pub fn list_for(&self, key: DateKey) -> &[Event] {
        self.days.get(&key).map(Vec::as_slice).unwrap_or_default()
    }

    /// The event at `index` of the day.
    pub fn get(&self, key: DateKey, index: usize) -> Option<&Event> {
        self.list_for(key).get(index)
    }

    /// Whether the day has any event.
    pub fn contains(&self, key: DateKey) -> bool {
        self.days.contains_key(&key)
    }

    /// Number of days that have events.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of events over all days.
    pub fn event_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Days with their events, in chronological order.
    pub fn days(&self) -> impl Iterator<Item = (DateKey, &[Event])> {
        self.days.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Days of the month that have events, in ascending order.
    pub fn days_in(&self, ym: YearMonth) -> Vec<u32> {
        let first = DateKey::in_month(ym, 1);
        let last = DateKey::in_month(ym, ym.days_in_month());
        self.days.range(first..=last).map(|(k, _)| k.day()).collect()
    }

    fn check_index(&self, key: DateKey, index: usize) -> Result<(), Error> {
        let len = self.list_for(key).len();
        if index < len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { key, index, len })
        }
    }
}
