use crate::conflict::{ConflictPolicy, ExactTimeConflict};
use crate::day::Day;
use crate::error::{ConflictError, IndexError};
use crate::event::Event;
use crate::store::EventStore;

/// Owns exactly one [`EventStore`] per [`Day`], created eagerly.
///
/// Lookups never fail: the day domain is closed and every store exists for
/// the lifetime of the schedule.
#[derive(Debug, Clone)]
pub struct WeekSchedule<P = ExactTimeConflict> {
    stores: [EventStore<P>; 7],
}

impl WeekSchedule {
    pub fn initialize() -> Self {
        Self::with_policy(ExactTimeConflict)
    }
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self::initialize()
    }
}

impl<P: ConflictPolicy + Clone> WeekSchedule<P> {
    /// Build a week whose seven stores all apply `policy`.
    pub fn with_policy(policy: P) -> Self {
        Self {
            stores: std::array::from_fn(|_| EventStore::with_policy(policy.clone())),
        }
    }
}

impl<P: ConflictPolicy> WeekSchedule<P> {
    pub fn store_for(&mut self, day: Day) -> &mut EventStore<P> {
        &mut self.stores[day.index()]
    }

    pub fn store(&self, day: Day) -> &EventStore<P> {
        &self.stores[day.index()]
    }

    pub fn add(&mut self, day: Day, event: Event) -> Result<(), ConflictError> {
        self.store_for(day).add(event)
    }

    pub fn remove(&mut self, day: Day, position: usize) -> Result<Event, IndexError> {
        self.store_for(day).remove(position)
    }

    /// Every day with its store, Sunday first.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &EventStore<P>)> + '_ {
        Day::ALL.into_iter().zip(self.stores.iter())
    }

    pub fn total_events(&self) -> usize {
        self.stores.iter().map(EventStore::len).sum()
    }
}
