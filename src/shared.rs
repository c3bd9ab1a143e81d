use parking_lot::{Mutex, MutexGuard};

use crate::conflict::ExactTimeConflict;
use crate::day::Day;
use crate::error::{ConflictError, IndexError};
use crate::event::Event;
use crate::store::EventStore;
use crate::week::WeekSchedule;

/// A week that can be shared across threads.
///
/// Each day sits behind its own mutex, so an `add` holds that day's lock for
/// both the conflict scan and the insert. Operations on different days do
/// not contend.
#[derive(Debug, Default)]
pub struct SharedWeekSchedule {
    days: [Mutex<EventStore<ExactTimeConflict>>; 7],
}

impl SharedWeekSchedule {
    pub fn initialize() -> Self {
        Self::default()
    }

    /// Lock one day's store for a sequence of operations.
    pub fn lock(&self, day: Day) -> MutexGuard<'_, EventStore<ExactTimeConflict>> {
        self.days[day.index()].lock()
    }

    pub fn add(&self, day: Day, event: Event) -> Result<(), ConflictError> {
        self.lock(day).add(event)
    }

    pub fn remove(&self, day: Day, position: usize) -> Result<Event, IndexError> {
        self.lock(day).remove(position)
    }

    /// Snapshot of one day's events in time order.
    pub fn list(&self, day: Day) -> Vec<Event> {
        self.lock(day).list().cloned().collect()
    }

    /// Snapshot of every day. Days are locked one at a time, so the result is
    /// consistent per day rather than across the whole week.
    pub fn snapshot(&self) -> Vec<(Day, Vec<Event>)> {
        Day::ALL.into_iter().map(|day| (day, self.list(day))).collect()
    }
}

impl From<WeekSchedule> for SharedWeekSchedule {
    fn from(week: WeekSchedule) -> Self {
        let mut stores = week.iter().map(|(_, store)| store.clone());
        Self {
            days: std::array::from_fn(|_| Mutex::new(stores.next().unwrap_or_default())),
        }
    }
}
