use tracing::{debug, warn};

use crate::conflict::{ConflictPolicy, ExactTimeConflict};
use crate::error::{ConflictError, IndexError};
use crate::event::Event;

/// One day's events, kept sorted ascending by time with no two events
/// sharing a slot under the store's [`ConflictPolicy`].
///
/// Every operation either moves the store from one valid state to another
/// or fails without touching it.
#[derive(Debug, Clone, Default)]
pub struct EventStore<P = ExactTimeConflict> {
    events: Vec<Event>,
    policy: P,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: ConflictPolicy> EventStore<P> {
    pub fn with_policy(policy: P) -> Self {
        Self {
            events: Vec::new(),
            policy,
        }
    }

    /// Insert `event` at its chronological position.
    ///
    /// Fails with the conflicting time if the slot is already booked or any
    /// booked event collides with it under the policy; the store is
    /// unchanged in that case. A policy can only widen what counts as a
    /// conflict, never allow two events at the same time.
    pub fn add(&mut self, event: Event) -> Result<(), ConflictError> {
        if let Some(position) = self.position_of(event.time()) {
            warn!(
                time = event.time(),
                booked = self.events[position].title(),
                "rejected double booking"
            );
            return Err(ConflictError {
                time: event.time().to_string(),
            });
        }

        if let Some(existing) = self
            .events
            .iter()
            .find(|existing| self.policy.conflicts(existing, &event))
        {
            warn!(
                time = event.time(),
                booked = existing.title(),
                "rejected double booking"
            );
            return Err(ConflictError {
                time: existing.time().to_string(),
            });
        }

        let position = self
            .events
            .partition_point(|existing| existing.time() < event.time());
        debug!(position, event = %event, "event added");
        self.events.insert(position, event);
        Ok(())
    }

    pub fn remove(&mut self, position: usize) -> Result<Event, IndexError> {
        if position >= self.events.len() {
            return Err(IndexError {
                position,
                len: self.events.len(),
            });
        }
        let removed = self.events.remove(position);
        debug!(position, event = %removed, "event removed");
        Ok(removed)
    }

    /// Events in ascending time order. Each call starts a fresh traversal.
    pub fn list(&self) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, position: usize) -> Option<&Event> {
        self.events.get(position)
    }

    pub fn position_of(&self, time: &str) -> Option<usize> {
        self.events
            .binary_search_by(|existing| existing.time().cmp(time))
            .ok()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
