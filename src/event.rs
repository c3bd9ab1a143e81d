use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EventError;

/// A named activity booked at an opaque, caller-formatted time token.
///
/// The scheduler orders and compares events by `time` alone; the token is
/// compared as plain text, so callers should use a sortable format such as
/// zero-padded `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    title: String,
    time: String,
}

impl Event {
    pub fn new(title: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            time: time.into(),
        }
    }

    /// Like [`Event::new`] but rejects blank titles and empty time tokens.
    pub fn try_new(title: impl Into<String>, time: impl Into<String>) -> Result<Self, EventError> {
        let event = Self::new(title, time);
        event.validate()?;
        Ok(event)
    }

    pub fn validate(&self) -> Result<(), EventError> {
        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }
        if self.time.is_empty() {
            return Err(EventError::EmptyTime);
        }
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn time(&self) -> &str {
        &self.time
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.title, self.time)
    }
}
