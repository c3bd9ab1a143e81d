use thiserror::Error;

/// The requested time slot is already taken on that day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("time slot {time} is already booked")]
pub struct ConflictError {
    pub time: String,
}

/// A removal position fell outside `[0, len)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no event at position {position} (day has {len} events)")]
pub struct IndexError {
    pub position: usize,
    pub len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("event title must not be empty")]
    EmptyTitle,
    #[error("event time must not be empty")]
    EmptyTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day '{input}' (expected SUNDAY, MONDAY, TUESDAY, etc.)")]
pub struct DayParseError {
    pub input: String,
}

/// Any failure a driver can hit while handling one request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Conflict(#[from] ConflictError),
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error(transparent)]
    Event(#[from] EventError),
    #[error(transparent)]
    Day(#[from] DayParseError),
    /// A removal position that is not a non-negative integer.
    #[error("invalid position '{input}'")]
    Position { input: String },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
