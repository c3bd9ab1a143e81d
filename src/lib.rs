pub mod config;
pub mod conflict;
pub mod console;
pub mod day;
pub mod error;
pub mod event;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod logging;
#[cfg(feature = "http_api")]
pub mod shared;
pub mod store;
pub mod week;

pub use config::{ConfigError, SchedulerConfig};
pub use conflict::{ConflictPolicy, ExactTimeConflict};
pub use console::Console;
pub use day::Day;
pub use error::{ConflictError, DayParseError, EventError, IndexError, ScheduleError, ScheduleResult};
pub use event::Event;
#[cfg(feature = "http_api")]
pub use shared::SharedWeekSchedule;
pub use store::EventStore;
pub use week::WeekSchedule;
