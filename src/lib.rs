pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::CalendarConfig;
pub use crate::core::controller::Controller;
pub use crate::core::report::ReportFormat;
pub use crate::core::{
    Capacity, Clock, Event, FixedClock, Participation, Person, PersonId, SystemClock,
};
pub use crate::utils::error::{CalendarError, Result};
