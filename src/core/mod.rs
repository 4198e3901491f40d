pub mod controller;
pub mod report;

pub use crate::domain::event::{Capacity, Event};
pub use crate::domain::person::{Participation, Person, PersonId};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::Result;
