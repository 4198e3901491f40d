use crate::domain::person::Person;
use crate::utils::error::{CalendarError, Result};
use chrono::NaiveDateTime;
use std::fmt;

/// Upper bound on the number of participants of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Unlimited,
    Limited(usize),
}

impl Capacity {
    /// `0` 代表不設上限
    pub fn from_max_participators(max_participators: usize) -> Self {
        if max_participators == 0 {
            Capacity::Unlimited
        } else {
            Capacity::Limited(max_participators)
        }
    }

    /// 舊格式的整數表示：不設上限為 `-1`，超出 `i64` 的上限以 `i64::MAX` 表示
    pub fn as_sentinel(&self) -> i64 {
        match self {
            Capacity::Unlimited => -1,
            Capacity::Limited(max) => i64::try_from(*max).unwrap_or(i64::MAX),
        }
    }

    pub fn admits(&self, current: usize) -> bool {
        match self {
            Capacity::Unlimited => true,
            Capacity::Limited(max) => current < *max,
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Unlimited => write!(f, "unlimited"),
            Capacity::Limited(max) => write!(f, "{}", max),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Event {
    title: String,
    date_time: NaiveDateTime,
    invitor: Person,
    capacity: Capacity,
    participants: Vec<Person>,
}

impl Event {
    pub(crate) fn new(
        invitor: Person,
        title: String,
        date_time: NaiveDateTime,
        capacity: Capacity,
    ) -> Self {
        Self {
            title,
            date_time,
            invitor,
            capacity,
            participants: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    pub fn invitor(&self) -> &Person {
        &self.invitor
    }

    pub(crate) fn set_date_time(&mut self, date_time: NaiveDateTime) {
        self.date_time = date_time;
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Participants in registration order.
    pub fn participants(&self) -> &[Person] {
        &self.participants
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn is_participant(&self, person: &Person) -> bool {
        self.participants.iter().any(|p| p == person)
    }

    pub fn is_full(&self) -> bool {
        !self.capacity.admits(self.participants.len())
    }

    pub(crate) fn add_participant(&mut self, person: &Person) -> Result<()> {
        if self.is_participant(person) {
            return Err(CalendarError::AlreadyRegistered {
                person: person.full_name(),
                title: self.title.clone(),
            });
        }
        if let Capacity::Limited(max) = self.capacity {
            if self.participants.len() >= max {
                return Err(CalendarError::CapacityReached {
                    title: self.title.clone(),
                    capacity: max,
                });
            }
        }

        self.participants.push(person.clone());
        Ok(())
    }

    pub(crate) fn remove_participant(&mut self, person: &Person) -> Result<()> {
        let position = self
            .participants
            .iter()
            .position(|p| p == person)
            .ok_or_else(|| CalendarError::NotRegistered {
                person: person.full_name(),
                title: self.title.clone(),
            })?;

        self.participants.remove(position);
        Ok(())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} ({}/{})",
            self.title,
            self.date_time.format("%Y-%m-%d %H:%M"),
            self.participants.len(),
            self.capacity
        )
    }
}
