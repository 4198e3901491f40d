use crate::domain::event::{Capacity, Event};
use crate::domain::ordering::{by_date_time_asc, by_event_count_desc_then_name};
use crate::domain::person::{Participation, Person};
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::{CalendarError, Result};
use crate::utils::validation::validate_not_in_past;
use chrono::NaiveDateTime;

/// Owns every event of one calendar and enforces the creation and registration rules.
///
/// Events are addressed by their title, which is unique within a controller.
/// The `bool`/`Option` methods are the public contract; the `try_*` variants
/// report why an operation was rejected. A rejected operation never mutates anything.
#[derive(Debug, Default)]
pub struct Controller<C: Clock = SystemClock> {
    events: Vec<Event>,
    clock: C,
}

impl Controller<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Controller<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            events: Vec::new(),
            clock,
        }
    }

    pub fn events_count(&self) -> usize {
        self.events.len()
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// 建立活動。`max_participators` 為 0 時不設人數上限。
    pub fn create_event(
        &mut self,
        invitor: Option<&Person>,
        title: &str,
        date_time: NaiveDateTime,
        max_participators: usize,
    ) -> bool {
        self.try_create_event(invitor, title, date_time, max_participators)
            .is_ok()
    }

    pub fn try_create_event(
        &mut self,
        invitor: Option<&Person>,
        title: &str,
        date_time: NaiveDateTime,
        max_participators: usize,
    ) -> Result<&Event> {
        let outcome = self.check_new_event(invitor, title, date_time);
        let invitor = match outcome {
            Ok(invitor) => invitor,
            Err(e) => {
                tracing::debug!("Rejected event '{}': {}", title, e);
                return Err(e);
            }
        };

        let capacity = Capacity::from_max_participators(max_participators);
        let event = Event::new(invitor.clone(), title.to_string(), date_time, capacity);
        tracing::info!(
            "📅 Created event '{}' at {} (capacity: {}) by {}",
            title,
            date_time,
            capacity,
            invitor
        );

        self.events.push(event);
        let index = self.events.len() - 1;
        Ok(&self.events[index])
    }

    fn check_new_event<'p>(
        &self,
        invitor: Option<&'p Person>,
        title: &str,
        date_time: NaiveDateTime,
    ) -> Result<&'p Person> {
        let invitor = invitor.ok_or(CalendarError::MissingInvitor)?;
        if title.is_empty() {
            return Err(CalendarError::EmptyTitle);
        }
        validate_not_in_past(date_time, self.clock.now())?;
        if self.get_event(title).is_some() {
            return Err(CalendarError::DuplicateTitle {
                title: title.to_string(),
            });
        }
        Ok(invitor)
    }

    /// 依標題 (區分大小寫、完全相符) 取得活動
    pub fn get_event(&self, title: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.title() == title)
    }

    fn event_mut(&mut self, title: &str) -> Result<&mut Event> {
        self.events
            .iter_mut()
            .find(|e| e.title() == title)
            .ok_or_else(|| CalendarError::EventNotFound {
                title: title.to_string(),
            })
    }

    pub fn register_person_for_event(&mut self, person: Option<&Person>, title: &str) -> bool {
        self.try_register_person_for_event(person, title).is_ok()
    }

    pub fn try_register_person_for_event(
        &mut self,
        person: Option<&Person>,
        title: &str,
    ) -> Result<()> {
        let outcome = self
            .event_mut(title)
            .and_then(|event| {
                let person = person.ok_or(CalendarError::MissingPerson)?;
                event.add_participant(person).map(|_| person)
            });

        match outcome {
            Ok(person) => {
                tracing::info!("✅ Registered {} for '{}'", person, title);
                Ok(())
            }
            Err(e) => {
                tracing::debug!("Registration for '{}' rejected: {}", title, e);
                Err(e)
            }
        }
    }

    pub fn unregister_person_for_event(&mut self, person: Option<&Person>, title: &str) -> bool {
        self.try_unregister_person_for_event(person, title).is_ok()
    }

    pub fn try_unregister_person_for_event(
        &mut self,
        person: Option<&Person>,
        title: &str,
    ) -> Result<()> {
        let outcome = self
            .event_mut(title)
            .and_then(|event| {
                let person = person.ok_or(CalendarError::MissingPerson)?;
                event.remove_participant(person).map(|_| person)
            });

        match outcome {
            Ok(person) => {
                tracing::info!("Unregistered {} from '{}'", person, title);
                Ok(())
            }
            Err(e) => {
                tracing::debug!("Unregistration from '{}' rejected: {}", title, e);
                Err(e)
            }
        }
    }

    /// 變更活動時間；新時間同樣不得早於現在
    pub fn reschedule_event(&mut self, title: &str, date_time: NaiveDateTime) -> bool {
        self.try_reschedule_event(title, date_time).is_ok()
    }

    pub fn try_reschedule_event(&mut self, title: &str, date_time: NaiveDateTime) -> Result<()> {
        let now = self.clock.now();
        let outcome = validate_not_in_past(date_time, now).and_then(|_| self.event_mut(title));

        match outcome {
            Ok(event) => {
                let previous = event.date_time();
                event.set_date_time(date_time);
                tracing::info!("📅 Rescheduled '{}' from {} to {}", title, previous, date_time);
                Ok(())
            }
            Err(e) => {
                tracing::debug!("Rescheduling '{}' rejected: {}", title, e);
                Err(e)
            }
        }
    }

    /// 活動的所有參加者：參加次數降冪，次數相同依全名升冪。
    /// 找不到活動時回傳 `None`。
    pub fn get_participators_for_event(&self, title: &str) -> Option<Vec<&Person>> {
        self.get_participant_standings(title)
            .map(|standings| standings.into_iter().map(|p| p.person).collect())
    }

    /// Same order as [`Self::get_participators_for_event`], with each participant's event count.
    pub fn get_participant_standings(&self, title: &str) -> Option<Vec<Participation<'_>>> {
        let event = self.get_event(title)?;

        let mut standings: Vec<Participation<'_>> = event
            .participants()
            .iter()
            .map(|person| Participation {
                person,
                event_count: self.count_events_for_person(Some(person)),
            })
            .collect();
        standings.sort_by(by_event_count_desc_then_name);

        tracing::trace!("{} participants for '{}'", standings.len(), title);
        Some(standings)
    }

    /// 該人參加的所有活動，依時間升冪
    pub fn get_events_for_person(&self, person: Option<&Person>) -> Option<Vec<&Event>> {
        let person = person?;

        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| event.is_participant(person))
            .collect();
        events.sort_by(by_date_time_asc);

        tracing::trace!("{} is registered for {} events", person, events.len());
        Some(events)
    }

    /// Counted by walking every event's participant list.
    pub fn count_events_for_person(&self, person: Option<&Person>) -> usize {
        let Some(person) = person else {
            return 0;
        };

        self.events
            .iter()
            .map(|event| {
                event
                    .participants()
                    .iter()
                    .filter(|participant| *participant == person)
                    .count()
            })
            .sum()
    }
}
