// Sort policies for the controller's query results, kept apart from the entities.

use crate::domain::event::Event;
use crate::domain::person::Participation;
use std::cmp::Ordering;

/// 參加次數多者在前；次數相同時依全名升冪
pub fn by_event_count_desc_then_name(a: &Participation<'_>, b: &Participation<'_>) -> Ordering {
    b.event_count
        .cmp(&a.event_count)
        .then_with(|| a.person.full_name().cmp(&b.person.full_name()))
}

pub fn by_date_time_asc(a: &&Event, b: &&Event) -> Ordering {
    a.date_time().cmp(&b.date_time())
}
