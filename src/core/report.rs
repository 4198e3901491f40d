use crate::core::controller::Controller;
use crate::domain::person::Person;
use crate::domain::ports::Clock;
use crate::utils::error::{CalendarError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub const VALUES: [&'static str; 3] = ["text", "json", "csv"];
}

impl TryFrom<String> for ReportFormat {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl FromStr for ReportFormat {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(CalendarError::InvalidConfigValueError {
                field: "report.format".to_string(),
                value: other.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    Self::VALUES.join(", ")
                ),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantRow {
    pub rank: usize,
    pub full_name: String,
    pub event_count: usize,
    pub mail_address: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRow {
    pub title: String,
    pub date_time: String,
    pub invitor: String,
    pub participants: usize,
    pub max_participators: i64,
}

/// Rows for an event's participants, in query order. `None` when the event does not exist.
pub fn participant_report<C: Clock>(
    controller: &Controller<C>,
    title: &str,
) -> Option<Vec<ParticipantRow>> {
    let standings = controller.get_participant_standings(title)?;

    Some(
        standings
            .into_iter()
            .enumerate()
            .map(|(index, standing)| ParticipantRow {
                rank: index + 1,
                full_name: standing.person.full_name(),
                event_count: standing.event_count,
                mail_address: standing.person.mail_address(),
                phone_number: standing.person.phone_number(),
            })
            .collect(),
    )
}

pub fn person_agenda<C: Clock>(
    controller: &Controller<C>,
    person: Option<&Person>,
) -> Option<Vec<EventRow>> {
    let events = controller.get_events_for_person(person)?;

    Some(
        events
            .into_iter()
            .map(|event| EventRow {
                title: event.title().to_string(),
                date_time: event.date_time().format("%Y-%m-%d %H:%M").to_string(),
                invitor: event.invitor().full_name(),
                participants: event.participant_count(),
                max_participators: event.capacity().as_sentinel(),
            })
            .collect(),
    )
}

pub trait TextRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl TextRow for ParticipantRow {
    fn headers() -> &'static [&'static str] {
        &["#", "name", "events", "mail", "phone"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.rank.to_string(),
            self.full_name.clone(),
            self.event_count.to_string(),
            self.mail_address.clone().unwrap_or_default(),
            self.phone_number.clone().unwrap_or_default(),
        ]
    }
}

impl TextRow for EventRow {
    fn headers() -> &'static [&'static str] {
        &["title", "date", "invitor", "participants", "max"]
    }

    fn cells(&self) -> Vec<String> {
        let max = if self.max_participators < 0 {
            "-".to_string()
        } else {
            self.max_participators.to_string()
        };
        vec![
            self.title.clone(),
            self.date_time.clone(),
            self.invitor.clone(),
            self.participants.to_string(),
            max,
        ]
    }
}

pub fn render<R: Serialize + TextRow>(rows: &[R], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(rows)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        ReportFormat::Csv => render_csv(rows),
    }
}

fn render_text<R: TextRow>(rows: &[R]) -> String {
    let headers = R::headers();
    let cells: Vec<Vec<String>> = rows.iter().map(R::cells).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |values: Vec<&str>| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(value, width)| format!("{:<width$}", value, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(headers.to_vec())];
    for row in &cells {
        lines.push(format_line(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

fn render_csv<R: Serialize>(rows: &[R]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CalendarError::IoError(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| CalendarError::ConfigError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedClock;
    use chrono::{Duration, NaiveDate};

    fn seeded() -> (Controller<FixedClock>, Person, Person) {
        let now = NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let mut controller = Controller::with_clock(FixedClock(now));
        let host = Person::new("Host", "Hannah");
        let amy = Person::new("Brown", "Amy");
        amy.set_mail_address("amy@example.com");
        let zoe = Person::new("Adams", "Zoe");

        controller.create_event(Some(&host), "Launch", now + Duration::days(2), 5);
        controller.create_event(Some(&host), "Kickoff", now + Duration::days(1), 0);
        controller.register_person_for_event(Some(&amy), "Launch");
        controller.register_person_for_event(Some(&zoe), "Launch");
        controller.register_person_for_event(Some(&zoe), "Kickoff");

        (controller, amy, zoe)
    }

    #[test]
    fn test_participant_report_rows() {
        let (controller, _, _) = seeded();
        let rows = participant_report(&controller, "Launch").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].full_name, "Adams Zoe");
        assert_eq!(rows[0].event_count, 2);
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].mail_address.as_deref(), Some("amy@example.com"));

        assert!(participant_report(&controller, "Missing").is_none());
    }

    #[test]
    fn test_participant_report_shows_current_contact_details() {
        let (controller, amy, _) = seeded();

        amy.set_phone_number("+43 1");
        amy.set_mail_address("amy.brown@example.com");

        let rows = participant_report(&controller, "Launch").unwrap();
        let amy_row = rows.iter().find(|r| r.full_name == "Brown Amy").unwrap();
        assert_eq!(amy_row.phone_number.as_deref(), Some("+43 1"));
        assert_eq!(amy_row.mail_address.as_deref(), Some("amy.brown@example.com"));
    }

    #[test]
    fn test_person_agenda_rows() {
        let (controller, _, zoe) = seeded();
        let rows = person_agenda(&controller, Some(&zoe)).unwrap();

        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Kickoff", "Launch"]);
        assert_eq!(rows[0].max_participators, -1);
        assert_eq!(rows[1].max_participators, 5);

        assert!(person_agenda(&controller, None).is_none());
    }

    #[test]
    fn test_render_text_aligns_columns() {
        let (controller, _, _) = seeded();
        let rows = participant_report(&controller, "Launch").unwrap();
        let text = render(&rows, ReportFormat::Text).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("#  name"));
        assert!(lines[1].contains("Adams Zoe"));
    }

    #[test]
    fn test_render_csv_and_json() {
        let (controller, amy, _) = seeded();
        let rows = person_agenda(&controller, Some(&amy)).unwrap();

        let csv = render(&rows, ReportFormat::Csv).unwrap();
        assert!(csv.starts_with("title,date_time,invitor,participants,max_participators"));
        assert!(csv.contains("Launch,2030-01-03 09:00,Host Hannah,2,5"));

        let json = render(&rows, ReportFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["title"], "Launch");
    }

    #[test]
    fn test_report_format_from_str() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("xml".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::try_from("Csv".to_string()).unwrap(), ReportFormat::Csv);
        assert_eq!(serde_json::to_string(&ReportFormat::Json).unwrap(), "\"json\"");
    }
}
