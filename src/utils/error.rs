use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Event requires an invitor")]
    MissingInvitor,

    #[error("Event title cannot be empty")]
    EmptyTitle,

    #[error("Event date {date_time} lies before the current time {now}")]
    DateInPast {
        date_time: NaiveDateTime,
        now: NaiveDateTime,
    },

    #[error("An event titled '{title}' already exists")]
    DuplicateTitle { title: String },

    #[error("No event titled '{title}'")]
    EventNotFound { title: String },

    #[error("Registration requires a person")]
    MissingPerson,

    #[error("{person} is already registered for '{title}'")]
    AlreadyRegistered { person: String, title: String },

    #[error("Event '{title}' is full ({capacity} participants)")]
    CapacityReached { title: String, capacity: usize },

    #[error("{person} is not registered for '{title}'")]
    NotRegistered { person: String, title: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalendarError {
    /// 是否為業務規則拒絕 (而非 IO / 設定錯誤)
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            CalendarError::MissingInvitor
                | CalendarError::EmptyTitle
                | CalendarError::DateInPast { .. }
                | CalendarError::DuplicateTitle { .. }
                | CalendarError::EventNotFound { .. }
                | CalendarError::MissingPerson
                | CalendarError::AlreadyRegistered { .. }
                | CalendarError::CapacityReached { .. }
                | CalendarError::NotRegistered { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
