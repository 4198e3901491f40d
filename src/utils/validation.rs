use crate::utils::error::{CalendarError, Result};
use chrono::NaiveDateTime;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalendarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 檢查時間點是否早於 `now`；剛好等於 `now` 視為有效
pub fn validate_not_in_past(date_time: NaiveDateTime, now: NaiveDateTime) -> Result<()> {
    if date_time < now {
        return Err(CalendarError::DateInPast { date_time, now });
    }
    Ok(())
}
