// src/utils/validation.rs
//
// Explicit form validation, decoupled from the screens that render the
// errors. Messages match the ones the users already know.

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::models::NewAppointment;

pub const NAME_TOO_SHORT: &str = "Nome deve ter no mínimo 1 letra";
pub const INVALID_ID: &str = "ID inválido";
pub const STARTS_AT_REQUIRED: &str = "Data de início é obrigatória";
pub const ENDS_AT_REQUIRED: &str = "Data de término é obrigatória";
pub const ENDS_AT_NOT_AFTER: &str = "Data de término deve ser posterior à data de início";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        FieldError { field, message }
    }
}

/// The trimmed name must have at least one character.
pub fn validate_name(input: &str) -> Result<String, FieldError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(FieldError::new("name", NAME_TOO_SHORT));
    }
    Ok(name.to_string())
}

/// Directly entered identifiers must be UUIDs. Existence is only checked by
/// the next screen's lookup.
pub fn validate_customer_id(input: &str) -> Result<String, FieldError> {
    let id = input.trim();
    if Uuid::parse_str(id).is_err() {
        return Err(FieldError::new("id", INVALID_ID));
    }
    Ok(id.to_string())
}

/// Form state of the schedule screen, kept as entered so a failed submission
/// can be retried without re-typing.
#[derive(Debug, Clone, Default)]
pub struct ScheduleForm {
    pub starts_at: Option<DateTime<Local>>,
    pub ends_at: Option<DateTime<Local>>,
}

/// Both timestamps must be set and the end must come after the start.
pub fn validate_schedule(
    customer_id: &str,
    form: &ScheduleForm,
) -> Result<NewAppointment, Vec<FieldError>> {
    let mut errors = Vec::new();
    if form.starts_at.is_none() {
        errors.push(FieldError::new("startsAt", STARTS_AT_REQUIRED));
    }
    if form.ends_at.is_none() {
        errors.push(FieldError::new("endsAt", ENDS_AT_REQUIRED));
    }
    if let (Some(starts_at), Some(ends_at)) = (form.starts_at, form.ends_at) {
        if ends_at > starts_at {
            return Ok(NewAppointment {
                customer_id: customer_id.to_string(),
                starts_at,
                ends_at,
            });
        }
        errors.push(FieldError::new("endsAt", ENDS_AT_NOT_AFTER));
    }
    Err(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2030, 1, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn name_is_trimmed_and_must_not_be_empty() {
        assert_eq!(validate_name("  Ana  ").unwrap(), "Ana");
        assert_eq!(validate_name("A").unwrap(), "A");
        let err = validate_name("   ").unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.message, NAME_TOO_SHORT);
        assert_eq!(validate_name("").unwrap_err().message, NAME_TOO_SHORT);
    }

    #[test]
    fn customer_id_must_be_a_uuid() {
        let id = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
        assert_eq!(validate_customer_id(id).unwrap(), id);
        assert_eq!(validate_customer_id(&format!("  {} ", id)).unwrap(), id);
        let err = validate_customer_id("c1").unwrap_err();
        assert_eq!(err.field, "id");
        assert_eq!(err.message, INVALID_ID);
        assert!(validate_customer_id("").is_err());
    }

    #[test]
    fn schedule_requires_both_timestamps() {
        let errors = validate_schedule("c1", &ScheduleForm::default()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["startsAt", "endsAt"]);

        let form = ScheduleForm {
            starts_at: Some(at(10, 0)),
            ends_at: None,
        };
        let errors = validate_schedule("c1", &form).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("endsAt", ENDS_AT_REQUIRED)]);
    }

    #[test]
    fn schedule_rejects_end_at_or_before_start() {
        let form = ScheduleForm {
            starts_at: Some(at(10, 0)),
            ends_at: Some(at(10, 0)),
        };
        let errors = validate_schedule("c1", &form).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("endsAt", ENDS_AT_NOT_AFTER)]);

        let form = ScheduleForm {
            starts_at: Some(at(11, 0)),
            ends_at: Some(at(10, 0)),
        };
        assert!(validate_schedule("c1", &form).is_err());
    }

    #[test]
    fn schedule_accepts_end_after_start() {
        let form = ScheduleForm {
            starts_at: Some(at(10, 0)),
            ends_at: Some(at(11, 0)),
        };
        let appointment = validate_schedule("c1", &form).unwrap();
        assert_eq!(appointment.customer_id, "c1");
        assert_eq!(appointment.starts_at, at(10, 0));
        assert_eq!(appointment.ends_at, at(11, 0));
    }
}
