use super::TaskRecord;
use crate::catalog;
use std::fmt;

/// Longest task or location string accepted from the directory
pub const TASK_STRING_MAX_LENGTH: usize = 50;

/// Reasons a directory record is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InvalidCharacters { field: &'static str, value: String },
    TooLong { field: &'static str, length: usize },
    UnknownTask(String),
    UnknownLocation(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidCharacters { field, value } => {
                write!(f, "{} '{}' contains invalid characters", field, value)
            }
            ValidationError::TooLong { field, length } => write!(
                f,
                "{} is {} characters, max is {}",
                field, length, TASK_STRING_MAX_LENGTH
            ),
            ValidationError::UnknownTask(task) => write!(f, "unknown task '{}'", task),
            ValidationError::UnknownLocation(location) => {
                write!(f, "unknown location '{}'", location)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates a record received from the directory.
///
/// Rules:
/// - task and location: only `[A-Za-z0-9' -]`, at most 50 characters
/// - task: must be a catalog task (case-insensitive)
/// - location: empty, or one of `locations` (case-insensitive); with no location
///   list available only the empty location passes
pub fn validate_record(
    record: &TaskRecord,
    locations: Option<&[String]>,
) -> Result<(), ValidationError> {
    check_string("task", &record.task)?;
    check_string("location", &record.location)?;

    if catalog::lookup(&record.task.to_lowercase()).is_none() {
        return Err(ValidationError::UnknownTask(record.task.clone()));
    }

    if !is_valid_location(&record.location, locations) {
        return Err(ValidationError::UnknownLocation(record.location.clone()));
    }

    Ok(())
}

fn check_string(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !value.chars().all(is_allowed_char) {
        return Err(ValidationError::InvalidCharacters {
            field,
            value: value.to_string(),
        });
    }

    let length = value.chars().count();
    if length > TASK_STRING_MAX_LENGTH {
        return Err(ValidationError::TooLong { field, length });
    }

    Ok(())
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\'' || c == ' ' || c == '-'
}

fn is_valid_location(location: &str, locations: Option<&[String]>) -> bool {
    if location.is_empty() {
        return true;
    }

    locations.map_or(false, |known| {
        known.iter().any(|l| l.eq_ignore_ascii_case(location))
    })
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    fn record(task: &str, location: &str) -> TaskRecord {
        TaskRecord {
            task: task.to_string(),
            location: location.to_string(),
            amount: 5,
            initial_amount: 20,
        }
    }

    fn locations() -> Vec<String> {
        vec!["Slayer Tower".to_string(), "Kourend Catacombs".to_string()]
    }

    #[test]
    fn test_valid_records() {
        let known = locations();
        assert!(validate_record(&record("Rats", ""), Some(known.as_slice())).is_ok());
        assert!(validate_record(&record("rats", "slayer tower"), Some(known.as_slice())).is_ok());
        assert!(validate_record(&record("Kree'arra", ""), None).is_ok());
        assert!(validate_record(&record("TzTok-Jad", ""), None).is_ok());
    }

    #[test]
    fn test_rejects_invalid_characters() {
        assert_eq!(
            validate_record(&record("Goblin; DROP TABLE", ""), None),
            Err(ValidationError::InvalidCharacters {
                field: "task",
                value: "Goblin; DROP TABLE".to_string()
            })
        );
        assert!(matches!(
            validate_record(&record("Rats", "<col=ff0000>Tower"), None),
            Err(ValidationError::InvalidCharacters { field: "location", .. })
        ));
    }

    #[test]
    fn test_rejects_long_strings() {
        let long = "a".repeat(51);
        assert_eq!(
            validate_record(&record("Rats", &long), Some(&[long.clone()][..])),
            Err(ValidationError::TooLong {
                field: "location",
                length: 51
            })
        );
        assert!(check_string("task", &"a".repeat(50)).is_ok());
    }

    #[test]
    fn test_rejects_unknown_task() {
        assert_eq!(
            validate_record(&record("Dragons of doom", ""), None),
            Err(ValidationError::UnknownTask("Dragons of doom".to_string()))
        );
    }

    #[test]
    fn test_rejects_unknown_location() {
        let known = locations();
        assert_eq!(
            validate_record(&record("Rats", "Lumbridge"), Some(known.as_slice())),
            Err(ValidationError::UnknownLocation("Lumbridge".to_string()))
        );
        // no location list loaded yet
        assert!(validate_record(&record("Rats", "Slayer Tower"), None).is_err());
    }
}
