//! Job application domain model.
//!
//! # Responsibility
//! - Define `JobApplication`, its status lifecycle and identifier type.
//! - Validate the fields required before a record may be persisted.
//!
//! # Invariants
//! - `id` is never blank.
//! - `company` and `position` are never blank after validation.
//! - `applied_date` is always present.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier of one application.
///
/// Fresh ids are UUID v4 strings. Ids read from storage are kept verbatim so
/// collections written by other tools (timestamp ids) stay addressable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Generates a fresh unique id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for ApplicationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ApplicationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for ApplicationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Application lifecycle state.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ApplicationStatus {
    /// Submitted, no response yet.
    #[default]
    Applied,
    /// Interview stage reached.
    Interview,
    /// Offer received.
    Offer,
    /// Turned down by the employer.
    Rejected,
    /// Offer accepted.
    Accepted,
}

impl ApplicationStatus {
    /// All statuses in form/dropdown order.
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
        ApplicationStatus::Accepted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
            Self::Accepted => "Accepted",
        }
    }

    /// Whether the application is still in flight (`Applied` or `Interview`).
    pub fn is_active(self) -> bool {
        matches!(self, Self::Applied | Self::Interview)
    }

    /// Whether the employer has responded (`Interview`, `Offer` or `Rejected`).
    pub fn is_response(self) -> bool {
        matches!(self, Self::Interview | Self::Offer | Self::Rejected)
    }
}

impl Display for ApplicationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl Display for UnknownStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown status `{}`; expected Applied|Interview|Offer|Rejected|Accepted",
            self.0
        )
    }
}

impl Error for UnknownStatus {}

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    /// Case-insensitive parse of a status name.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownStatus(trimmed.to_string()))
    }
}

/// Field-level validation failure for `JobApplication`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The id is empty or whitespace.
    EmptyId,
    /// A required text field is empty or whitespace.
    MissingField(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "application id must not be empty"),
            Self::MissingField(field) => write!(f, "required field `{field}` is empty"),
        }
    }
}

impl Error for ValidationError {}

/// One tracked job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: ApplicationId,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub applied_date: NaiveDate,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub job_link: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub salary: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
}

impl JobApplication {
    /// Creates an `Applied` record with a freshly generated id.
    pub fn new(
        company: impl Into<String>,
        position: impl Into<String>,
        applied_date: NaiveDate,
    ) -> Self {
        Self::with_id(ApplicationId::generate(), company, position, applied_date)
    }

    /// Creates an `Applied` record with a caller-provided id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        id: ApplicationId,
        company: impl Into<String>,
        position: impl Into<String>,
        applied_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            company: company.into(),
            position: position.into(),
            status: ApplicationStatus::Applied,
            applied_date,
            job_link: None,
            location: None,
            salary: None,
            description: None,
            notes: None,
        }
    }

    /// Checks the fields a record needs before it may be persisted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_blank() {
            return Err(ValidationError::EmptyId);
        }
        if self.company.trim().is_empty() {
            return Err(ValidationError::MissingField("company"));
        }
        if self.position.trim().is_empty() {
            return Err(ValidationError::MissingField("position"));
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Normalizes blank strings to `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|text| {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

// Stored records from form submissions carry "" for untouched optional fields.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_optional(value))
}

#[cfg(test)]
mod tests {
    use super::{ApplicationStatus, JobApplication};
    use chrono::NaiveDate;

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(
            " interview ".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::Interview
        );
        assert!("ghosted".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn active_and_response_sets() {
        let active: Vec<_> = ApplicationStatus::ALL
            .into_iter()
            .filter(|status| status.is_active())
            .collect();
        assert_eq!(
            active,
            vec![ApplicationStatus::Applied, ApplicationStatus::Interview]
        );
        assert!(!ApplicationStatus::Accepted.is_response());
        assert!(ApplicationStatus::Rejected.is_response());
    }

    #[test]
    fn new_generates_distinct_ids() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let first = JobApplication::new("Acme", "Engineer", date);
        let second = JobApplication::new("Acme", "Engineer", date);
        assert_ne!(first.id, second.id);
        assert_eq!(first.status, ApplicationStatus::Applied);
    }
}
