/// Project record type definitions
///
/// Defines the intake record, its closed status/priority sets, and the
/// draft/filter types callers hand to the repository.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::project::error::RepositoryError;

/// Filter value meaning "do not filter on this field"
pub const FILTER_ALL: &str = "All";

/// A tracked project as persisted in the `projects` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Auto-incremented row id, never reused
    pub id: i64,
    pub project_name: String,
    pub client_name: String,
    pub owner: String,
    pub status: ProjectStatus,
    pub priority: ProjectPriority,
    /// Date the project entered the tracker; primary sort key for listing
    pub intake_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub budget: Option<f64>,
    pub notes: Option<String>,
    /// Stamped by the database at insert time (UTC)
    pub created_at: NaiveDateTime,
    /// Refreshed by the database trigger on every update (UTC)
    pub updated_at: NaiveDateTime,
}

/// Workflow state of a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::New,
        ProjectStatus::InProgress,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
        ProjectStatus::Cancelled,
    ];

    /// Text form stored in the database and shown to users
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::New => "New",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| RepositoryError::Validation(format!("invalid status '{}'", s)))
    }
}

/// Urgency of a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl ProjectPriority {
    pub const ALL: [ProjectPriority; 4] = [
        ProjectPriority::Low,
        ProjectPriority::Medium,
        ProjectPriority::High,
        ProjectPriority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectPriority::Low => "Low",
            ProjectPriority::Medium => "Medium",
            ProjectPriority::High => "High",
            ProjectPriority::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for ProjectPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectPriority {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| RepositoryError::Validation(format!("invalid priority '{}'", s)))
    }
}

/// Fields submitted by a caller for create or update
///
/// Status and priority arrive as free text (what a form posts) and are only
/// turned into the closed enums by [`ProjectDraft::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub project_name: String,
    pub client_name: String,
    pub owner: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    pub intake_date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_status() -> String {
    ProjectStatus::default().as_str().to_string()
}

fn default_priority() -> String {
    ProjectPriority::default().as_str().to_string()
}

impl ProjectDraft {
    /// Draft with the required fields set and form defaults for the rest
    pub fn new(
        project_name: impl Into<String>,
        client_name: impl Into<String>,
        owner: impl Into<String>,
        intake_date: NaiveDate,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            client_name: client_name.into(),
            owner: owner.into(),
            status: default_status(),
            priority: default_priority(),
            intake_date,
            due_date: None,
            budget: None,
            notes: None,
        }
    }

    /// Check every field and normalize it for storage
    pub fn validate(&self) -> Result<ValidProject, RepositoryError> {
        let project_name = required("project_name", &self.project_name)?;
        let client_name = required("client_name", &self.client_name)?;
        let owner = required("owner", &self.owner)?;
        let status = self.status.parse::<ProjectStatus>()?;
        let priority = self.priority.parse::<ProjectPriority>()?;

        if let Some(budget) = self.budget {
            if !budget.is_finite() || budget < 0.0 {
                return Err(RepositoryError::Validation(
                    "budget must be a non-negative amount".to_string(),
                ));
            }
        }

        let notes = self
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
            .map(str::to_string);

        Ok(ValidProject {
            project_name,
            client_name,
            owner,
            status,
            priority,
            intake_date: self.intake_date,
            due_date: self.due_date,
            budget: self.budget,
            notes,
        })
    }
}

fn required(field: &str, value: &str) -> Result<String, RepositoryError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RepositoryError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// A draft that passed validation; the only shape the repository writes
#[derive(Debug, Clone, PartialEq)]
pub struct ValidProject {
    pub project_name: String,
    pub client_name: String,
    pub owner: String,
    pub status: ProjectStatus,
    pub priority: ProjectPriority,
    pub intake_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub budget: Option<f64>,
    pub notes: Option<String>,
}

/// List criteria; all present criteria must match
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    /// Case-insensitive substring matched against name, client and owner.
    /// Case folding follows SQLite `LIKE`, which folds ASCII letters only.
    pub search: String,
    pub status: Option<ProjectStatus>,
    pub priority: Option<ProjectPriority>,
}

impl ProjectFilter {
    /// Build a filter from raw parameters, where "All" (or nothing) disables
    /// the status/priority criterion
    pub fn from_params(
        search: Option<&str>,
        status: Option<&str>,
        priority: Option<&str>,
    ) -> Result<Self, RepositoryError> {
        Ok(Self {
            search: search.unwrap_or_default().trim().to_string(),
            status: parse_filter(status)?,
            priority: parse_filter(priority)?,
        })
    }
}

fn parse_filter<T>(value: Option<&str>) -> Result<Option<T>, RepositoryError>
where
    T: FromStr<Err = RepositoryError>,
{
    match value.map(str::trim) {
        None | Some("") | Some(FILTER_ALL) => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProjectDraft {
        ProjectDraft::new(
            "Website Redesign",
            "Acme Corp",
            "Ama",
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in ProjectStatus::ALL {
            assert_eq!(status.as_str().parse::<ProjectStatus>().unwrap(), status);
        }
        assert!("in progress".parse::<ProjectStatus>().is_err());
        assert!("Bogus".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn priority_rejects_unknown_values() {
        assert_eq!("Urgent".parse::<ProjectPriority>().unwrap(), ProjectPriority::Urgent);
        assert!("Critical".parse::<ProjectPriority>().is_err());
    }

    #[test]
    fn status_serializes_with_display_text() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }

    #[test]
    fn validate_trims_required_fields_and_notes() {
        let mut input = draft();
        input.project_name = "  Website Redesign  ".to_string();
        input.notes = Some("   ".to_string());

        let valid = input.validate().unwrap();
        assert_eq!(valid.project_name, "Website Redesign");
        assert_eq!(valid.notes, None);
        assert_eq!(valid.status, ProjectStatus::New);
        assert_eq!(valid.priority, ProjectPriority::Medium);
    }

    #[test]
    fn validate_rejects_blank_required_fields() {
        for field in ["project_name", "client_name", "owner"] {
            let mut input = draft();
            match field {
                "project_name" => input.project_name = "   ".to_string(),
                "client_name" => input.client_name = String::new(),
                _ => input.owner = "\t".to_string(),
            }
            let err = input.validate().unwrap_err();
            assert!(matches!(err, RepositoryError::Validation(ref msg) if msg.contains(field)));
        }
    }

    #[test]
    fn validate_rejects_negative_budget() {
        let mut input = draft();
        input.budget = Some(-1.0);
        assert!(matches!(input.validate(), Err(RepositoryError::Validation(_))));

        input.budget = Some(0.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn filter_treats_all_as_no_criterion() {
        let filter = ProjectFilter::from_params(Some("  acme "), Some("All"), None).unwrap();
        assert_eq!(filter.search, "acme");
        assert_eq!(filter.status, None);
        assert_eq!(filter.priority, None);

        let filter = ProjectFilter::from_params(None, Some("On Hold"), Some("High")).unwrap();
        assert_eq!(filter.status, Some(ProjectStatus::OnHold));
        assert_eq!(filter.priority, Some(ProjectPriority::High));

        assert!(ProjectFilter::from_params(None, Some("Bogus"), None).is_err());
    }
}
