//! Application use-case service.
//!
//! # Responsibility
//! - Provide add/edit/delete/list entry points with form-level checks.
//! - Derive dashboard, summary and detailed statistics from the collection.
//! - Import/export the collection in its stored JSON shape.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Editing never changes an application's id.
//! - Aggregates are computed from one fresh `load_all()` per call.

use crate::model::application::{
    normalize_optional, ApplicationId, ApplicationStatus, JobApplication, ValidationError,
};
use crate::query::filter::{run_query, status_options, ListQuery, Page};
use crate::repo::application_repo::{ApplicationRepository, RepoError};
use crate::stats::{
    recent_applications, ApplicationStats, DashboardStats, Summary, RECENT_APPLICATIONS_LIMIT,
};
use chrono::{Local, NaiveDate};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for application use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Required form input missing or blank.
    Validation(ValidationError),
    /// Target application does not exist.
    NotFound(ApplicationId),
    /// Import payload could not be decoded.
    InvalidImport(String),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "application not found: {id}"),
            Self::InvalidImport(message) => write!(f, "invalid import payload: {message}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Input of the add-application form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub company: String,
    pub position: String,
    /// Defaults to `Applied`.
    pub status: Option<ApplicationStatus>,
    /// Defaults to today's local date.
    pub applied_date: Option<NaiveDate>,
    pub job_link: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
}

/// Partial edit of an existing application.
///
/// `None` leaves a field unchanged. For optional text fields, `Some(None)`
/// clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationPatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub applied_date: Option<NaiveDate>,
    pub job_link: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub salary: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl ApplicationPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies set fields onto `application`, leaving the id untouched.
    pub fn apply_to(&self, application: &mut JobApplication) {
        if let Some(company) = &self.company {
            application.company = company.trim().to_string();
        }
        if let Some(position) = &self.position {
            application.position = position.trim().to_string();
        }
        if let Some(status) = self.status {
            application.status = status;
        }
        if let Some(date) = self.applied_date {
            application.applied_date = date;
        }
        patch_optional(&mut application.job_link, &self.job_link);
        patch_optional(&mut application.location, &self.location);
        patch_optional(&mut application.salary, &self.salary);
        patch_optional(&mut application.description, &self.description);
        patch_optional(&mut application.notes, &self.notes);
    }
}

/// Dashboard projection: headline counters plus the recent list.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub recent: Vec<JobApplication>,
}

/// Use-case service over an application repository.
pub struct ApplicationService<R: ApplicationRepository> {
    repo: R,
}

impl<R: ApplicationRepository> ApplicationService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Submits the add form and returns the stored record.
    ///
    /// # Errors
    /// - `Validation(MissingField)` when company or position is blank.
    pub fn add_application(&self, draft: ApplicationDraft) -> ServiceResult<JobApplication> {
        let applied_date = draft
            .applied_date
            .unwrap_or_else(|| Local::now().date_naive());
        let mut application =
            JobApplication::new(draft.company.trim(), draft.position.trim(), applied_date);
        application.status = draft.status.unwrap_or_default();
        application.job_link = normalize_optional(draft.job_link);
        application.location = normalize_optional(draft.location);
        application.salary = normalize_optional(draft.salary);
        application.description = normalize_optional(draft.description);
        application.notes = normalize_optional(draft.notes);
        application.validate()?;

        self.repo.create(&application)?;
        info!(
            "event=application_add module=service status=ok id={} app_status={}",
            application.id, application.status
        );
        Ok(application)
    }

    /// Overwrites the patched fields of one application.
    pub fn edit_application(
        &self,
        id: &ApplicationId,
        patch: &ApplicationPatch,
    ) -> ServiceResult<JobApplication> {
        let mut application = self
            .repo
            .get(id)?
            .ok_or_else(|| ServiceError::NotFound(id.clone()))?;
        patch.apply_to(&mut application);
        application.validate()?;

        self.repo.update(&application)?;
        info!("event=application_edit module=service status=ok id={id}");
        Ok(application)
    }

    pub fn delete_application(&self, id: &ApplicationId) -> ServiceResult<()> {
        self.repo.delete(id)?;
        info!("event=application_delete module=service status=ok id={id}");
        Ok(())
    }

    pub fn get_application(&self, id: &ApplicationId) -> ServiceResult<Option<JobApplication>> {
        Ok(self.repo.get(id)?)
    }

    /// Returns the whole collection in stored order.
    pub fn all_applications(&self) -> ServiceResult<Vec<JobApplication>> {
        Ok(self.repo.load_all()?)
    }

    /// Returns one filtered, sorted page.
    pub fn list_applications(&self, query: &ListQuery) -> ServiceResult<Page<JobApplication>> {
        let items = self.repo.load_all()?;
        Ok(run_query(&items, query))
    }

    /// Statuses present in the collection, for filter choices.
    pub fn status_options(&self) -> ServiceResult<Vec<ApplicationStatus>> {
        Ok(status_options(&self.repo.load_all()?))
    }

    pub fn dashboard(&self) -> ServiceResult<Dashboard> {
        let items = self.repo.load_all()?;
        Ok(Dashboard {
            stats: DashboardStats::from_applications(&items),
            recent: recent_applications(&items, RECENT_APPLICATIONS_LIMIT),
        })
    }

    pub fn summary(&self) -> ServiceResult<Summary> {
        Ok(Summary::from_applications(&self.repo.load_all()?))
    }

    pub fn application_stats(&self) -> ServiceResult<ApplicationStats> {
        Ok(ApplicationStats::from_applications(&self.repo.load_all()?))
    }

    /// Serializes the collection in its stored shape, pretty-printed.
    pub fn export_json(&self) -> ServiceResult<String> {
        let items = self.repo.load_all()?;
        serde_json::to_string_pretty(&items)
            .map_err(|err| ServiceError::Repo(RepoError::InvalidData(err.to_string())))
    }

    /// Replaces the collection with a JSON array; returns the record count.
    pub fn import_json(&self, payload: &str) -> ServiceResult<usize> {
        let items: Vec<JobApplication> = serde_json::from_str(payload)
            .map_err(|err| ServiceError::InvalidImport(err.to_string()))?;
        self.repo.replace_all(&items)?;
        info!(
            "event=applications_import module=service status=ok count={}",
            items.len()
        );
        Ok(items.len())
    }
}

fn patch_optional(target: &mut Option<String>, patch: &Option<Option<String>>) {
    if let Some(value) = patch {
        *target = normalize_optional(value.clone());
    }
}
