//! Core domain logic for JobNest, a personal job-application tracker.
//! This crate owns the record model, its key-value persistence and every
//! aggregate shown to users.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod stats;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::application::{
    ApplicationId, ApplicationStatus, JobApplication, UnknownStatus, ValidationError,
};
pub use query::filter::{ApplicationFilter, ListQuery, Page, SortOrder};
pub use repo::application_repo::{
    ApplicationRepository, KvApplicationRepository, RepoError, RepoResult, APPLICATIONS_KEY,
};
pub use service::application_service::{
    ApplicationDraft, ApplicationPatch, ApplicationService, Dashboard, ServiceError,
    ServiceResult,
};
pub use stats::{ApplicationStats, DashboardStats, StatusCounts, Summary};
pub use storage::kv::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
};
