//! Application repository contract and key-value implementation.
//!
//! # Responsibility
//! - Provide CRUD over the collection stored under one key.
//! - Keep JSON encoding inside the persistence boundary.
//!
//! # Invariants
//! - Ids are unique within the stored collection after every write.
//! - Stored order is insertion order; updates keep a record in place.
//! - Read paths decode stored data but do not re-validate it.

use crate::model::application::{ApplicationId, JobApplication, ValidationError};
use crate::storage::kv::{KeyValueStore, StorageError};
use log::{info, warn};
use serde_json::error::Category;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized collection.
pub const APPLICATIONS_KEY: &str = "jobs";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for application persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Storage(StorageError),
    NotFound(ApplicationId),
    DuplicateId(ApplicationId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "application not found: {id}"),
            Self::DuplicateId(id) => write!(f, "application id already exists: {id}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted application data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Repository interface for application CRUD.
pub trait ApplicationRepository {
    /// Loads the whole collection in stored order.
    fn load_all(&self) -> RepoResult<Vec<JobApplication>>;
    /// Overwrites the whole collection.
    fn save_all(&self, items: &[JobApplication]) -> RepoResult<()>;
    fn create(&self, application: &JobApplication) -> RepoResult<ApplicationId>;
    fn get(&self, id: &ApplicationId) -> RepoResult<Option<JobApplication>>;
    fn update(&self, application: &JobApplication) -> RepoResult<()>;
    fn delete(&self, id: &ApplicationId) -> RepoResult<()>;
    /// Validates then overwrites the collection with `items`.
    fn replace_all(&self, items: &[JobApplication]) -> RepoResult<()>;
}

/// Repository persisting the collection as one JSON array in a key-value store.
pub struct KvApplicationRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KvApplicationRepository<S> {
    /// Uses the default `jobs` key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, APPLICATIONS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl<S: KeyValueStore> ApplicationRepository for KvApplicationRepository<S> {
    fn load_all(&self) -> RepoResult<Vec<JobApplication>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw).map_err(|err| {
            warn!(
                "event=applications_load module=repo status=error key={} error_kind={} line={} column={}",
                self.key,
                decode_error_kind(&err),
                err.line(),
                err.column()
            );
            RepoError::InvalidData(err.to_string())
        })
    }

    fn save_all(&self, items: &[JobApplication]) -> RepoResult<()> {
        let raw = serde_json::to_string(items)
            .map_err(|err| RepoError::InvalidData(err.to_string()))?;
        self.store.set(&self.key, &raw)?;
        info!(
            "event=applications_save module=repo status=ok key={} count={}",
            self.key,
            items.len()
        );
        Ok(())
    }

    fn create(&self, application: &JobApplication) -> RepoResult<ApplicationId> {
        application.validate()?;

        let mut items = self.load_all()?;
        if items.iter().any(|item| item.id == application.id) {
            return Err(RepoError::DuplicateId(application.id.clone()));
        }
        items.push(application.clone());
        self.save_all(&items)?;

        Ok(application.id.clone())
    }

    fn get(&self, id: &ApplicationId) -> RepoResult<Option<JobApplication>> {
        Ok(self.load_all()?.into_iter().find(|item| &item.id == id))
    }

    fn update(&self, application: &JobApplication) -> RepoResult<()> {
        application.validate()?;

        let mut items = self.load_all()?;
        let slot = items
            .iter_mut()
            .find(|item| item.id == application.id)
            .ok_or_else(|| RepoError::NotFound(application.id.clone()))?;
        *slot = application.clone();
        self.save_all(&items)
    }

    fn delete(&self, id: &ApplicationId) -> RepoResult<()> {
        let mut items = self.load_all()?;
        let before = items.len();
        items.retain(|item| &item.id != id);
        if items.len() == before {
            return Err(RepoError::NotFound(id.clone()));
        }
        self.save_all(&items)
    }

    fn replace_all(&self, items: &[JobApplication]) -> RepoResult<()> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in items {
            item.validate()?;
            if !seen.insert(&item.id) {
                return Err(RepoError::DuplicateId(item.id.clone()));
            }
        }
        self.save_all(items)
    }
}

// Category only; the message itself can quote stored record values.
fn decode_error_kind(err: &serde_json::Error) -> &'static str {
    match err.classify() {
        Category::Io => "io",
        Category::Syntax => "syntax",
        Category::Data => "data",
        Category::Eof => "eof",
    }
}
