//! Subcommand implementations.

pub mod add;
pub mod dashboard;
pub mod delete;
pub mod edit;
pub mod list;
pub mod show;
pub mod stats;
pub mod summary;
pub mod transfer;

use anyhow::{bail, Result};
use jobnest_core::{
    ApplicationId, ApplicationService, JobApplication, KvApplicationRepository, SqliteKeyValueStore,
};

/// Service wired to the on-disk SQLite key-value store.
pub type Service<'conn> = ApplicationService<KvApplicationRepository<SqliteKeyValueStore<'conn>>>;

/// Resolves a full id or a unique id prefix (as printed in tables).
pub fn resolve_id(service: &Service<'_>, raw: &str) -> Result<ApplicationId> {
    let raw = raw.trim();
    if raw.is_empty() {
        bail!("Application id must not be empty");
    }
    let exact = ApplicationId::from(raw);
    if service.get_application(&exact)?.is_some() {
        return Ok(exact);
    }

    let all = service.all_applications()?;
    let matches: Vec<&JobApplication> = all
        .iter()
        .filter(|item| item.id.as_str().starts_with(raw))
        .collect();
    match matches.as_slice() {
        [single] => Ok(single.id.clone()),
        [] => bail!("No application matches id `{raw}`"),
        _ => bail!(
            "Id prefix `{raw}` is ambiguous ({} matches); use more characters",
            matches.len()
        ),
    }
}
