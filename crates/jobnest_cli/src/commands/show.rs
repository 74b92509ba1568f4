//! Show command - detail card for one application

use super::{resolve_id, Service};
use crate::render;
use anyhow::{Context, Result};

pub fn execute(service: &Service<'_>, id: &str) -> Result<()> {
    let id = resolve_id(service, id)?;
    let application = service
        .get_application(&id)?
        .with_context(|| format!("Application {id} disappeared while reading"))?;
    print!("{}", render::card(&application));
    Ok(())
}
