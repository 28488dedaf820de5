//! Admin credential recovery command.
//!
//! Overwrites the stored password hash directly in the database, bypassing
//! the store's compare-and-swap check. This is the recovery path for a
//! forgotten admin password; the running store picks the new hash up on its
//! next cold read, or after a restart if it has the old one cached.

use ccom_config_store::backend::{KvBackend, PASSWORD_KEY};
use ccom_config_store::PgBackend;
use ccom_core::PasswordHash;

use super::{CliError, database_url};

/// Minimum length for a new admin password.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Overwrite the stored admin password hash.
pub async fn set_password(password: &str) -> Result<(), CliError> {
    let password = password.trim();
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(CliError::InvalidArgument(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let backend = PgBackend::connect(&database_url()?).await?;
    let hash = PasswordHash::digest(password);
    backend.put(PASSWORD_KEY, hash.as_str()).await?;

    tracing::info!("Admin password hash updated");
    Ok(())
}
