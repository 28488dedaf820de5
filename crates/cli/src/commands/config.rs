//! Configuration document inspection and reset commands.

use ccom_config_store::{ConfigStore, PgBackend};
use ccom_core::AppConfig;
use secrecy::SecretString;

use super::{CliError, database_url};

/// Print the stored configuration document as pretty JSON.
pub async fn show() -> Result<(), CliError> {
    let store = connect_store().await?;
    let document = store.config().await?;

    #[allow(clippy::print_stdout)]
    {
        println!("{}", serde_json::to_string_pretty(&document)?);
    }
    Ok(())
}

/// Restore the compiled-in default document.
pub async fn reset() -> Result<(), CliError> {
    let store = connect_store().await?;
    store
        .replace_config(&serde_json::to_string(&AppConfig::default())?)
        .await?;

    tracing::info!("Configuration reset to compiled-in defaults");
    Ok(())
}

/// Build a store over the production backend.
///
/// The bootstrap fallback secret follows the same `ADMIN_PASSWORD`
/// convention as the service.
async fn connect_store() -> Result<ConfigStore, CliError> {
    let backend = PgBackend::connect(&database_url()?).await?;
    let fallback = std::env::var("ADMIN_PASSWORD")
        .map_or_else(|_| SecretString::from("admin"), SecretString::from);
    Ok(ConfigStore::new(backend, fallback))
}
