use std::sync::Arc;

use leavedesk_actions::ActionRuntime;
use leavedesk_core::config::AppConfig;
use leavedesk_core::validation::PatternError;
use leavedesk_db::{
    connect_with_settings, leave_applications_table_exists, DbPool,
    SqlLeaveApplicationRepository, LEAVE_APPLICATIONS_TABLE,
};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub db_pool: DbPool,
    pub runtime: Arc<ActionRuntime>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("database connection failed: {0}")]
    DatabaseConnect(#[source] sqlx::Error),
    #[error("schema check failed: {0}")]
    SchemaProbe(#[source] sqlx::Error),
    #[error("table `{table}` not found in `{url}`; run `leavedesk migrate` first")]
    SchemaMissing { table: &'static str, url: String },
    #[error("validator setup failed: {0}")]
    Validators(#[from] PatternError),
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let db_pool =
        connect_with_settings(&config.database.url, 2, config.database.timeout_secs, false)
            .await
            .map_err(BootstrapError::DatabaseConnect)?;
    info!(
        event_name = "system.bootstrap.database_connected",
        correlation_id = "bootstrap",
        "database connection established"
    );

    let has_table =
        leave_applications_table_exists(&db_pool).await.map_err(BootstrapError::SchemaProbe)?;
    if !has_table {
        db_pool.close().await;
        return Err(BootstrapError::SchemaMissing {
            table: LEAVE_APPLICATIONS_TABLE,
            url: config.database.url.clone(),
        });
    }
    info!(
        event_name = "system.bootstrap.schema_verified",
        correlation_id = "bootstrap",
        table = LEAVE_APPLICATIONS_TABLE,
        "leave application schema present"
    );

    let repository = Arc::new(SqlLeaveApplicationRepository::new(
        config.database.url.clone(),
        config.database.timeout_secs,
    ));
    let runtime = Arc::new(ActionRuntime::standard(repository)?);

    Ok(Application { config, db_pool, runtime })
}
