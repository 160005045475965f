use admin_orders::{
    config::AppConfig,
    db::{MIGRATIONS_DIR, create_orm_conn, run_migrations},
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(config.require_database_url()?).await?;
    let applied = run_migrations(&orm, MIGRATIONS_DIR).await?;
    tracing::info!(files = applied, "migrations applied");
    Ok(())
}
