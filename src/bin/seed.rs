use admin_orders::{
    config::AppConfig,
    db::{MIGRATIONS_DIR, create_orm_conn, run_migrations},
    seed::{seed_products, seed_users},
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(config.require_database_url()?).await?;
    run_migrations(&orm, MIGRATIONS_DIR).await?;

    let products = seed_products(&orm).await?;
    let users = seed_users(&orm).await?;

    println!("Seed completed. {products} products, {users} users");
    Ok(())
}
