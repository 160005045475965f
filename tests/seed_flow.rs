use admin_orders::{
    db::{MIGRATIONS_DIR, create_orm_conn, run_migrations},
    entity::{Products, Users, products::Column as ProdCol, users::Column as UserCol},
    seed::{seed_products, seed_users},
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Statement,
};

// Seeding twice must leave exactly the fixture rows behind.
#[tokio::test]
async fn seeding_is_idempotent() -> anyhow::Result<()> {
    let Some(orm) = setup().await? else {
        return Ok(());
    };

    seed_products(&orm).await?;
    seed_users(&orm).await?;
    seed_products(&orm).await?;
    seed_users(&orm).await?;

    assert_eq!(Products::find().count(&orm).await?, 5);
    assert_eq!(Users::find().count(&orm).await?, 5);

    let jeans = Products::find()
        .filter(ProdCol::Slug.eq("jeans"))
        .one(&orm)
        .await?
        .expect("jeans seeded");
    assert_eq!(jeans.price, 4999);
    assert_eq!(jeans.category, "clothing");

    let admins = Users::find().filter(UserCol::Role.eq(1i16)).all(&orm).await?;
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].email, "alice@example.com");
    assert_ne!(admins[0].password_hash, "hashedpassword789");

    Ok(())
}

async fn setup() -> anyhow::Result<Option<DatabaseConnection>> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run seed tests.");
            return Ok(None);
        }
    };

    let orm = create_orm_conn(&database_url).await?;
    run_migrations(&orm, MIGRATIONS_DIR).await?;

    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE products, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(Some(orm))
}
