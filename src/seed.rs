use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use password_hash::rand_core::OsRng;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set, sea_query::OnConflict};
use uuid::Uuid;

use crate::{
    entity::{
        Products, Users,
        products::{ActiveModel as ProductActive, Column as ProdCol},
        users::{ActiveModel as UserActive, Column as UserCol},
    },
    error::{AppError, AppResult},
    fixtures::{SAMPLE_PRODUCTS, SAMPLE_USERS, SampleProduct, SampleUser},
};

/// Upserts the sample catalogue keyed by slug.
pub async fn seed_products(conn: &DatabaseConnection) -> AppResult<usize> {
    seed_products_from(conn, SAMPLE_PRODUCTS).await
}

async fn seed_products_from(
    conn: &DatabaseConnection,
    products: &[SampleProduct],
) -> AppResult<usize> {
    for product in products {
        let row = ProductActive {
            id: Set(Uuid::new_v4()),
            name: Set(product.name.to_string()),
            slug: Set(product.slug.to_string()),
            description: Set(product.description.to_string()),
            price: Set(product.price_minor_units()),
            quantity: Set(product.quantity),
            shipping: Set(product.shipping),
            category: Set(product.category.to_string()),
            created_at: NotSet,
        };

        Products::insert(row)
            .on_conflict(
                OnConflict::column(ProdCol::Slug)
                    .update_columns([
                        ProdCol::Name,
                        ProdCol::Description,
                        ProdCol::Price,
                        ProdCol::Quantity,
                        ProdCol::Shipping,
                        ProdCol::Category,
                    ])
                    .to_owned(),
            )
            .exec(conn)
            .await?;
        tracing::debug!(slug = product.slug, "seeded product");
    }

    tracing::info!(count = products.len(), "seeded products");
    Ok(products.len())
}

/// Upserts the sample accounts keyed by email. Existing password hashes are
/// left alone so re-seeding does not invalidate sessions.
pub async fn seed_users(conn: &DatabaseConnection) -> AppResult<usize> {
    seed_users_from(conn, SAMPLE_USERS).await
}

async fn seed_users_from(conn: &DatabaseConnection, users: &[SampleUser]) -> AppResult<usize> {
    for user in users {
        let row = UserActive {
            id: Set(Uuid::new_v4()),
            name: Set(user.name.to_string()),
            email: Set(user.email.to_string()),
            password_hash: Set(hash_password(user.password)?),
            phone: Set(user.phone.to_string()),
            address: Set(user.address.to_string()),
            answer: Set(user.answer.to_string()),
            role: Set(user.role),
            created_at: NotSet,
        };

        Users::insert(row)
            .on_conflict(
                OnConflict::column(UserCol::Email)
                    .update_columns([
                        UserCol::Name,
                        UserCol::Phone,
                        UserCol::Address,
                        UserCol::Answer,
                        UserCol::Role,
                    ])
                    .to_owned(),
            )
            .exec(conn)
            .await?;
        tracing::debug!(email = user.email, role = user.role, "seeded user");
    }

    tracing::info!(count = users.len(), "seeded users");
    Ok(users.len())
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}
