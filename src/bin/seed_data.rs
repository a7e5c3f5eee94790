//! Seed data script - populates the database with demo catalog data
//!
//! Run with: cargo run --bin seed-data
//!
//! This creates:
//! - 3 stores
//! - 3 users
//! - 4 products for every (animal, product category) pair
//! - a couple of wishes for the first user

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tracing::info;

use petmall_catalog::{
    config, db,
    entities::commerce::{product, store, user, wish},
    models::category::AnimalCategory,
};
use strum::IntoEnumIterator;

const PRODUCTS_PER_CATEGORY: i64 = 4;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("=== Pet-Mall Seed Data ===");

    let cfg = config::load_config()?;
    info!("Connecting to database: {}", cfg.database_url());
    let pool = db::establish_connection_from_app_config(&cfg).await?;
    db::run_migrations(&pool).await?;

    info!("Creating stores...");
    let stores = create_stores(&pool).await?;
    info!("  Created {} stores", stores.len());

    info!("Creating users...");
    let users = create_users(&pool).await?;
    info!("  Created {} users", users.len());

    info!("Creating products...");
    let products = create_products(&pool, &stores).await?;
    info!("  Created {} products", products.len());

    info!("Creating wishes...");
    let wishes = create_wishes(&pool, &users, &products).await?;
    info!("  Created {} wishes", wishes);

    info!("=== Seed Data Complete ===");
    info!("Try these API calls:");
    info!("  curl 'http://localhost:8080/api/v1/products?animal=dog&category=food'");
    info!("  curl 'http://localhost:8080/api/v1/products/recommended?animal=cat'");
    if let Some(first) = users.first() {
        info!("  curl http://localhost:8080/api/v1/users/{}/wishlist", first.id);
    }
    info!("Or explore interactively at: http://localhost:8080/swagger-ui");

    Ok(())
}

async fn create_stores(db: &DatabaseConnection) -> anyhow::Result<Vec<store::Model>> {
    let mut stores = Vec::new();
    for name in ["Happy Paws", "Whisker Market", "Burrow & Co"] {
        let model = store::ActiveModel {
            store_name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        stores.push(model);
    }
    Ok(stores)
}

async fn create_users(db: &DatabaseConnection) -> anyhow::Result<Vec<user::Model>> {
    let mut users = Vec::new();
    for (email, nickname) in [
        ("mong@petmall.example", "mong"),
        ("nabi@petmall.example", "nabi"),
        ("dubu@petmall.example", "dubu"),
    ] {
        let model = user::ActiveModel {
            email: Set(email.to_string()),
            nickname: Set(nickname.to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        users.push(model);
    }
    Ok(users)
}

async fn create_products(
    db: &DatabaseConnection,
    stores: &[store::Model],
) -> anyhow::Result<Vec<product::Model>> {
    let now = Utc::now();
    let mut products = Vec::new();
    let mut serial: i64 = 0;

    for animal in AnimalCategory::iter() {
        for category in animal.product_categories() {
            for n in 0..PRODUCTS_PER_CATEGORY {
                serial += 1;
                let store_id = stores
                    .get((serial as usize) % stores.len().max(1))
                    .map(|s| s.id);

                let model = product::ActiveModel {
                    store_id: Set(store_id),
                    image_url: Set(Some(format!(
                        "https://cdn.petmall.example/products/{}.jpg",
                        serial
                    ))),
                    animal_category: Set(animal.code()),
                    product_category: Set(category.code),
                    product_name: Set(format!("{} {} #{}", animal.label(), category.label, n + 1)),
                    model_num: Set(Some(format!("PM-{:04}", serial))),
                    origin_label: Set(Some("Korea".to_string())),
                    price: Set(5_000 + 1_500 * ((serial * 7) % 20)),
                    description: Set(Some(format!(
                        "{} for {} ({})",
                        category.label,
                        animal.label(),
                        category.token
                    ))),
                    stock: Set(((serial * 13) % 50) as i32),
                    wish_count: Set(((serial * 5) % 30) as i32),
                    purchase_count: Set(((serial * 11) % 90) as i32),
                    created_at: Set(now - Duration::days(serial)),
                    ..Default::default()
                }
                .insert(db)
                .await?;
                products.push(model);
            }
        }
    }

    Ok(products)
}

async fn create_wishes(
    db: &DatabaseConnection,
    users: &[user::Model],
    products: &[product::Model],
) -> anyhow::Result<usize> {
    let Some(first_user) = users.first() else {
        return Ok(0);
    };

    let mut count = 0;
    for product in products.iter().step_by(9).take(3) {
        wish::ActiveModel {
            user_id: Set(first_user.id),
            product_id: Set(product.id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        count += 1;
    }
    Ok(count)
}
