//! Default records inserted into empty tables at first startup.

use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Accommodation, AccommodationType, Product, User, UserRole};

use super::Repository;

/// Seed the default admin login, the accommodation units and the till
/// catalogue when their tables are empty. Existing data is never touched.
pub async fn seed_defaults(repo: &Repository) -> Result<(), AppError> {
    if table_is_empty(repo.pool(), "users").await? {
        tracing::info!("Seeding default admin login");
        repo.create_user(&User {
            username: "Admin".to_string(),
            password: "Admin".to_string(),
            role: UserRole::Admin,
        })
        .await?;
    }

    if table_is_empty(repo.pool(), "accommodations").await? {
        tracing::info!("Seeding accommodation units");
        for unit in default_accommodations() {
            repo.create_accommodation(&unit).await?;
        }
    }

    if table_is_empty(repo.pool(), "products").await? {
        tracing::info!("Seeding till catalogue");
        for product in default_products() {
            repo.create_product(&product).await?;
        }
    }

    Ok(())
}

async fn table_is_empty(pool: &SqlitePool, table: &str) -> Result<bool, AppError> {
    // Table names come from the fixed lists above, never from input
    let row = sqlx::query(&format!("SELECT COUNT(*) AS n FROM {table}"))
        .fetch_one(pool)
        .await?;
    let n: i64 = row.get("n");
    Ok(n == 0)
}

fn default_accommodations() -> Vec<Accommodation> {
    let yurt = |id: &str, name: &str| Accommodation {
        id: id.to_string(),
        name: name.to_string(),
        accommodation_type: AccommodationType::Yurt,
        capacity: 4,
        attendee_ids: Vec::new(),
    };
    vec![
        yurt("y1", "The Golden Yurt"),
        yurt("y2", "The Silver Yurt"),
        yurt("y3", "The Bronze Yurt"),
        Accommodation {
            id: "c1".to_string(),
            name: "Vintage Caravan".to_string(),
            accommodation_type: AccommodationType::Caravan,
            capacity: 2,
            attendee_ids: Vec::new(),
        },
    ]
}

fn default_products() -> Vec<Product> {
    let product = |id: &str, name: &str, price: f64, color: &str| Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        color: Some(color.to_string()),
    };
    vec![
        product("p1", "Beer", 5.00, "bg-amber-500"),
        product("p2", "Cider", 5.50, "bg-orange-400"),
        product("p3", "Soft Drink", 2.50, "bg-blue-400"),
        product("p4", "Spirit + Mixer", 6.00, "bg-purple-500"),
        product("p5", "Water", 2.00, "bg-cyan-500"),
    ]
}
