//! Demo catalog for local runs.

use sqlx::SqlitePool;

use super::pool::DatabaseSetupError;

/// (name, description, price, stock)
const DEMO_PRODUCTS: &[(&str, &str, f64, i64)] = &[
    ("PC Basic 8 Go", "Ordinateur de bureau simple, 8 Go RAM", 250.0, 15),
    ("PC Gamer RTX", "PC gamer avec carte graphique RTX 4070", 1200.0, 5),
    ("Serveur Entry", "Serveur d'entrée 4 cœurs, 16 Go RAM", 800.0, 3),
    ("SSD 1To NVMe", "Disque SSD NVMe 1 To haute vitesse", 100.0, 20),
    ("SSD 2To NVMe", "Disque SSD NVMe 2 To", 180.0, 10),
    ("RAM 16 Go DDR4", "Barrette mémoire 16 Go DDR4", 60.0, 25),
    ("RAM 32 Go DDR4", "Barrette mémoire 32 Go DDR4", 110.0, 10),
    ("Moniteur 27\" 144Hz", "Moniteur 27 pouces, rafraîchissement 144 Hz", 300.0, 8),
    ("Clavier Mécanique", "Clavier mécanique RGB", 80.0, 30),
    ("Souris Gaming", "Souris gaming haute précision", 70.0, 30),
];

/// Inserts the demo products if the catalog is empty.
///
/// Returns the number of products inserted; zero when a catalog already exists.
pub async fn seed_demo_catalog(pool: &SqlitePool) -> Result<usize, DatabaseSetupError> {
    let mut tx = pool.begin().await.map_err(DatabaseSetupError::Seed)?;

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(&mut *tx)
        .await
        .map_err(DatabaseSetupError::Seed)?;
    if existing > 0 {
        tracing::debug!(existing, "Catalog already populated, skipping demo seed");
        return Ok(0);
    }

    for (name, description, price, stock) in DEMO_PRODUCTS {
        sqlx::query("INSERT INTO products (name, description, price, stock) VALUES (?, ?, ?, ?)")
            .bind(*name)
            .bind(*description)
            .bind(*price)
            .bind(*stock)
            .execute(&mut *tx)
            .await
            .map_err(DatabaseSetupError::Seed)?;
    }

    tx.commit().await.map_err(DatabaseSetupError::Seed)?;
    tracing::info!(products = DEMO_PRODUCTS.len(), "Demo catalog seeded");
    Ok(DEMO_PRODUCTS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::{connect, migrate};
    use crate::config::DatabaseConfig;

    async fn empty_pool() -> SqlitePool {
        let pool = connect(&DatabaseConfig::for_url("sqlite::memory:"))
            .await
            .unwrap();
        migrate(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn seeds_ten_products_with_stable_ids() {
        let pool = empty_pool().await;

        assert_eq!(seed_demo_catalog(&pool).await.unwrap(), 10);

        let (name, price, stock): (String, f64, i64) =
            sqlx::query_as("SELECT name, price, stock FROM products WHERE id = 1")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(name, "PC Basic 8 Go");
        assert_eq!(price, 250.0);
        assert_eq!(stock, 15);
    }

    #[tokio::test]
    async fn seeding_twice_is_a_no_op() {
        let pool = empty_pool().await;

        seed_demo_catalog(&pool).await.unwrap();
        assert_eq!(seed_demo_catalog(&pool).await.unwrap(), 0);

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 10);
    }
}
