use crate::pool::DbPool;
use anyhow::Result;

/// Ordered schema migrations. Each entry runs at most once, tracked by name
/// in the `schema_migrations` table.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "001_create_product",
        "CREATE TABLE IF NOT EXISTS product (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            monthly_price DOUBLE PRECISION NOT NULL,
            instructor_name TEXT NOT NULL
        )",
    ),
    (
        "002_create_subscription",
        "CREATE TABLE IF NOT EXISTS subscription (
            id UUID PRIMARY KEY,
            product_id UUID NOT NULL,
            duration_in_months SMALLINT NOT NULL,
            tax DOUBLE PRECISION NOT NULL,
            total_cost DOUBLE PRECISION NOT NULL,
            status TEXT NOT NULL,
            start_date DATE NOT NULL,
            end_date DATE NOT NULL
        )",
    ),
    (
        "003_seed_products",
        "INSERT INTO product (id, name, description, monthly_price, instructor_name)
         VALUES
            ('a1f86d40-1e3b-4c02-9d9f-1a1f3f3f0a01', 'Yoga Foundations',
             'Daily guided yoga flows for all levels', 9.99, 'Anna Sharma'),
            ('b2c97e51-2f4c-4d13-8e8e-2b2e4e4e1b02', 'Pilates Core',
             'Mat pilates focused on core strength and posture', 12.50, 'Marta Keller'),
            ('c3da8f62-3a5d-4e24-9f9f-3c3f5f5f2c03', 'HIIT Express',
             'Short high-intensity interval workouts', 14.99, 'Diego Fuentes')
         ON CONFLICT (id) DO NOTHING",
    ),
];

/// Apply any migrations that have not run yet.
pub async fn run(pool: &DbPool) -> Result<()> {
    let mut client = pool.get().await?;

    client
        .execute(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                name TEXT PRIMARY KEY,
                applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )",
            &[],
        )
        .await?;

    for &(name, sql) in MIGRATIONS {
        let applied = client
            .query_opt(
                "SELECT name FROM schema_migrations WHERE name = $1",
                &[&name],
            )
            .await?
            .is_some();

        if applied {
            continue;
        }

        tracing::info!("Applying migration: {}", name);

        let txn = client.transaction().await?;
        txn.batch_execute(sql).await?;
        txn.execute("INSERT INTO schema_migrations (name) VALUES ($1)", &[&name])
            .await?;
        txn.commit().await?;
    }

    tracing::debug!("Database schema is up to date");

    Ok(())
}
