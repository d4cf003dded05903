use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::OrderId;
use domain::{Money, Order, OrderItem};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{OrderRepository, Result, StoreError};

/// PostgreSQL-backed order repository.
///
/// Line items are stored as a JSONB array next to the order header; the
/// repository never reads individual items back out with SQL.
#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Creates a new PostgreSQL order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies pending migrations. Never rolls anything back.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_order(row: PgRow) -> Result<Order> {
        let items: Vec<OrderItem> = serde_json::from_value(row.try_get("items")?)?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;

        Ok(Order::restore(
            OrderId::from_uuid(row.try_get::<Uuid, _>("id")?),
            items,
            Money::from_cents(row.try_get("total_cents")?),
            created_at,
        ))
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id()))]
    async fn save(&self, order: &Order) -> Result<OrderId> {
        let items = serde_json::to_value(order.items())?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, items, total_cents, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(order.id().as_uuid())
        .bind(items)
        .bind(order.total().cents())
        .bind(order.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return StoreError::Duplicate(order.id());
            }
            StoreError::Database(e)
        })?;

        tracing::debug!("order row inserted");
        Ok(order.id())
    }

    async fn list_all(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            r#"
            SELECT id, items, total_cents, created_at
            FROM orders
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_order).collect()
    }

    async fn count(&self) -> Result<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}
