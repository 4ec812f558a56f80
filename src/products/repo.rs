use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::listing::ListQuery;

use super::dto::ProductRequest;

const ORDER_COLUMNS: &[&str] = &["name", "slug", "price", "created_at", "updated_at"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub brand: Option<String>,
    pub supplier: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub barcode: Option<String>,
    pub price: Option<f64>,
    pub category_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Product row joined with its category, for read endpoints.
#[derive(Debug, Clone, FromRow)]
pub struct ProductWithCategory {
    #[sqlx(flatten)]
    pub product: Product,
    pub category_name: String,
    pub category_description: Option<String>,
}

const JOINED_SELECT: &str = r#"
    SELECT p.id, p.slug, p.name, p.brand, p.supplier, p.model, p.serial_number,
           p.barcode, p.price, p.category_id, p.created_at, p.updated_at,
           c.name AS category_name, c.description AS category_description
    FROM products p
    JOIN categories c ON c.id = p.category_id
"#;

impl Product {
    pub async fn list(
        db: &PgPool,
        query: &ListQuery,
    ) -> Result<Vec<ProductWithCategory>, sqlx::Error> {
        let col = query.order_column(ORDER_COLUMNS, "created_at");
        let sql = format!(
            "{} ORDER BY p.{} {} LIMIT $1 OFFSET $2",
            JOINED_SELECT,
            col,
            query.order_dir()
        );
        sqlx::query_as::<_, ProductWithCategory>(&sql)
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(db)
            .await
    }

    pub async fn count(db: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(db)
            .await
    }

    pub async fn get(db: &PgPool, id: Uuid) -> Result<Option<ProductWithCategory>, sqlx::Error> {
        let sql = format!("{} WHERE p.id = $1", JOINED_SELECT);
        sqlx::query_as::<_, ProductWithCategory>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn create(
        db: &PgPool,
        slug: &str,
        data: &ProductRequest,
    ) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (slug, name, brand, supplier, model, serial_number, barcode, price, category_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, slug, name, brand, supplier, model, serial_number, barcode, price,
                      category_id, created_at, updated_at
            "#,
        )
        .bind(slug)
        .bind(&data.name)
        .bind(&data.brand)
        .bind(&data.supplier)
        .bind(&data.model)
        .bind(&data.serial_number)
        .bind(&data.barcode)
        .bind(data.price)
        .bind(data.category_id)
        .fetch_one(db)
        .await
    }

    /// Full update; the slug keeps its creation-time value.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        data: &ProductRequest,
    ) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $2, brand = $3, supplier = $4, model = $5, serial_number = $6,
                barcode = $7, price = $8, category_id = $9, updated_at = now()
            WHERE id = $1
            RETURNING id, slug, name, brand, supplier, model, serial_number, barcode, price,
                      category_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.brand)
        .bind(&data.supplier)
        .bind(&data.model)
        .bind(&data.serial_number)
        .bind(&data.barcode)
        .bind(data.price)
        .bind(data.category_id)
        .fetch_optional(db)
        .await
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
